use serde::{Deserialize, Serialize};

/// Cast and crew of a movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credit {
    pub id: u64,
    /// Ordered by billing.
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl Credit {
    /// Crew members credited as directors.
    pub fn directors(&self) -> impl Iterator<Item = &CrewMember> {
        self.crew.iter().filter(|c| c.job == "Director")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_url: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub department: String,
    pub profile_url: Option<String>,
}
