use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Full record for the movie details screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
    pub release_date: Option<NaiveDate>,
    pub status: String,
    pub budget: u64,
    pub revenue: u64,
    pub vote_average: f64,
    pub vote_count: u32,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
}

impl MovieDetails {
    /// Runtime formatted as `2h 19m`.
    pub fn runtime_label(&self) -> Option<String> {
        match self.runtime? {
            0 => None,
            m if m < 60 => Some(format!("{}m", m)),
            m => Some(format!("{}h {}m", m / 60, m % 60)),
        }
    }
}
