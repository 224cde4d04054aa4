use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvShow {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub first_air_date: Option<NaiveDate>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub vote_average: f64,
    pub origin_country: Vec<String>,
}

/// The TV lists exposed by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvCategory {
    #[default]
    Popular,
    TopRated,
    OnTheAir,
    AiringToday,
}

impl TvCategory {
    pub const ALL: [TvCategory; 4] = [
        TvCategory::Popular,
        TvCategory::TopRated,
        TvCategory::OnTheAir,
        TvCategory::AiringToday,
    ];

    /// Path segment under `/tv/`.
    pub fn path(&self) -> &'static str {
        match self {
            TvCategory::Popular => "popular",
            TvCategory::TopRated => "top_rated",
            TvCategory::OnTheAir => "on_the_air",
            TvCategory::AiringToday => "airing_today",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.path() == normalized)
    }
}
