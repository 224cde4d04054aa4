use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie as it appears in list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    /// Absolute poster URL, if the movie has one.
    pub poster_url: Option<String>,
    /// Absolute backdrop URL, if the movie has one.
    pub backdrop_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub popularity: f64,
    pub genre_ids: Vec<u32>,
    pub adult: bool,
}

impl Movie {
    /// Release year, if the release date is known.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

/// The movie lists exposed by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovieCategory {
    #[default]
    Popular,
    NowPlaying,
    TopRated,
    Upcoming,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 4] = [
        MovieCategory::Popular,
        MovieCategory::NowPlaying,
        MovieCategory::TopRated,
        MovieCategory::Upcoming,
    ];

    /// Path segment under `/movie/`.
    pub fn path(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "popular",
            MovieCategory::NowPlaying => "now_playing",
            MovieCategory::TopRated => "top_rated",
            MovieCategory::Upcoming => "upcoming",
        }
    }

    /// Parse a CLI/user token such as `top-rated` or `now_playing`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.path() == normalized)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovieCategory::Popular => "Popular",
            MovieCategory::NowPlaying => "Now Playing",
            MovieCategory::TopRated => "Top Rated",
            MovieCategory::Upcoming => "Upcoming",
        }
    }
}
