use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person as listed by the popular people endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub profile_url: Option<String>,
    pub popularity: f64,
    pub known_for_department: Option<String>,
    /// Titles the person is best known for, in API order.
    pub known_for: Vec<String>,
}

/// Full record for the person details screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonDetails {
    pub id: u64,
    pub name: String,
    pub biography: String,
    pub birthday: Option<NaiveDate>,
    pub deathday: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub profile_url: Option<String>,
    pub known_for_department: Option<String>,
    pub also_known_as: Vec<String>,
    pub popularity: f64,
}

impl PersonDetails {
    /// Age in whole years at `today`, or at death when the person has died.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let birthday = self.birthday?;
        let end = self.deathday.unwrap_or(today);
        end.years_since(birthday)
    }
}

/// A movie the person appeared in or worked on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonCredit {
    pub movie_id: u64,
    pub title: String,
    /// Character for cast credits, job for crew credits.
    pub role: String,
    pub release_date: Option<NaiveDate>,
    pub poster_url: Option<String>,
}
