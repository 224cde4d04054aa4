//! Wire shapes returned by the movie database API.
//!
//! Only the fields the client uses are declared; everything else in the
//! response is ignored. Optional or frequently-null fields default so a
//! sparse record still decodes.

use serde::{Deserialize, Serialize};

/// Page envelope used by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedDto<T> {
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDto {
    #[serde(default)]
    pub status_code: Option<i32>,
    pub status_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDto {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub adult: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreDto {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsDto {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditsDto {
    pub id: u64,
    #[serde(default)]
    pub cast: Vec<CastDto>,
    #[serde(default)]
    pub crew: Vec<CrewDto>,
}

/// Entry of a person's `known_for` list; movies carry `title`, shows `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct KnownForDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub known_for: Vec<KnownForDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetailsDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    #[serde(default)]
    pub popularity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonCastCreditDto {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonCrewCreditDto {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonMovieCreditsDto {
    #[serde(default)]
    pub cast: Vec<PersonCastCreditDto>,
    #[serde(default)]
    pub crew: Vec<PersonCrewCreditDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvShowDto {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub origin_country: Vec<String>,
}

/// Response of `GET /authentication/token/new` and
/// `POST /authentication/token/validate_with_login`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestTokenDto {
    pub success: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub request_token: String,
}

/// Body of `POST /authentication/token/validate_with_login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequestDto<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub request_token: &'a str,
}

/// Body of `POST /authentication/session/new`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequestDto<'a> {
    pub request_token: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionDto {
    pub success: bool,
    pub session_id: String,
}

/// Body of `DELETE /authentication/session`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteSessionDto<'a> {
    pub session_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusDto {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_movie_deserialize() {
        let json = r#"{
            "page": 1,
            "results": [{
                "adult": false,
                "backdrop_path": "/back.jpg",
                "genre_ids": [18, 53],
                "id": 550,
                "original_language": "en",
                "original_title": "Fight Club",
                "overview": "A ticking-time-bomb insomniac...",
                "popularity": 61.416,
                "poster_path": "/poster.jpg",
                "release_date": "1999-10-15",
                "title": "Fight Club",
                "video": false,
                "vote_average": 8.4,
                "vote_count": 26280
            }],
            "total_pages": 500,
            "total_results": 10000
        }"#;

        let page: PagedDto<MovieDto> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 500);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].genre_ids, vec![18, 53]);
    }

    #[test]
    fn test_sparse_movie_deserialize() {
        let movie: MovieDto = serde_json::from_str(r#"{"id": 1, "poster_path": null}"#).unwrap();
        assert_eq!(movie.id, 1);
        assert!(movie.poster_path.is_none());
        assert!(movie.title.is_empty());
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"status_code": 7, "status_message": "Invalid API key: You must be granted a valid key.", "success": false}"#;
        let err: ApiErrorDto = serde_json::from_str(json).unwrap();
        assert_eq!(err.status_code, Some(7));
        assert!(err.status_message.starts_with("Invalid API key"));
    }

    #[test]
    fn test_login_request_serialize() {
        let body = LoginRequestDto {
            username: "ada",
            password: "secret",
            request_token: "tok",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["username"], "ada");
        assert_eq!(json["request_token"], "tok");
    }
}
