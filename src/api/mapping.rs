//! Conversion from wire DTOs to domain models.
//!
//! Image paths come back relative (`/abc.jpg`) and are resolved against the
//! configured image base URL. Dates come back as `YYYY-MM-DD` or as an empty
//! string, which maps to `None`.

use chrono::NaiveDate;

use super::dto::{
    AccountDto, CastDto, CreditsDto, CrewDto, MovieDetailsDto, MovieDto, PagedDto,
    PersonDetailsDto, PersonDto, PersonMovieCreditsDto, TvShowDto,
};
use crate::models::{
    Account, CastMember, Credit, CrewMember, Genre, Movie, MovieDetails, Paged, Person,
    PersonCredit, PersonDetails, TvShow,
};

/// Resolves relative image paths into absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve an image path. Missing or blank paths resolve to `None`.
    pub fn resolve(&self, path: Option<String>) -> Option<String> {
        let path = path?;
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        if path.starts_with('/') {
            Some(format!("{}{}", self.base, path))
        } else {
            Some(format!("{}/{}", self.base, path))
        }
    }
}

/// Parse an API date; empty or malformed strings become `None`.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Conversion of a DTO into its domain model.
pub trait IntoDomain<T> {
    fn into_domain(self, images: &ImageUrls) -> T;
}

impl<D, T> IntoDomain<Paged<T>> for PagedDto<D>
where
    D: IntoDomain<T>,
{
    fn into_domain(self, images: &ImageUrls) -> Paged<T> {
        Paged {
            page: self.page,
            results: self
                .results
                .into_iter()
                .map(|item| item.into_domain(images))
                .collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

impl IntoDomain<Movie> for MovieDto {
    fn into_domain(self, images: &ImageUrls) -> Movie {
        Movie {
            id: self.id,
            release_date: parse_date(self.release_date.as_deref()),
            poster_url: images.resolve(self.poster_path),
            backdrop_url: images.resolve(self.backdrop_path),
            title: self.title,
            original_title: self.original_title,
            overview: self.overview,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
            genre_ids: self.genre_ids,
            adult: self.adult,
        }
    }
}

impl IntoDomain<MovieDetails> for MovieDetailsDto {
    fn into_domain(self, images: &ImageUrls) -> MovieDetails {
        MovieDetails {
            id: self.id,
            title: self.title,
            tagline: non_empty(self.tagline),
            overview: self.overview.unwrap_or_default(),
            runtime: self.runtime,
            genres: self
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            release_date: parse_date(self.release_date.as_deref()),
            status: self.status,
            budget: self.budget,
            revenue: self.revenue,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            poster_url: images.resolve(self.poster_path),
            backdrop_url: images.resolve(self.backdrop_path),
            homepage: non_empty(self.homepage),
            imdb_id: non_empty(self.imdb_id),
        }
    }
}

impl IntoDomain<CastMember> for CastDto {
    fn into_domain(self, images: &ImageUrls) -> CastMember {
        CastMember {
            id: self.id,
            name: self.name,
            character: self.character.unwrap_or_default(),
            profile_url: images.resolve(self.profile_path),
            order: self.order,
        }
    }
}

impl IntoDomain<CrewMember> for CrewDto {
    fn into_domain(self, images: &ImageUrls) -> CrewMember {
        CrewMember {
            id: self.id,
            name: self.name,
            job: self.job,
            department: self.department,
            profile_url: images.resolve(self.profile_path),
        }
    }
}

impl IntoDomain<Credit> for CreditsDto {
    fn into_domain(self, images: &ImageUrls) -> Credit {
        let mut cast: Vec<CastMember> = self
            .cast
            .into_iter()
            .map(|c| c.into_domain(images))
            .collect();
        cast.sort_by_key(|c| c.order);

        Credit {
            id: self.id,
            cast,
            crew: self
                .crew
                .into_iter()
                .map(|c| c.into_domain(images))
                .collect(),
        }
    }
}

impl IntoDomain<Person> for PersonDto {
    fn into_domain(self, images: &ImageUrls) -> Person {
        Person {
            id: self.id,
            name: self.name,
            profile_url: images.resolve(self.profile_path),
            popularity: self.popularity,
            known_for_department: non_empty(self.known_for_department),
            known_for: self
                .known_for
                .into_iter()
                .filter_map(|k| non_empty(k.title).or(non_empty(k.name)))
                .collect(),
        }
    }
}

impl IntoDomain<PersonDetails> for PersonDetailsDto {
    fn into_domain(self, images: &ImageUrls) -> PersonDetails {
        PersonDetails {
            id: self.id,
            name: self.name,
            biography: self.biography.unwrap_or_default(),
            birthday: parse_date(self.birthday.as_deref()),
            deathday: parse_date(self.deathday.as_deref()),
            place_of_birth: non_empty(self.place_of_birth),
            profile_url: images.resolve(self.profile_path),
            known_for_department: non_empty(self.known_for_department),
            also_known_as: self.also_known_as,
            popularity: self.popularity,
        }
    }
}

/// Cast credits first, then crew credits, each keeping API order.
impl IntoDomain<Vec<PersonCredit>> for PersonMovieCreditsDto {
    fn into_domain(self, images: &ImageUrls) -> Vec<PersonCredit> {
        let cast = self.cast.into_iter().map(|c| PersonCredit {
            movie_id: c.id,
            title: c.title,
            role: c.character.unwrap_or_default(),
            release_date: parse_date(c.release_date.as_deref()),
            poster_url: images.resolve(c.poster_path),
        });
        let crew = self.crew.into_iter().map(|c| PersonCredit {
            movie_id: c.id,
            title: c.title,
            role: c.job,
            release_date: parse_date(c.release_date.as_deref()),
            poster_url: images.resolve(c.poster_path),
        });
        cast.chain(crew).collect()
    }
}

impl IntoDomain<TvShow> for TvShowDto {
    fn into_domain(self, images: &ImageUrls) -> TvShow {
        TvShow {
            id: self.id,
            name: self.name,
            overview: self.overview,
            first_air_date: parse_date(self.first_air_date.as_deref()),
            poster_url: images.resolve(self.poster_path),
            backdrop_url: images.resolve(self.backdrop_path),
            vote_average: self.vote_average,
            origin_country: self.origin_country,
        }
    }
}

impl AccountDto {
    /// Build the account record for a freshly created session.
    pub fn into_account(self, session_id: String) -> Account {
        Account {
            account_id: self.id,
            session_id,
            name: self.name,
            user_name: self.username,
        }
    }
}
