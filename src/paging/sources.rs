use async_trait::async_trait;

use super::source::{LoadParams, LoadResult, PagingSource};
use crate::models::{Movie, MovieCategory, Paged, Person, TvCategory, TvShow};
use crate::outcome::Outcome;
use crate::repository::{MoviesRepository, PeopleRepository, TvShowsRepository};

/// First page number the API accepts.
const FIRST_PAGE: u32 = 1;

/// Turn one repository outcome into a load result.
///
/// `prev_key` is `None` on the first page and `key - 1` otherwise. There is
/// no next page when the page came back short or empty, or when `key` has
/// reached the reported page count.
pub fn page_result<V>(key: u32, load_size: usize, outcome: Outcome<Paged<V>>) -> LoadResult<u32, V> {
    let page = match outcome {
        Outcome::Success(page) => page,
        Outcome::Failure(failure) => return LoadResult::Error(failure),
    };

    let prev_key = if key <= FIRST_PAGE { None } else { Some(key - 1) };
    let len = page.results.len();
    let next_key = if len == 0 || len < load_size || key >= page.total_pages {
        None
    } else {
        Some(key + 1)
    };

    let loaded = (key.saturating_sub(FIRST_PAGE) as usize).saturating_mul(load_size) + len;
    let items_after = if next_key.is_none() {
        0
    } else {
        (page.total_results as usize).saturating_sub(loaded)
    };

    LoadResult::Page {
        data: page.results,
        prev_key,
        next_key,
        items_after: Some(items_after),
    }
}

/// Popular people, page by page.
#[derive(Debug, Clone)]
pub struct PeoplePagingSource {
    repository: PeopleRepository,
}

impl PeoplePagingSource {
    pub fn new(repository: PeopleRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PagingSource for PeoplePagingSource {
    type Value = Person;

    async fn load(&self, params: LoadParams<u32>) -> LoadResult<u32, Person> {
        let key = params.key.unwrap_or(FIRST_PAGE);
        let outcome = self.repository.popular_people(key).await;
        page_result(key, params.load_size, outcome)
    }
}

/// Movies of one category, page by page.
#[derive(Debug, Clone)]
pub struct MoviesPagingSource {
    repository: MoviesRepository,
    category: MovieCategory,
}

impl MoviesPagingSource {
    pub fn new(repository: MoviesRepository, category: MovieCategory) -> Self {
        Self {
            repository,
            category,
        }
    }
}

#[async_trait]
impl PagingSource for MoviesPagingSource {
    type Value = Movie;

    async fn load(&self, params: LoadParams<u32>) -> LoadResult<u32, Movie> {
        let key = params.key.unwrap_or(FIRST_PAGE);
        let outcome = self.repository.movies(self.category, key).await;
        page_result(key, params.load_size, outcome)
    }
}

/// TV shows of one category, page by page.
#[derive(Debug, Clone)]
pub struct TvShowsPagingSource {
    repository: TvShowsRepository,
    category: TvCategory,
}

impl TvShowsPagingSource {
    pub fn new(repository: TvShowsRepository, category: TvCategory) -> Self {
        Self {
            repository,
            category,
        }
    }
}

#[async_trait]
impl PagingSource for TvShowsPagingSource {
    type Value = TvShow;

    async fn load(&self, params: LoadParams<u32>) -> LoadResult<u32, TvShow> {
        let key = params.key.unwrap_or(FIRST_PAGE);
        let outcome = self.repository.tv_shows(self.category, key).await;
        page_result(key, params.load_size, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Failure;

    fn paged(page: u32, len: usize, total_pages: u32, total_results: u32) -> Outcome<Paged<u32>> {
        Outcome::Success(Paged {
            page,
            results: (0..len as u32).collect(),
            total_pages,
            total_results,
        })
    }

    #[test]
    fn test_first_full_page() {
        match page_result(1, 20, paged(1, 20, 2, 25)) {
            LoadResult::Page {
                data,
                prev_key,
                next_key,
                items_after,
            } => {
                assert_eq!(data.len(), 20);
                assert_eq!(prev_key, None);
                assert_eq!(next_key, Some(2));
                assert_eq!(items_after, Some(5));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_short_last_page() {
        match page_result(2, 20, paged(2, 5, 2, 25)) {
            LoadResult::Page {
                prev_key,
                next_key,
                items_after,
                ..
            } => {
                assert_eq!(prev_key, Some(1));
                assert_eq!(next_key, None);
                assert_eq!(items_after, Some(0));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_full_page_at_total_pages_ends() {
        let result = page_result(3, 20, paged(3, 20, 3, 60));
        assert!(matches!(result, LoadResult::Page { next_key: None, .. }));
    }

    #[test]
    fn test_empty_page_ends() {
        let result = page_result(1, 20, paged(1, 0, 0, 0));
        assert!(matches!(
            result,
            LoadResult::Page {
                next_key: None,
                prev_key: None,
                ..
            }
        ));
    }

    #[test]
    fn test_failure_passes_through() {
        let failure = Failure::new("offline");
        let result = page_result::<u32>(4, 20, Outcome::Failure(failure.clone()));
        assert_eq!(result, LoadResult::Error(failure));
    }
}
