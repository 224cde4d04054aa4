use serde::{Deserialize, Serialize};

/// One upstream page of results, in the order the API returned them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    /// 1-based page number.
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> Paged<T> {
    /// Whether the API reports pages after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U, F>(self, f: F) -> Paged<U>
    where
        F: FnMut(T) -> U,
    {
        Paged {
            page: self.page,
            results: self.results.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}
