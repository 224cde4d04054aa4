use async_trait::async_trait;

use crate::outcome::Failure;

/// Page size the API serves.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pager configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    /// Items requested per load
    pub page_size: usize,
    /// Key of the first refresh, `None` for the source's first page
    pub initial_key: Option<u32>,
    /// Report the count of not-yet-loaded items
    pub enable_placeholders: bool,
    /// Start the next append when an accessed item is this close to the end
    pub prefetch_distance: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_key: None,
            enable_placeholders: true,
            prefetch_distance: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_initial_key(mut self, key: u32) -> Self {
        self.initial_key = Some(key);
        self
    }

    pub fn with_placeholders(mut self, enabled: bool) -> Self {
        self.enable_placeholders = enabled;
        self
    }

    pub fn with_prefetch_distance(mut self, distance: usize) -> Self {
        self.prefetch_distance = distance;
        self
    }
}

/// Why a load was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// First page after creation or invalidation
    Refresh,
    /// Page following the last loaded one
    Append,
}

/// Parameters of a single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams<K> {
    /// Page key, `None` for the initial page
    pub key: Option<K>,
    /// Requested number of items
    pub load_size: usize,
    pub kind: LoadKind,
}

impl<K> LoadParams<K> {
    pub fn refresh(key: Option<K>, load_size: usize) -> Self {
        Self {
            key,
            load_size,
            kind: LoadKind::Refresh,
        }
    }

    pub fn append(key: K, load_size: usize) -> Self {
        Self {
            key: Some(key),
            load_size,
            kind: LoadKind::Append,
        }
    }
}

/// Result of a single load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult<K, V> {
    Page {
        data: Vec<V>,
        /// Key of the preceding page, `None` on the first page
        prev_key: Option<K>,
        /// Key of the following page, `None` at the end
        next_key: Option<K>,
        /// Items not yet loaded after this page, when known
        items_after: Option<usize>,
    },
    Error(Failure),
}

/// Loads pages keyed by page number.
#[async_trait]
pub trait PagingSource: Send + Sync {
    type Value: Send;

    async fn load(&self, params: LoadParams<u32>) -> LoadResult<u32, Self::Value>;
}
