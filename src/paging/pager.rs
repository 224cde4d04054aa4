use std::collections::HashMap;
use std::sync::Arc;

use futures::stream::BoxStream;
use tokio::sync::Mutex;

use super::source::{LoadKind, LoadParams, LoadResult, PagingConfig, PagingSource};
use crate::flow::StateFlow;
use crate::outcome::Failure;

/// State of one direction of loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    NotLoading { end_of_pagination_reached: bool },
    Loading,
    Error(Failure),
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::NotLoading {
            end_of_pagination_reached: false,
        }
    }
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&Failure> {
        match self {
            LoadState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn end_reached(&self) -> bool {
        matches!(
            self,
            LoadState::NotLoading {
                end_of_pagination_reached: true
            }
        )
    }
}

/// Snapshot of everything a pager has loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingData<V> {
    /// Loaded items in page order
    pub items: Vec<V>,
    pub refresh: LoadState,
    pub append: LoadState,
    /// Items known to exist after the loaded ones, when placeholders are on
    pub placeholders_after: Option<usize>,
}

impl<V> Default for PagingData<V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            refresh: LoadState::default(),
            append: LoadState::default(),
            placeholders_after: None,
        }
    }
}

impl<V> PagingData<V> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The failure to show, preferring a refresh failure.
    pub fn error(&self) -> Option<&Failure> {
        self.refresh.error().or_else(|| self.append.error())
    }
}

/// A load that has been issued and may still be applied.
#[derive(Debug, Clone, Copy)]
struct Ticket {
    generation: u64,
    request_id: u64,
    params: LoadParams<u32>,
}

struct PagerCore<V> {
    /// Bumped by every refresh; loads from older generations are dropped
    generation: u64,
    next_request_id: u64,
    /// Latest request id per key; older requests for the same key are dropped
    in_flight: HashMap<Option<u32>, u64>,
    pages: Vec<Vec<V>>,
    next_key: Option<u32>,
    items_after: Option<usize>,
    refresh: LoadState,
    append: LoadState,
    failed: Option<LoadParams<u32>>,
}

impl<V> PagerCore<V> {
    fn new() -> Self {
        Self {
            generation: 0,
            next_request_id: 0,
            in_flight: HashMap::new(),
            pages: Vec::new(),
            next_key: None,
            items_after: None,
            refresh: LoadState::default(),
            append: LoadState::default(),
            failed: None,
        }
    }

    fn issue(&mut self, params: LoadParams<u32>) -> Ticket {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight.insert(params.key, request_id);
        match params.kind {
            LoadKind::Refresh => self.refresh = LoadState::Loading,
            LoadKind::Append => self.append = LoadState::Loading,
        }
        Ticket {
            generation: self.generation,
            request_id,
            params,
        }
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
            && self.in_flight.get(&ticket.params.key) == Some(&ticket.request_id)
    }

    fn item_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    fn apply(&mut self, params: LoadParams<u32>, result: LoadResult<u32, V>) {
        match result {
            LoadResult::Page {
                data,
                next_key,
                items_after,
                ..
            } => {
                if params.kind == LoadKind::Refresh {
                    self.pages.clear();
                    self.refresh = LoadState::default();
                }
                self.pages.push(data);
                self.next_key = next_key;
                self.items_after = items_after;
                self.append = LoadState::NotLoading {
                    end_of_pagination_reached: next_key.is_none(),
                };
                self.failed = None;
            }
            LoadResult::Error(failure) => {
                match params.kind {
                    LoadKind::Refresh => self.refresh = LoadState::Error(failure),
                    LoadKind::Append => self.append = LoadState::Error(failure),
                }
                self.failed = Some(params);
            }
        }
    }
}

struct PagerInner<V> {
    source: Arc<dyn PagingSource<Value = V>>,
    config: PagingConfig,
    state: StateFlow<PagingData<V>>,
    core: Mutex<PagerCore<V>>,
}

/// Drives a [`PagingSource`] and publishes what it has loaded.
///
/// Nothing loads until [`refresh`](Pager::refresh) is called. Clones share
/// the same pages and state.
pub struct Pager<V> {
    inner: Arc<PagerInner<V>>,
}

impl<V> Clone for Pager<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Pager<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(source: Arc<dyn PagingSource<Value = V>>, config: PagingConfig) -> Self {
        Self {
            inner: Arc::new(PagerInner {
                source,
                config,
                state: StateFlow::new(PagingData::default()),
                core: Mutex::new(PagerCore::new()),
            }),
        }
    }

    pub fn config(&self) -> &PagingConfig {
        &self.inner.config
    }

    /// Drop every loaded page and load from the initial key again.
    ///
    /// Loads still in flight from before the refresh are discarded when they
    /// complete.
    pub async fn refresh(&self) {
        let ticket = {
            let mut core = self.inner.core.lock().await;
            core.generation += 1;
            core.in_flight.clear();
            core.pages.clear();
            core.next_key = None;
            core.items_after = None;
            core.failed = None;
            core.append = LoadState::default();
            let ticket = core.issue(LoadParams::refresh(
                self.inner.config.initial_key,
                self.inner.config.page_size,
            ));
            self.publish(&core);
            ticket
        };
        self.run(ticket).await;
    }

    /// Load the page after the last loaded one.
    ///
    /// Does nothing before the first refresh completes, at the end of the
    /// list, after a failed load (see [`retry`](Pager::retry)), or while the
    /// same page is already loading.
    pub async fn load_next(&self) {
        let ticket = {
            let mut core = self.inner.core.lock().await;
            if core.refresh != LoadState::default() || core.append.error().is_some() {
                return;
            }
            let Some(key) = core.next_key else {
                return;
            };
            if core.in_flight.contains_key(&Some(key)) {
                tracing::debug!(key, "Append already in flight");
                return;
            }
            let ticket = core.issue(LoadParams::append(key, self.inner.config.page_size));
            self.publish(&core);
            ticket
        };
        self.run(ticket).await;
    }

    /// Re-issue the last failed load, if any.
    pub async fn retry(&self) {
        let ticket = {
            let mut core = self.inner.core.lock().await;
            let Some(params) = core.failed.take() else {
                return;
            };
            let ticket = core.issue(params);
            self.publish(&core);
            ticket
        };
        self.run(ticket).await;
    }

    /// Tell the pager an item was shown; loads the next page when `index` is
    /// within the prefetch distance of the end.
    pub async fn on_item_accessed(&self, index: usize) {
        let loaded = self.inner.core.lock().await.item_count();
        if index.saturating_add(self.inner.config.prefetch_distance) >= loaded {
            self.load_next().await;
        }
    }

    pub fn snapshot(&self) -> PagingData<V> {
        self.inner.state.value()
    }

    /// Snapshots starting with the current one.
    pub fn subscribe(&self) -> BoxStream<'static, PagingData<V>> {
        self.inner.state.stream()
    }

    async fn run(&self, ticket: Ticket) {
        let result = self.inner.source.load(ticket.params).await;

        let mut core = self.inner.core.lock().await;
        if !core.is_current(&ticket) {
            tracing::debug!(
                key = ?ticket.params.key,
                request_id = ticket.request_id,
                "Dropping superseded page load"
            );
            return;
        }
        core.in_flight.remove(&ticket.params.key);
        if let LoadResult::Error(failure) = &result {
            tracing::warn!(
                key = ?ticket.params.key,
                kind = ?ticket.params.kind,
                code = failure.error_code,
                "Page load failed"
            );
        }
        core.apply(ticket.params, result);
        self.publish(&core);
    }

    fn publish(&self, core: &PagerCore<V>) {
        let placeholders_after = if self.inner.config.enable_placeholders {
            core.items_after
        } else {
            None
        };
        self.inner.state.set(PagingData {
            items: core.pages.iter().flatten().cloned().collect(),
            refresh: core.refresh.clone(),
            append: core.append.clone(),
            placeholders_after,
        });
    }
}

impl<V> std::fmt::Debug for Pager<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("config", &self.inner.config)
            .finish()
    }
}
