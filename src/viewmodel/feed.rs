use std::sync::{Arc, Mutex, PoisonError};

use futures::StreamExt;
use tokio::task::AbortHandle;

use super::scope::ViewModelScope;
use crate::paging::{Pager, PagingConfig, PagingData, PagingSource};

struct Binding<V> {
    pager: Pager<V>,
    forward: AbortHandle,
    refresh: AbortHandle,
}

/// The pager currently backing a list screen.
///
/// Replacing the pager stops the old one: its snapshots are no longer
/// forwarded and its pending first load is aborted.
pub(crate) struct PagedFeed<V> {
    config: PagingConfig,
    current: Mutex<Option<Binding<V>>>,
}

impl<V> PagedFeed<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(config: PagingConfig) -> Self {
        Self {
            config,
            current: Mutex::new(None),
        }
    }

    /// Start a new pager over `source`, forward its snapshots to `on_update`
    /// and kick off its first load.
    pub(crate) fn attach<F>(
        &self,
        scope: &ViewModelScope,
        source: Arc<dyn PagingSource<Value = V>>,
        mut on_update: F,
    ) where
        F: FnMut(PagingData<V>) + Send + 'static,
    {
        let pager = Pager::new(source, self.config);
        let mut updates = pager.subscribe();
        let forward = scope.spawn(async move {
            while let Some(data) = updates.next().await {
                on_update(data);
            }
        });
        let refresh = {
            let pager = pager.clone();
            scope.spawn(async move { pager.refresh().await })
        };

        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Binding {
                pager,
                forward,
                refresh,
            });
        if let Some(previous) = previous {
            previous.forward.abort();
            previous.refresh.abort();
        }
    }

    pub(crate) fn pager(&self) -> Option<Pager<V>> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|binding| binding.pager.clone())
    }

    /// Run `f` against the current pager on the scope.
    pub(crate) fn with_pager<F, Fut>(&self, scope: &ViewModelScope, f: F)
    where
        F: FnOnce(Pager<V>) -> Fut,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        if let Some(pager) = self.pager() {
            scope.spawn(f(pager));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::{LoadParams, LoadResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// One page of `value`, served after a short delay.
    struct SlowSource {
        value: usize,
        completed: AtomicUsize,
    }

    impl SlowSource {
        fn new(value: usize) -> Arc<Self> {
            Arc::new(Self {
                value,
                completed: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl PagingSource for SlowSource {
        type Value = usize;

        async fn load(&self, _params: LoadParams<u32>) -> LoadResult<u32, usize> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            LoadResult::Page {
                data: vec![self.value],
                prev_key: None,
                next_key: None,
                items_after: Some(0),
            }
        }
    }

    #[tokio::test]
    async fn test_attach_aborts_previous_refresh() {
        let scope = ViewModelScope::new();
        let feed = PagedFeed::new(PagingConfig::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let old = SlowSource::new(1);
        {
            let seen = seen.clone();
            feed.attach(&scope, old.clone(), move |data| {
                seen.lock().unwrap().push(data.items);
            });
        }
        tokio::time::sleep(Duration::from_millis(10)).await;

        let new = SlowSource::new(2);
        {
            let seen = seen.clone();
            feed.attach(&scope, new.clone(), move |data| {
                seen.lock().unwrap().push(data.items);
            });
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(old.completed.load(Ordering::SeqCst), 0);
        assert_eq!(new.completed.load(Ordering::SeqCst), 1);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.last(), Some(&vec![2]));
        assert!(!seen.contains(&vec![1]));
    }
}
