//! Observable state holder.
//!
//! [`StateFlow`] keeps one current value and notifies observers when it
//! changes. New subscribers see the latest value immediately. Slow observers
//! may miss intermediate values but always converge on the latest one, and
//! values are never delivered out of order.

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;

/// A value that can be read, replaced and observed.
///
/// Clones share the same underlying value.
#[derive(Debug, Clone)]
pub struct StateFlow<T> {
    tx: watch::Sender<T>,
}

impl<T> StateFlow<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Current value.
    pub fn value(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify observers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modify the value in place and notify observers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        self.tx.send_modify(f);
    }

    /// Raw receiver, for callers that want `changed()` semantics.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Stream of values starting with the current one.
    ///
    /// Dropping the stream ends the subscription. The stream ends once every
    /// clone of this flow has been dropped.
    pub fn stream(&self) -> BoxStream<'static, T> {
        let mut rx = self.tx.subscribe();
        let first = rx.borrow_and_update().clone();
        let rest = stream::unfold(rx, |mut rx| async move {
            rx.changed().await.ok()?;
            let value = rx.borrow_and_update().clone();
            Some((value, rx))
        });
        stream::once(async move { first }).chain(rest).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_set_and_value() {
        let flow = StateFlow::new(1);
        flow.set(2);
        assert_eq!(flow.value(), 2);

        flow.update(|v| *v += 10);
        assert_eq!(flow.value(), 12);
    }

    #[tokio::test]
    async fn test_stream_replays_latest() {
        let flow = StateFlow::new("a".to_string());
        flow.set("b".to_string());

        let mut stream = flow.stream();
        assert_eq!(stream.next().await.as_deref(), Some("b"));

        flow.set("c".to_string());
        assert_eq!(stream.next().await.as_deref(), Some("c"));
    }

    #[tokio::test]
    async fn test_stream_converges_on_latest() {
        let flow = StateFlow::new(0);
        let mut stream = flow.stream();
        assert_eq!(stream.next().await, Some(0));

        for i in 1..=5 {
            flow.set(i);
        }
        assert_eq!(stream.next().await, Some(5));
    }

    #[tokio::test]
    async fn test_stream_ends_when_flow_dropped() {
        let flow = StateFlow::new(0);
        let mut stream = flow.stream();
        assert_eq!(stream.next().await, Some(0));

        drop(flow);
        let next = tokio::time::timeout(Duration::from_secs(1), stream.next())
            .await
            .unwrap();
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_dropping_stream_unsubscribes() {
        let flow = StateFlow::new(0);
        let stream = flow.stream();
        assert_eq!(flow.subscriber_count(), 1);

        drop(stream);
        assert_eq!(flow.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_value() {
        let flow = StateFlow::new(0);
        let other = flow.clone();
        other.set(7);
        assert_eq!(flow.value(), 7);
    }
}
