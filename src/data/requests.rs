use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::config::DF;
use crate::data::ApiError;

/// Lifecycle of one keyed operation. Keys that were never requested read as
/// Idle; entries live until the owning tracker drops.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> AsyncState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Spawns request futures. Native: owns the tokio runtime the producers run
/// on. wasm32: the browser's event loop does the scheduling.
pub struct Dispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl Dispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
        Self { runtime }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(&self, task: impl Future<Output = ()> + Send + 'static) {
        self.runtime.spawn(task);
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps an arbitrary key to an independent AsyncState, so N requests can be
/// in flight at once without touching each other. Results come back to the
/// UI thread over a channel and are applied only inside `poll`, which keeps
/// every state mutation on the frame loop.
pub struct RequestTracker<K, T> {
    states: HashMap<K, AsyncState<T>>,
    settled_tx: Sender<(K, Result<T, String>)>,
    settled_rx: Receiver<(K, Result<T, String>)>,
    // Handed out for keys that were never requested.
    idle: AsyncState<T>,
}

impl<K, T> RequestTracker<K, T>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        let (settled_tx, settled_rx) = channel();
        Self {
            states: HashMap::new(),
            settled_tx,
            settled_rx,
            idle: AsyncState::Idle,
        }
    }

    /// Marks `key` Loading (a full supersede, even when already Loading) and
    /// spawns `producer`. On settle the state becomes Ready(value) or
    /// Failed(message), where the message is the backend detail when usable
    /// and `fallback` otherwise; a failing producer never escapes as a fault.
    ///
    /// Nothing cancels a superseded producer: when `run` is called again for
    /// a key whose earlier producer is still in flight, whichever settles
    /// last wins, stale or not.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run<F>(&mut self, dispatcher: &Dispatcher, key: K, fallback: &'static str, producer: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
        K: Send + 'static,
        T: Send + 'static,
    {
        self.mark_loading(key.clone());
        let settled_tx = self.settled_tx.clone();
        dispatcher.spawn(async move {
            let outcome = producer.await.map_err(|err| err.user_message(fallback));
            // A dropped receiver just means the owning panel is gone.
            let _ = settled_tx.send((key, outcome));
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub fn run<F>(&mut self, dispatcher: &Dispatcher, key: K, fallback: &'static str, producer: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
        K: 'static,
        T: 'static,
    {
        self.mark_loading(key.clone());
        let settled_tx = self.settled_tx.clone();
        dispatcher.spawn(async move {
            let outcome = producer.await.map_err(|err| err.user_message(fallback));
            let _ = settled_tx.send((key, outcome));
        });
    }

    fn mark_loading(&mut self, key: K) {
        if DF.log_requests {
            log::info!("request [{:?}] -> loading", key);
        }
        self.states.insert(key, AsyncState::Loading);
    }

    /// Drains settled producers and applies their transitions, in settle
    /// order (NOT issuance order). Returns the settled keys in that order so
    /// callers can react last-settled-wins.
    pub fn poll(&mut self) -> Vec<K> {
        let mut settled = Vec::new();
        while let Ok((key, outcome)) = self.settled_rx.try_recv() {
            let next = match outcome {
                Ok(value) => AsyncState::Ready(value),
                Err(message) => AsyncState::Failed(message),
            };
            if DF.log_requests {
                let tag = if matches!(next, AsyncState::Ready(_)) {
                    "ready"
                } else {
                    "failed"
                };
                log::info!("request [{:?}] -> {}", key, tag);
            }
            self.states.insert(key.clone(), next);
            settled.push(key);
        }
        settled
    }

    pub fn state(&self, key: &K) -> &AsyncState<T> {
        self.states.get(key).unwrap_or(&self.idle)
    }

    pub fn any_loading(&self) -> bool {
        self.states.values().any(AsyncState::is_loading)
    }
}

impl<K, T> Default for RequestTracker<K, T>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeframe;
    use std::time::Duration;

    const FALLBACK: &str = "request failed, try again later";

    fn backend_error(detail: &str) -> ApiError {
        ApiError::Backend {
            status: 500,
            detail: detail.into(),
        }
    }

    /// Polls until `want` settlements arrive or a 2s budget runs out.
    fn drain_until<K, T>(tracker: &mut RequestTracker<K, T>, want: usize) -> Vec<K>
    where
        K: Eq + Hash + Clone + Debug,
    {
        let mut settled = Vec::new();
        for _ in 0..200 {
            settled.extend(tracker.poll());
            if settled.len() >= want {
                return settled;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("timed out waiting for {want} settlements, got {settled:?}");
    }

    #[test]
    fn keys_settle_independently_of_each_other() {
        let dispatcher = Dispatcher::new();
        let mut tracker: RequestTracker<Timeframe, u32> = RequestTracker::new();

        tracker.run(&dispatcher, Timeframe::H1, FALLBACK, async {
            tokio::time::sleep(Duration::from_millis(80)).await;
            Ok(1)
        });
        tracker.run(&dispatcher, Timeframe::D1, FALLBACK, async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Err(backend_error("no data for 1d"))
        });

        // Both keys go Loading immediately, before either settles.
        assert!(tracker.state(&Timeframe::H1).is_loading());
        assert!(tracker.state(&Timeframe::D1).is_loading());
        // A key never requested stays Idle.
        assert_eq!(*tracker.state(&Timeframe::W1), AsyncState::Idle);

        let settled = drain_until(&mut tracker, 2);

        // Settle order follows completion, not issuance.
        assert_eq!(settled, vec![Timeframe::D1, Timeframe::H1]);
        assert_eq!(*tracker.state(&Timeframe::H1), AsyncState::Ready(1));
        assert_eq!(
            tracker.state(&Timeframe::D1).error(),
            Some("no data for 1d")
        );
        // The failure never touched the other key.
        assert_eq!(tracker.state(&Timeframe::H1).value(), Some(&1));
        assert_eq!(*tracker.state(&Timeframe::W1), AsyncState::Idle);
    }

    #[test]
    fn repeated_success_converges_to_the_value() {
        let dispatcher = Dispatcher::new();
        let mut tracker: RequestTracker<String, &'static str> = RequestTracker::new();

        for _ in 0..3 {
            tracker.run(&dispatcher, "AAPL".to_string(), FALLBACK, async {
                Ok("ready")
            });
            // Re-running is a full supersede: Loading again, even after Ready.
            assert!(tracker.state(&"AAPL".to_string()).is_loading());
            drain_until(&mut tracker, 1);
            assert_eq!(
                *tracker.state(&"AAPL".to_string()),
                AsyncState::Ready("ready")
            );
        }
    }

    #[test]
    fn missing_backend_message_yields_the_generic_fallback() {
        let dispatcher = Dispatcher::new();
        let mut tracker: RequestTracker<Timeframe, u32> = RequestTracker::new();

        tracker.run(&dispatcher, Timeframe::W1, FALLBACK, async {
            Err(backend_error(""))
        });
        drain_until(&mut tracker, 1);
        assert_eq!(tracker.state(&Timeframe::W1).error(), Some(FALLBACK));
    }

    #[test]
    fn any_loading_tracks_open_requests() {
        let dispatcher = Dispatcher::new();
        let mut tracker: RequestTracker<String, u32> = RequestTracker::new();
        assert!(!tracker.any_loading());

        tracker.run(&dispatcher, "slow".to_string(), FALLBACK, async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            Ok(7)
        });
        assert!(tracker.any_loading());

        drain_until(&mut tracker, 1);
        assert!(!tracker.any_loading());
    }
}
