//! # Notifier: non-blocking fan-out of a dataless signal.
//!
//! [`Notifier`] keeps the set of registered endpoints and, on each
//! [`notify`](Notifier::notify), makes exactly one non-blocking delivery attempt per
//! endpoint.
//!
//! ## What it guarantees
//! - `notify()` never waits for a subscriber.
//! - At most one attempt per registered endpoint per `notify()`.
//! - No attempt ever targets an unregistered endpoint.
//! - Closure is signalled exactly once, by `unregister`.
//!
//! ## What it does **not** guarantee
//! - No delivery to a subscriber that cannot accept right now (full buffer, or a
//!   rendezvous endpoint with nobody waiting). The signal is dropped for it, silently.
//! - No ordering across endpoints, nor between a `notify()` and a concurrent
//!   `register`/`unregister` (whoever takes the lock first wins).
//!
//! ## Diagram
//! ```text
//!    notify()
//!        │  (one lock for the whole pass)
//!        ├────► endpoint 1 ── offer ──► accepted ──► Listener 1
//!        ├────► endpoint 2 ── offer ──► full ──────► skipped
//!        └────► endpoint N ── offer ──► accepted ──► Listener N
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use super::{Delivery, Subscription};
use crate::config::Config;
use crate::endpoint::{self, Endpoint, EndpointId, Listener, Offer};

struct Inner {
    config: Config,
    subscribers: Mutex<HashMap<EndpointId, Endpoint>>,
}

/// Registry of endpoints plus a broadcast of the "something happened" signal.
///
/// Cheap to clone (Arc-backed): construct once and hand clones to the publisher and
/// to every subscriber.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    /// Creates an empty notifier with [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty notifier with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                subscribers: Mutex::new(HashMap::new()),
            }),
        }
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<EndpointId, Endpoint>> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `endpoint` to the delivery targets.
    ///
    /// Idempotent: registering an endpoint twice keeps a single entry. A closed
    /// endpoint is ignored. Returns `true` if the endpoint was newly added.
    pub fn register(&self, endpoint: &Endpoint) -> bool {
        let mut subs = self.lock();
        if endpoint.is_closed() {
            debug!(notifier = %self.name(), endpoint = %endpoint.id(), "ignoring closed endpoint");
            return false;
        }
        match subs.entry(endpoint.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(endpoint.clone());
                debug!(
                    notifier = %self.name(),
                    endpoint = %endpoint.id(),
                    capacity = endpoint.capacity(),
                    subscribers = subs.len(),
                    "endpoint registered"
                );
                true
            }
        }
    }

    /// Removes `endpoint` and closes it.
    ///
    /// Unknown or already removed endpoints are a no-op and are not closed again.
    /// Returns `true` if the endpoint was registered.
    pub fn unregister(&self, endpoint: &Endpoint) -> bool {
        let mut subs = self.lock();
        let Some(removed) = subs.remove(&endpoint.id()) else {
            return false;
        };
        removed.close();
        debug!(
            notifier = %self.name(),
            endpoint = %endpoint.id(),
            subscribers = subs.len(),
            "endpoint unregistered"
        );
        true
    }

    /// Makes one non-blocking delivery attempt to every registered endpoint.
    ///
    /// Endpoints that cannot accept the signal right now are skipped; nothing is
    /// queued or retried. Calling with no subscribers is a no-op.
    pub fn notify(&self) -> Delivery {
        let subs = self.lock();
        let mut delivery = Delivery::default();

        for endpoint in subs.values() {
            match endpoint.offer() {
                Offer::Accepted => delivery.delivered += 1,
                Offer::Full | Offer::Closed => {
                    delivery.skipped += 1;
                    trace!(notifier = %self.name(), endpoint = %endpoint.id(), "endpoint not ready, signal dropped");
                }
            }
        }
        drop(subs);

        trace!(
            notifier = %self.name(),
            delivered = delivery.delivered,
            skipped = delivery.skipped,
            "notify pass done"
        );
        delivery
    }

    /// True if `endpoint` is currently registered.
    #[must_use]
    pub fn contains(&self, endpoint: &Endpoint) -> bool {
        self.lock().contains_key(&endpoint.id())
    }

    /// Number of registered endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no endpoint is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Log label of this notifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    /// Configuration this notifier was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Creates an unregistered endpoint pair with the configured default capacity.
    #[must_use]
    pub fn channel(&self) -> (Endpoint, Listener) {
        endpoint::channel(self.inner.config.default_capacity)
    }

    /// Creates an endpoint pair with the configured default capacity and registers it.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        self.subscribe_with_capacity(self.inner.config.default_capacity)
    }

    /// Creates an endpoint pair with `capacity` and registers it.
    #[must_use]
    pub fn subscribe_with_capacity(&self, capacity: usize) -> Subscription {
        let (endpoint, listener) = endpoint::channel(capacity);
        self.register(&endpoint);
        Subscription::new(self.clone(), endpoint, listener)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("name", &self.name())
            .field("subscribers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::time::{Duration, Instant};

    use tokio::time::timeout;

    use super::*;
    use crate::endpoint::channel;
    use crate::error::TryRecvError;

    const WAIT: Duration = Duration::from_millis(200);

    #[test]
    fn test_notify_without_subscribers() {
        let notifier = Notifier::new();
        assert_eq!(notifier.notify(), Delivery::default());
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_single_delivery_per_endpoint() {
        let notifier = Notifier::new();
        let mut listeners = Vec::new();
        for _ in 0..8 {
            let (endpoint, listener) = channel(4);
            notifier.register(&endpoint);
            listeners.push(listener);
        }

        let delivery = notifier.notify();
        assert_eq!(delivery.delivered, 8);
        assert_eq!(delivery.attempted(), 8);

        for listener in &mut listeners {
            assert_eq!(listener.try_recv(), Ok(()));
            assert_eq!(listener.try_recv(), Err(TryRecvError::Empty));
        }
    }

    #[test]
    fn test_register_is_idempotent() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(2);

        assert!(notifier.register(&endpoint));
        assert!(!notifier.register(&endpoint));
        assert!(!notifier.register(&endpoint.clone()));
        assert_eq!(notifier.len(), 1);

        notifier.notify();
        assert_eq!(listener.try_recv(), Ok(()));
        assert_eq!(listener.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_full_endpoint_is_skipped() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(1);
        notifier.register(&endpoint);

        assert_eq!(notifier.notify().delivered, 1);
        // buffer still holds the first signal
        let second = notifier.notify();
        assert_eq!(second.delivered, 0);
        assert_eq!(second.skipped, 1);

        assert_eq!(listener.try_recv(), Ok(()));
        assert_eq!(listener.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_rendezvous_without_receiver_is_skipped() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(0);
        notifier.register(&endpoint);

        let start = Instant::now();
        let delivery = notifier.notify();
        assert!(start.elapsed() < WAIT);
        assert_eq!(delivery.skipped, 1);
        assert_eq!(listener.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_unregister_closes_once_and_excludes() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(1);
        notifier.register(&endpoint);

        assert!(notifier.unregister(&endpoint));
        assert!(endpoint.is_closed());
        assert!(!notifier.contains(&endpoint));

        assert_eq!(notifier.notify(), Delivery::default());
        assert_eq!(listener.try_recv(), Err(TryRecvError::Closed));

        // second unregister is silent
        assert!(!notifier.unregister(&endpoint));
        assert_eq!(listener.try_recv(), Err(TryRecvError::Closed));
    }

    #[test]
    fn test_unregister_unknown_does_not_close() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(1);

        assert!(!notifier.unregister(&endpoint));
        assert!(!endpoint.is_closed());
        assert_eq!(listener.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_closed_endpoint_cannot_be_registered_again() {
        let notifier = Notifier::new();
        let (endpoint, _listener) = channel(1);
        notifier.register(&endpoint);
        notifier.unregister(&endpoint);

        assert!(!notifier.register(&endpoint));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_endpoint_in_two_notifiers() {
        let first = Notifier::new();
        let second = Notifier::new();
        let (endpoint, mut listener) = channel(2);
        first.register(&endpoint);
        second.register(&endpoint);

        first.notify();
        second.notify();
        assert_eq!(listener.try_recv(), Ok(()));
        assert_eq!(listener.try_recv(), Ok(()));

        // closing through one notifier stops deliveries from the other
        first.unregister(&endpoint);
        assert_eq!(second.notify().skipped, 1);
    }

    #[test]
    fn test_channel_uses_default_capacity() {
        let notifier = Notifier::with_config(Config::default().with_default_capacity(3));
        let (endpoint, _listener) = notifier.channel();
        assert_eq!(endpoint.capacity(), 3);
        assert!(notifier.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_broadcast_scenario() {
        let notifier = Notifier::new();

        let (a, mut la) = channel(1);
        let (b, mut lb) = channel(1);
        notifier.register(&a);
        notifier.register(&b);

        notifier.notify();
        assert_eq!(timeout(WAIT, la.recv()).await.expect("a timed out"), Some(()));
        assert_eq!(timeout(WAIT, lb.recv()).await.expect("b timed out"), Some(()));

        let (c, mut lc) = channel(0);
        notifier.register(&c);
        let delivery = notifier.notify();
        assert_eq!(delivery.delivered, 2);
        assert_eq!(delivery.skipped, 1);

        assert_eq!(timeout(WAIT, la.recv()).await.expect("a timed out"), Some(()));
        assert_eq!(timeout(WAIT, lb.recv()).await.expect("b timed out"), Some(()));
        assert_eq!(lc.try_recv(), Err(TryRecvError::Empty));

        notifier.unregister(&b);
        notifier.notify();

        assert_eq!(timeout(WAIT, la.recv()).await.expect("a timed out"), Some(()));
        assert_eq!(timeout(WAIT, lb.recv()).await.expect("b hung"), None);

        notifier.unregister(&a);
        notifier.unregister(&c);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_rendezvous_with_waiting_receiver() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(0);
        notifier.register(&endpoint);

        let waiter = tokio::spawn(async move { listener.recv().await });

        let mut delivered = 0;
        for _ in 0..100 {
            delivered = notifier.notify().delivered;
            if delivered == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(delivered, 1);

        let got = timeout(WAIT, waiter).await.expect("timeout").expect("join");
        assert_eq!(got, Some(()));
        notifier.unregister(&endpoint);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unbounded_endpoint_with_waiting_receiver() {
        let notifier = Notifier::new();
        let (endpoint, mut listener) = channel(usize::MAX);
        notifier.register(&endpoint);

        let waiter = tokio::spawn(async move { listener.recv().await });
        tokio::time::sleep(Duration::from_millis(20)).await;

        let delivery = notifier.notify();
        assert_eq!(delivery.delivered, 1);
        assert_eq!(delivery.skipped, 0);

        let got = timeout(WAIT, waiter).await.expect("timeout").expect("join");
        assert_eq!(got, Some(()));
        notifier.unregister(&endpoint);
    }

    #[test]
    fn test_concurrent_register_notify_unregister() {
        const THREADS: usize = 8;
        const ROUNDS: usize = 200;

        let notifier = Notifier::new();
        let barrier = Barrier::new(THREADS + 1);

        std::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    barrier.wait();
                    for _ in 0..ROUNDS {
                        let (endpoint, mut listener) = channel(1);
                        notifier.register(&endpoint);
                        notifier.notify();
                        notifier.unregister(&endpoint);

                        // at most the one buffered signal, then closure
                        let mut signals = 0;
                        loop {
                            match listener.try_recv() {
                                Ok(()) => signals += 1,
                                Err(TryRecvError::Closed) => break,
                                Err(TryRecvError::Empty) => panic!("closed endpoint reported empty"),
                            }
                        }
                        assert!(signals <= 1);
                    }
                });
            }

            s.spawn(|| {
                barrier.wait();
                for _ in 0..ROUNDS * 4 {
                    notifier.notify();
                }
            });
        });

        assert!(notifier.is_empty());
    }
}
