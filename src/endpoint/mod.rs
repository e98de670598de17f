//! # Dataless endpoints: the subscriber side of the notifier.
//!
//! [`channel`] creates a connected pair:
//! - [`Endpoint`] the send-side handle the subscriber registers with a
//!   [`Notifier`](crate::Notifier). Only the notifier can signal or close it.
//! - [`Listener`] the receive-side handle the subscriber keeps.
//!
//! ## Capacity
//! The capacity is the subscriber's choice and decides what it will observe:
//! - `capacity = n > 0` up to `n` signals are buffered; further ones are dropped.
//! - `capacity = 0` rendezvous; a signal is accepted only while the listener is
//!   parked in [`Listener::recv`] (or [`Listener::blocking_recv`]).
//!
//! ## Example
//! ```rust
//! use wakecast::{endpoint, Notifier};
//!
//! let notifier = Notifier::new();
//! let (endpoint, mut listener) = endpoint::channel(1);
//!
//! notifier.register(&endpoint);
//! notifier.notify();
//! assert!(listener.try_recv().is_ok());
//!
//! notifier.unregister(&endpoint);
//! assert!(listener.try_recv().is_err());
//! ```

mod id;
mod listener;
mod sink;
mod slot;

use std::sync::Arc;

pub use id::EndpointId;
pub use listener::Listener;
pub use sink::Endpoint;

pub(crate) use slot::Offer;

use slot::Slot;

/// Creates a connected `(Endpoint, Listener)` pair with the given capacity.
#[must_use]
pub fn channel(capacity: usize) -> (Endpoint, Listener) {
    let id = EndpointId::next();
    let slot = Arc::new(Slot::new(capacity));
    (
        Endpoint::new(id, Arc::clone(&slot)),
        Listener::new(id, slot),
    )
}
