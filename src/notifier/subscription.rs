//! # Scoped registration.
//!
//! [`Subscription`] pairs a [`Listener`] with its registration in a [`Notifier`].
//! Dropping it unregisters the endpoint, so a subscriber cannot forget to.
//!
//! ```rust
//! use wakecast::Notifier;
//!
//! let notifier = Notifier::new();
//! {
//!     let mut sub = notifier.subscribe();
//!     notifier.notify();
//!     assert!(sub.try_recv().is_ok());
//! }
//! assert!(notifier.is_empty());
//! ```

use std::ops::{Deref, DerefMut};

use super::Notifier;
use crate::endpoint::{Endpoint, Listener};

/// A registered endpoint pair that unregisters itself on drop.
///
/// Derefs to the [`Listener`].
#[derive(Debug)]
pub struct Subscription {
    notifier: Notifier,
    endpoint: Endpoint,
    listener: Listener,
}

impl Subscription {
    pub(super) fn new(notifier: Notifier, endpoint: Endpoint, listener: Listener) -> Self {
        Self {
            notifier,
            endpoint,
            listener,
        }
    }

    /// The registered endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Unregisters now. Buffered signals stay receivable; afterwards the listener
    /// reports closure. Returns `false` if already unregistered.
    pub fn unsubscribe(&self) -> bool {
        self.notifier.unregister(&self.endpoint)
    }
}

impl Deref for Subscription {
    type Target = Listener;

    fn deref(&self) -> &Listener {
        &self.listener
    }
}

impl DerefMut for Subscription {
    fn deref_mut(&mut self) -> &mut Listener {
        &mut self.listener
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.notifier.unregister(&self.endpoint);
    }
}
