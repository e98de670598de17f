//! Notifier: registration, broadcast and unregistration.
//!
//! ## Contents
//! - [`Notifier`] the subscriber set and its non-blocking `notify()`
//! - [`Subscription`] registration guard that unregisters on drop
//! - [`Delivery`] per-pass tally returned by `notify()`
//!
//! ## Locking
//! One mutex guards the subscriber set for every operation. Lock order is always
//! notifier set → endpoint slot; listeners only take their own slot lock, so
//! receivers can never hold up a broadcast beyond one slot critical section.

mod delivery;
mod set;
mod subscription;

pub use delivery::Delivery;
pub use set::Notifier;
pub use subscription::Subscription;
