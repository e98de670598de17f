//! # Notifier configuration.
//!
//! Provides [`Config`] settings for a [`Notifier`](crate::Notifier).
//!
//! ## Sentinel values
//! - `default_capacity = 0` → endpoints created by the notifier are rendezvous
//!   endpoints (a signal lands only while the listener is waiting).

use std::borrow::Cow;

/// Configuration for a notifier instance.
///
/// ## Field semantics
/// - `name`: label attached to every log record of this notifier
/// - `default_capacity`: capacity of endpoints built by `Notifier::channel()` /
///   `Notifier::subscribe()`
#[derive(Clone, Debug)]
pub struct Config {
    /// Label used in log records.
    pub name: Cow<'static, str>,

    /// Capacity of endpoints created through the notifier.
    ///
    /// - `0` = rendezvous
    /// - `n > 0` = at most `n` signals buffered per endpoint
    pub default_capacity: usize,
}

impl Config {
    /// Sets the log label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the default endpoint capacity.
    #[must_use]
    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `name = "notifier"`
    /// - `default_capacity = 1` (one outstanding wake-up per subscriber)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("notifier"),
            default_capacity: 1,
        }
    }
}
