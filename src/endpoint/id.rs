use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global endpoint sequence (monotonic, process-local).
static ENDPOINT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of an endpoint pair.
///
/// The notifier keys its subscriber set by this id, so every clone of an
/// [`Endpoint`](super::Endpoint) counts as the same subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId(u64);

impl EndpointId {
    pub(crate) fn next() -> Self {
        Self(ENDPOINT_SEQ.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw sequence number.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "endpoint#{}", self.0)
    }
}
