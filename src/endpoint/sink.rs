use std::sync::Arc;

use super::slot::{Offer, Slot};
use super::EndpointId;

/// Send-side handle of an endpoint pair.
///
/// Cheap to clone; all clones share one identity and one slot. Public API only
/// inspects the endpoint: signalling and closing are reserved for the
/// [`Notifier`](crate::Notifier), which makes it the only sender and the sole closer.
#[derive(Clone, Debug)]
pub struct Endpoint {
    id: EndpointId,
    slot: Arc<Slot>,
}

impl Endpoint {
    pub(super) fn new(id: EndpointId, slot: Arc<Slot>) -> Self {
        Self { id, slot }
    }

    /// Identity shared with the paired [`Listener`](super::Listener).
    #[must_use]
    pub fn id(&self) -> EndpointId {
        self.id
    }

    /// Number of signals the endpoint buffers (`0` = rendezvous).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slot.capacity()
    }

    /// True once the endpoint has been unregistered.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.slot.is_closed()
    }

    pub(crate) fn offer(&self) -> Offer {
        self.slot.offer()
    }

    pub(crate) fn close(&self) -> bool {
        self.slot.close()
    }
}
