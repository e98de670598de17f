//! # Receive side of an endpoint pair.
//!
//! [`Listener`] observes the signals accepted by its [`Endpoint`](super::Endpoint)
//! and, once the endpoint is unregistered, the closure.
//!
//! ## Rules
//! - Signals accepted before closure are still received after it.
//! - After closure and drain every receive returns immediately (`None` / `Closed`).
//! - While parked in `recv`/`blocking_recv` the listener counts as "waiting", which is
//!   what lets a zero-capacity endpoint accept a signal.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::slot::{Slot, Take};
use super::EndpointId;
use crate::error::TryRecvError;

/// Receive-side handle of an endpoint pair. Owned by a single subscriber.
#[derive(Debug)]
pub struct Listener {
    id: EndpointId,
    slot: Arc<Slot>,
}

impl Listener {
    pub(super) fn new(id: EndpointId, slot: Arc<Slot>) -> Self {
        Self { id, slot }
    }

    /// Identity shared with the paired endpoint.
    #[must_use]
    pub fn id(&self) -> EndpointId {
        self.id
    }

    /// True once the endpoint has been unregistered (signals may still be buffered).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.slot.is_closed()
    }

    /// Waits for the next signal.
    ///
    /// Returns `Some(())` for a signal and `None` once the endpoint is closed and
    /// drained. Cancel-safe: dropping the future stops counting this listener as
    /// waiting; a signal already handed over stays buffered for the next receive.
    pub async fn recv(&mut self) -> Option<()> {
        let mut parked = self.slot.park();
        loop {
            match parked.take() {
                Take::Signal => return Some(()),
                Take::Closed => return None,
                Take::Empty => self.slot.notified().await,
            }
        }
    }

    /// Takes a signal if one is already available.
    ///
    /// # Errors
    /// - [`TryRecvError::Empty`] nothing buffered right now.
    /// - [`TryRecvError::Closed`] the endpoint is closed and drained.
    pub fn try_recv(&mut self) -> Result<(), TryRecvError> {
        match self.slot.take() {
            Take::Signal => Ok(()),
            Take::Empty => Err(TryRecvError::Empty),
            Take::Closed => Err(TryRecvError::Closed),
        }
    }

    /// Blocking variant of [`recv`](Self::recv) for plain threads.
    ///
    /// Must not be called from within an async runtime worker.
    pub fn blocking_recv(&mut self) -> Option<()> {
        futures::executor::block_on(self.recv())
    }

    /// Like [`recv`](Self::recv), but also returns `None` when `token` is cancelled.
    pub async fn recv_or_cancel(&mut self, token: &CancellationToken) -> Option<()> {
        tokio::select! {
            biased;
            _ = token.cancelled() => None,
            sig = self.recv() => sig,
        }
    }
}
