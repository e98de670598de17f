//! # Shared state of one endpoint.
//!
//! A [`Slot`] is shared between the send side ([`Endpoint`](super::Endpoint)) and the
//! receive side ([`Listener`](super::Listener)). Signals carry no data, so the "queue"
//! is a counter of accepted, not yet received signals.
//!
//! ## Rules
//! - A signal is accepted only while `pending < capacity + waiting`.
//! - `capacity = 0` is a rendezvous: a signal is accepted only for a parked receiver.
//! - `closed` flips exactly once; pending signals stay receivable after closing.
//!
//! ```text
//! offer() ──► [pending / capacity + waiting] ──► notify_one ──► Listener::recv()
//! close() ──► closed = true ───────────────────► notify_one ──► recv() -> None
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::futures::Notified;
use tokio::sync::Notify;

/// Outcome of a single non-blocking delivery attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Offer {
    /// The signal was accepted (buffered or handed to a parked receiver).
    Accepted,
    /// No buffer room and no parked receiver; the signal was dropped.
    Full,
    /// The endpoint is closed; the signal was dropped.
    Closed,
}

/// Outcome of a single receive attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Take {
    Signal,
    Empty,
    Closed,
}

#[derive(Debug)]
struct State {
    pending: usize,
    waiting: usize,
    closed: bool,
}

impl State {
    fn take(&mut self) -> Take {
        if self.pending > 0 {
            self.pending -= 1;
            Take::Signal
        } else if self.closed {
            Take::Closed
        } else {
            Take::Empty
        }
    }
}

/// Mutex-guarded signal counter plus a wakeup for the receiver.
#[derive(Debug)]
pub(crate) struct Slot {
    capacity: usize,
    state: Mutex<State>,
    wakeup: Notify,
}

impl Slot {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(State {
                pending: 0,
                waiting: 0,
                closed: false,
            }),
            wakeup: Notify::new(),
        }
    }

    // Every critical section leaves `State` consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Tries to hand one signal over without ever waiting.
    pub(crate) fn offer(&self) -> Offer {
        let mut st = self.lock();
        if st.closed {
            return Offer::Closed;
        }
        if st.pending >= self.capacity.saturating_add(st.waiting) {
            return Offer::Full;
        }
        st.pending += 1;
        drop(st);

        self.wakeup.notify_one();
        Offer::Accepted
    }

    /// Marks the slot closed. Returns `false` if it already was.
    pub(crate) fn close(&self) -> bool {
        let mut st = self.lock();
        if st.closed {
            return false;
        }
        st.closed = true;
        drop(st);

        self.wakeup.notify_one();
        true
    }

    pub(crate) fn take(&self) -> Take {
        self.lock().take()
    }

    /// Registers a receiver as waiting until the returned guard takes a result or drops.
    pub(crate) fn park(&self) -> Parked<'_> {
        self.lock().waiting += 1;
        Parked {
            slot: self,
            active: true,
        }
    }

    /// Future resolved by the next `offer`/`close` (or a permit stored by an earlier one).
    pub(crate) fn notified(&self) -> Notified<'_> {
        self.wakeup.notified()
    }
}

/// A receiver counted in `waiting`.
///
/// Taking a signal and leaving the waiting set happen under one lock, so a rendezvous
/// slot never accepts a signal on behalf of a receiver that already returned.
pub(crate) struct Parked<'a> {
    slot: &'a Slot,
    active: bool,
}

impl Parked<'_> {
    pub(crate) fn take(&mut self) -> Take {
        let mut st = self.slot.lock();
        let taken = st.take();
        if taken != Take::Empty && self.active {
            st.waiting -= 1;
            self.active = false;
        }
        taken
    }
}

impl Drop for Parked<'_> {
    fn drop(&mut self) {
        if self.active {
            let mut st = self.slot.lock();
            st.waiting = st.waiting.saturating_sub(1);
        }
    }
}
