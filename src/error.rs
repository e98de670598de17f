//! Error types used by wakecast.
//!
//! Broadcasting never fails: a missed delivery is a normal outcome, not an error.
//! The only reportable conditions are:
//!
//! - [`TryRecvError`] — a non-blocking receive found nothing to take.
//! - [`PortError`] — the port reservation helper could not reserve a port.
//!
//! Both types provide `as_label` for logs/metrics.

use std::io;

use thiserror::Error;

/// # Errors returned by [`Listener::try_recv`](crate::Listener::try_recv).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// No signal is buffered right now.
    #[error("no signal available")]
    Empty,

    /// The endpoint was unregistered and every buffered signal has been received.
    #[error("endpoint closed")]
    Closed,
}

impl TryRecvError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use wakecast::TryRecvError;
    ///
    /// assert_eq!(TryRecvError::Closed.as_label(), "recv_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TryRecvError::Empty => "recv_empty",
            TryRecvError::Closed => "recv_closed",
        }
    }
}

/// # Errors produced while reserving an ephemeral port.
///
/// Surfaced as-is; the caller decides whether to try again.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PortError {
    /// Binding to port 0 failed.
    #[error("failed to bind an ephemeral port: {0}")]
    Bind(#[source] io::Error),

    /// The bound socket could not report its local address.
    #[error("failed to read the bound address: {0}")]
    LocalAddr(#[source] io::Error),
}

impl PortError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            PortError::Bind(_) => "port_bind",
            PortError::LocalAddr(_) => "port_local_addr",
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            PortError::Bind(e) | PortError::LocalAddr(e) => e.kind(),
        }
    }
}
