//! Port reservation helper.
//!
//! Stateless and independent of the notifier. Useful to pick a port before
//! announcing it and starting a listener elsewhere.
//!
//! **Racy by construction**: the port is released before it is returned, so another
//! process may claim it before the caller binds it.
//!
//! Enable with the `net` feature (on by default).

mod port;

pub use port::{random_port, random_port_on};
