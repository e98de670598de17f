//! # wakecast
//!
//! **wakecast** is a minimal in-process notifier: a publisher broadcasts a
//! zero-payload "something happened" signal to a dynamic set of subscribers without
//! ever blocking on a slow or inattentive one.
//!
//! ## Architecture
//! ```text
//!   subscriber                         publisher
//!   ──────────                         ─────────
//!   channel(cap) ─► (Endpoint, Listener)
//!        │
//!        └─ register(&Endpoint) ─┐
//!                                ▼
//!                  ┌───────────────────────────┐
//!                  │ Notifier                  │
//!                  │  Mutex<{EndpointId →      │◄──── notify()
//!                  │         Endpoint}>        │
//!                  └─────┬──────────┬──────────┘
//!                        │ offer    │ offer       (non-blocking, one per endpoint)
//!                        ▼          ▼
//!                   [slot cap=1] [slot cap=0]
//!                        │          │ accepted only if a receiver is parked
//!                        ▼          ▼
//!                  Listener::recv() / try_recv() / blocking_recv()
//!
//!   unregister(&Endpoint) ─► removed + closed ─► recv() == None
//! ```
//!
//! ## Semantics
//! - `notify()` makes one attempt per registered endpoint and never waits. An
//!   endpoint that cannot accept right now simply misses that signal.
//! - Registering the same endpoint twice is a no-op; unregistering an unknown one too.
//! - Unregistering closes the endpoint exactly once; the listener then drains what was
//!   buffered and reports closure instead of hanging.
//!
//! ## Features
//! | Area              | Description                                         | Key types                              |
//! |-------------------|-----------------------------------------------------|----------------------------------------|
//! | **Broadcast**     | Register/notify/unregister over a locked set.       | [`Notifier`], [`Delivery`]             |
//! | **Endpoints**     | Dataless endpoints with subscriber-chosen capacity. | [`Endpoint`], [`Listener`]             |
//! | **Scoping**       | Registration that ends on drop.                     | [`Subscription`]                       |
//! | **Configuration** | Log label and default capacity.                     | [`Config`]                             |
//! | **Errors**        | Typed receive and port errors.                      | [`TryRecvError`], [`PortError`]        |
//!
//! ## Optional features
//! - `net` (default): [`net::random_port`], reserve a currently unused local port.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use wakecast::{endpoint, Notifier};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let notifier = Notifier::new();
//!
//!     let (endpoint, mut listener) = endpoint::channel(1);
//!     notifier.register(&endpoint);
//!
//!     notifier.notify();
//!     let got = tokio::time::timeout(Duration::from_secs(1), listener.recv())
//!         .await
//!         .expect("timeout");
//!     assert_eq!(got, Some(()));
//!
//!     notifier.unregister(&endpoint);
//!     assert_eq!(listener.recv().await, None);
//! }
//! ```

mod config;
pub mod endpoint;
mod error;
mod notifier;

#[cfg(feature = "net")]
pub mod net;

// ---- Public re-exports ----

pub use config::Config;
pub use endpoint::{Endpoint, EndpointId, Listener};
pub use error::{PortError, TryRecvError};
pub use notifier::{Delivery, Notifier, Subscription};
