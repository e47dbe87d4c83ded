//! Shutterdesk change bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`. It plugs into the store as a
//!   [`StoreListener`](shutterdesk_store::StoreListener), so every applied
//!   mutation becomes a [`ChangeEvent`].
//! - [`ChangeLog`]: background subscriber that writes each change to the
//!   structured log.

pub mod bus;
pub mod changelog;

pub use bus::{ChangeEvent, EventBus};
pub use changelog::ChangeLog;
