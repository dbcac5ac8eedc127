//! Stockroom in-process event bus.
//!
//! - [`EventBus`]: publish/subscribe hub backed by `tokio::sync::broadcast`.
//! - [`InventoryEvent`]: the domain event envelope.
//! - [`EventLogger`]: background subscriber that writes every event to the
//!   tracing log.

pub mod bus;
pub mod logger;

pub use bus::{EventBus, InventoryEvent};
pub use logger::EventLogger;
