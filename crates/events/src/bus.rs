//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` in the application state.
//! Handlers publish an [`InventoryEvent`] after each successful write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockroom_core::types::DbId;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Event names
// ---------------------------------------------------------------------------

pub const ITEM_CREATED: &str = "item.created";
pub const ITEM_DELETED: &str = "item.deleted";
pub const STOCK_CREATED: &str = "stock.created";
pub const STOCK_UPDATED: &str = "stock.updated";
pub const STOCK_DELETED: &str = "stock.deleted";
pub const STOCK_DEPLOYED: &str = "stock.deployed";
pub const USER_REGISTERED: &str = "user.registered";

// ---------------------------------------------------------------------------
// InventoryEvent
// ---------------------------------------------------------------------------

/// A domain event raised by a write to the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEvent {
    /// Dot-separated event name, e.g. `"stock.deployed"`.
    pub event_type: String,

    /// Entity kind the event is about (`"item"`, `"stock"`, `"user"`).
    pub entity_type: Option<String>,

    pub entity_id: Option<DbId>,

    /// Signed-in user that triggered the write, if any.
    pub actor_user_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    pub timestamp: DateTime<Utc>,
}

impl InventoryEvent {
    /// Create a new event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            entity_type: None,
            entity_id: None,
            actor_user_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the entity the event refers to.
    pub fn with_entity(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id);
        self
    }

    /// Attach the acting user, when the request carried one.
    pub fn with_actor(mut self, user_id: Option<DbId>) -> Self {
        self.actor_user_id = user_id;
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
pub const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use stockroom_events::bus::{EventBus, InventoryEvent};
///
/// let bus = EventBus::default();
/// let _rx = bus.subscribe();
///
/// bus.publish(InventoryEvent::new("item.created").with_entity("item", 1));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<InventoryEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest messages are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no active subscribers the event is dropped.
    pub fn publish(&self, event: InventoryEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InventoryEvent> {
        self.sender.subscribe()
    }

    /// Number of live receivers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
