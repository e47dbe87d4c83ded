use std::sync::Arc;

use shutterdesk_events::EventBus;
use shutterdesk_store::{Store, StoreListener};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory record store.
    pub store: Store,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Change bus; every store mutation is published here.
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    /// Build a fresh, empty store wired to a new event bus.
    pub fn new(config: ServerConfig) -> Self {
        let event_bus = Arc::new(EventBus::default());
        let listener: Arc<dyn StoreListener> = event_bus.clone();
        Self {
            store: Store::with_listeners(vec![listener]),
            config: Arc::new(config),
            event_bus,
        }
    }
}
