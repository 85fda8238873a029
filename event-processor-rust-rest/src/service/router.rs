use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::constants::API_NAME;
use crate::models::{DecodedEvent, HandlerResult};

use super::event_handlers::{
    OrderPlacedHandler, TestEventHandler, UserCreatedHandler, ORDER_PLACED, TEST_EVENT,
    USER_CREATED,
};

/// Handles the `data` of one event type.
///
/// Handlers must be safe to run again for the same message: a 500 response
/// makes the delivery system redeliver the whole envelope.
pub trait EventHandler: Send + Sync {
    fn handle(&self, data: &Value) -> anyhow::Result<HandlerResult>;
}

/// Registry from event type tag to handler.
///
/// Lookup is an exact string match. Tags without a handler, including a
/// missing or non-string tag, are acknowledged without processing.
#[derive(Clone, Default)]
pub struct EventRouter {
    handlers: HashMap<String, Arc<dyn EventHandler>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_handlers() -> Self {
        Self::new()
            .register(USER_CREATED, UserCreatedHandler)
            .register(ORDER_PLACED, OrderPlacedHandler)
            .register(TEST_EVENT, TestEventHandler)
    }

    /// Registers `handler` for `event_type`, replacing any earlier one.
    pub fn register<H>(self, event_type: &str, handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        self.register_shared(event_type, Arc::new(handler))
    }

    pub fn register_shared(mut self, event_type: &str, handler: Arc<dyn EventHandler>) -> Self {
        self.handlers.insert(event_type.to_string(), handler);
        self
    }

    pub fn handler_for(&self, event_type: &str) -> Option<&Arc<dyn EventHandler>> {
        self.handlers.get(event_type)
    }

    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn dispatch(&self, event: &DecodedEvent) -> anyhow::Result<HandlerResult> {
        tracing::info!("{} Handling event type: {}", API_NAME, event.event_label());

        match event.event_type().and_then(|tag| self.handler_for(tag)) {
            Some(handler) => handler.handle(&event.data),
            None => {
                tracing::warn!("{} Unknown event type: {}", API_NAME, event.event_label());
                Ok(HandlerResult::acknowledged(event.event.clone()))
            }
        }
    }
}

impl fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.event_types().collect();
        types.sort_unstable();
        f.debug_struct("EventRouter").field("handlers", &types).finish()
    }
}
