use std::sync::Arc;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{HandlerResult, PushEnvelope};

use super::decoder::decode_message;
use super::router::EventRouter;

/// Runs one push message through decode and dispatch.
///
/// Holds no per-request state; clones share the handler registry.
#[derive(Clone, Debug)]
pub struct EventProcessingService {
    router: Arc<EventRouter>,
}

impl EventProcessingService {
    pub fn new(router: EventRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    pub fn process_message(&self, envelope: &PushEnvelope) -> Result<HandlerResult, AppError> {
        let message = &envelope.message;
        let event = decode_message(&message.data)?;

        tracing::info!(
            message_id = %message.message_id,
            publish_time = %message.publish_time,
            subscription = %envelope.subscription,
            event_type = %event.event_label(),
            event_data = %event.data,
            "{} Processing event",
            API_NAME
        );

        self.router.dispatch(&event).map_err(AppError::Processing)
    }
}

impl Default for EventProcessingService {
    fn default() -> Self {
        Self::new(EventRouter::with_default_handlers())
    }
}
