use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use validator::Validate;

use crate::app::AppState;
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{EventResponse, FailureResponse, PushEnvelope};
use crate::service::EventProcessingService;

pub fn router() -> Router<AppState> {
    Router::new().route("/events", post(process_push_message))
}

/// Push endpoint for the publish/subscribe system.
///
/// 200 acknowledges the message, 400 drops it, 500 asks for redelivery.
/// The body is parsed here rather than by an extractor so `processingTime`
/// covers envelope parsing too.
async fn process_push_message(
    State(service): State<EventProcessingService>,
    body: Bytes,
) -> Result<Response, AppError> {
    let started = Instant::now();
    let envelope: PushEnvelope = serde_json::from_slice(&body)?;
    envelope.validate()?;

    let message_id = envelope.message.message_id.clone();
    let span = tracing::info_span!("push_message", message_id = %message_id);

    Ok(span.in_scope(|| {
        tracing::info!(
            "{} Received Pub/Sub message: {} published at {}",
            API_NAME,
            message_id,
            envelope.message.publish_time
        );

        match service.process_message(&envelope) {
            Ok(result) => {
                let elapsed = started.elapsed();
                tracing::info!(
                    "{} Successfully processed message {} in {}ms",
                    API_NAME,
                    message_id,
                    elapsed.as_millis()
                );
                (
                    StatusCode::OK,
                    Json(EventResponse::new(&message_id, result, elapsed)),
                )
                    .into_response()
            }
            Err(err) => {
                let elapsed = started.elapsed();
                tracing::error!(
                    error = ?err,
                    "{} Failed to process message {} after {}ms",
                    API_NAME,
                    message_id,
                    elapsed.as_millis()
                );
                (
                    err.status_code(),
                    Json(FailureResponse::new(&message_id, err.public_message(), elapsed)),
                )
                    .into_response()
            }
        }
    }))
}
