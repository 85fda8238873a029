use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::Value;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::DecodedEvent;

/// Decodes the base64 `data` field of a push message into an event.
///
/// The payload must be base64 of UTF-8 JSON whose top level is an object.
/// Any other shape is a client error and the delivery system will not retry it.
pub fn decode_message(data: &str) -> Result<DecodedEvent, AppError> {
    decode_object(data).map_err(|cause| {
        tracing::error!("{} Failed to decode message: {}", API_NAME, cause);
        AppError::InvalidMessageFormat
    })
}

fn decode_object(data: &str) -> anyhow::Result<DecodedEvent> {
    let bytes = STANDARD.decode(data.trim())?;
    let text = String::from_utf8(bytes)?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(object) => Ok(DecodedEvent::from_object(object)),
        other => anyhow::bail!("expected a JSON object, got {}", kind_of(&other)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
