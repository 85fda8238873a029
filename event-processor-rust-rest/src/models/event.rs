use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::NO_HANDLER_MESSAGE;

/// Application event recovered from a push message payload.
///
/// The schema is open: `event` and `data` are kept as raw JSON values and a
/// missing key is represented as `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEvent {
    pub event: Value,
    pub data: Value,
    pub timestamp: Option<String>,
}

impl DecodedEvent {
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let timestamp = object
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Self {
            event: object.remove("event").unwrap_or(Value::Null),
            data: object.remove("data").unwrap_or(Value::Null),
            timestamp,
        }
    }

    /// The type tag, when the payload carries one as a string.
    pub fn event_type(&self) -> Option<&str> {
        self.event.as_str()
    }

    /// Tag for log lines: the raw string when it is one, otherwise the JSON text.
    pub fn event_label(&self) -> String {
        match &self.event {
            Value::String(tag) => tag.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerStatus {
    Processed,
    Acknowledged,
}

/// Outcome of handling one event, serialised flat as
/// `{status, eventType, ...fields}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResult {
    pub status: HandlerStatus,
    pub event_type: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HandlerResult {
    pub fn processed(event_type: &str) -> Self {
        Self {
            status: HandlerStatus::Processed,
            event_type: Value::String(event_type.to_string()),
            fields: Map::new(),
        }
    }

    /// Result for an event type nobody handles. The original tag is echoed
    /// back as-is, including null when it was missing.
    pub fn acknowledged(event_type: Value) -> Self {
        Self {
            status: HandlerStatus::Acknowledged,
            event_type,
            fields: Map::new(),
        }
        .with_field("message", NO_HANDLER_MESSAGE)
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
