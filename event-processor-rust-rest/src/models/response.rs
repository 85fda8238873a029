use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::HandlerResult;

/// Body returned with HTTP 200 once a message has been handled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub success: bool,
    pub message_id: String,
    pub result: HandlerResult,
    pub processing_time: String,
}

/// Body returned with HTTP 400 or 500 when a decoded envelope fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureResponse {
    pub success: bool,
    pub message_id: String,
    pub error: String,
    pub processing_time: String,
}

impl EventResponse {
    pub fn new(message_id: &str, result: HandlerResult, elapsed: Duration) -> Self {
        Self {
            success: true,
            message_id: message_id.to_string(),
            result,
            processing_time: format_duration(elapsed),
        }
    }
}

impl FailureResponse {
    pub fn new(message_id: &str, error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            success: false,
            message_id: message_id.to_string(),
            error: error.into(),
            processing_time: format_duration(elapsed),
        }
    }
}

/// Renders elapsed time as whole milliseconds, e.g. `"12ms"`.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_whole_milliseconds() {
        assert_eq!(format_duration(Duration::from_micros(12_900)), "12ms");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn failure_response_uses_camel_case() {
        let body = FailureResponse::new("m1", "Failed to process event", Duration::from_millis(3));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["messageId"], "m1");
        assert_eq!(json["processingTime"], "3ms");
    }
}
