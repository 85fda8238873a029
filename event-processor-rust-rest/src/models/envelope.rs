use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of a push delivery from the publish/subscribe system.
///
/// Unknown fields at either level are rejected rather than ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PushEnvelope {
    #[validate(nested)]
    pub message: PubSubMessage,
    pub subscription: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PubSubMessage {
    /// Base64-encoded JSON event.
    pub data: String,
    #[validate(length(min = 1, message = "messageId must not be empty"))]
    pub message_id: String,
    #[validate(length(min = 1, message = "publishTime must not be empty"))]
    pub publish_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
}
