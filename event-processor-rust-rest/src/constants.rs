/// Prefix for every log line emitted by the processor.
pub const API_NAME: &str = "[event-processor]";

pub const SERVICE_VERSION: &str = "1.0.0";

/// Acknowledged-result message for event types without a registered handler.
pub const NO_HANDLER_MESSAGE: &str = "Event acknowledged but no handler defined";

pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process event";
