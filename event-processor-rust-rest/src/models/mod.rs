pub mod envelope;
pub mod event;
pub mod response;

pub use envelope::{PubSubMessage, PushEnvelope};
pub use event::{DecodedEvent, HandlerResult, HandlerStatus};
pub use response::{format_duration, EventResponse, FailureResponse};
