pub mod decoder;
pub mod event_handlers;
pub mod event_processing;
pub mod router;


pub use decoder::decode_message;
pub use event_handlers::{OrderPlacedHandler, TestEventHandler, UserCreatedHandler};
pub use event_processing::EventProcessingService;
pub use router::{EventHandler, EventRouter};
