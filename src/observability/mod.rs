//! Observability: structured logging and the session event stream.

pub mod events;
pub mod logging;

pub use events::{Event, EventEmitter};
pub use logging::{LogOptions, init_logging};
