//! Domain events: the event contract and the buffer aggregates record into.

pub mod event;
pub mod recorder;

pub use event::Event;
pub use recorder::EventRecorder;
