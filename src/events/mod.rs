//! Observable game events and the sinks that display them.
//!
//! The engine reports everything a spectator would see as `GameEvent`s.
//! Where they end up (console, tracing, an in-memory log for tests) is chosen
//! by the `DisplaySink` the game is constructed with.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{ConsoleSink, DisplaySink, RecordingSink, TracingSink};
