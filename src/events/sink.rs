//! Display sinks: where a game's status lines go.
//!
//! The engine never prints. It hands each `GameEvent` to the `DisplaySink`
//! it was built with, and the sink decides what to do with it.

use std::io::{self, Write};

use super::event::GameEvent;

/// Receiver for status events.
pub trait DisplaySink {
    /// Accept one event. Called once per event, in emission order.
    fn emit(&mut self, event: &GameEvent);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<GameEvent>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Rendered status lines received so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Consume the recorder, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}

impl DisplaySink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards events to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DisplaySink for TracingSink {
    fn emit(&mut self, event: &GameEvent) {
        tracing::info!(target: "sticks::table", "{event}");
    }
}

/// Writes one line per event to a writer, stdout by default.
///
/// Write failures are logged and otherwise ignored: losing a status line never
/// stops the game.
#[derive(Debug)]
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    /// Sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn emit(&mut self, event: &GameEvent) {
        if let Err(err) = writeln!(self.out, "{event}") {
            tracing::warn!(error = %err, "failed to write status line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.emit(&GameEvent::TotalRemaining { total: 15 });
        sink.emit(&GameEvent::PlayerLost { player: "a".into() });

        assert_eq!(sink.lines(), vec!["15 sticks remain in total", "a lost!!!"]);
        assert_eq!(sink.into_events().len(), 2);
    }

    #[test]
    fn test_console_sink_writes_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&GameEvent::SticksRemoved { quantity: 2 });
        sink.emit(&GameEvent::TotalRemaining { total: 0 });

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "and removed 2\n0 sticks remain in total\n");
    }

    #[test]
    fn test_sink_through_mut_ref_and_box() {
        fn emit_round<S: DisplaySink>(mut sink: S, round: u32) {
            sink.emit(&GameEvent::RoundStarted { round });
        }

        let mut recorder = RecordingSink::new();
        emit_round(&mut recorder, 1);
        assert_eq!(recorder.events(), &[GameEvent::RoundStarted { round: 1 }]);

        let mut boxed: Box<dyn DisplaySink> = Box::new(TracingSink);
        boxed.emit(&GameEvent::RoundStarted { round: 2 });
    }
}
