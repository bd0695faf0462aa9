// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON Lines trace output.
//!
//! [`JsonLinesSink`] implements [`TraceSink`] and writes each event as a
//! single JSON object followed by a newline. Every object carries an `"event"`
//! name and the `"frame"` counter; screen handles are written as
//! `{"index": .., "generation": ..}`.

use std::io::Write;

use serde_json::{Value, json};

use proscenium_core::error::AttachError;
use proscenium_core::screen::ScreenId;
use proscenium_core::trace::{
    AttachEvent, DetachEvent, FocusEvent, StateChangeEvent, TraceSink, UpdatePassEvent,
};

/// Writes one JSON object per event to a [`Write`](std::io::Write) destination.
pub struct JsonLinesSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl JsonLinesSink {
    /// Creates a sink that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

fn screen(id: ScreenId) -> Value {
    json!({
        "index": id.index(),
        "generation": id.generation(),
    })
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_state_change(&mut self, e: &StateChangeEvent) {
        self.emit(&json!({
            "event": "state_change",
            "frame": e.frame_index,
            "screen": screen(e.screen),
            "from": format!("{:?}", e.from),
            "to": format!("{:?}", e.to),
            "position": e.position,
        }));
    }

    fn on_focus(&mut self, e: &FocusEvent) {
        self.emit(&json!({
            "event": "focus",
            "frame": e.frame_index,
            "screen": screen(e.screen),
        }));
    }

    fn on_attach(&mut self, e: &AttachEvent) {
        self.emit(&json!({
            "event": "attach",
            "frame": e.frame_index,
            "parent": screen(e.parent),
            "child": screen(e.child),
        }));
    }

    fn on_attach_rejected(&mut self, err: &AttachError) {
        self.emit(&json!({
            "event": "attach_rejected",
            "error": err.to_string(),
        }));
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        self.emit(&json!({
            "event": "detach",
            "frame": e.frame_index,
            "parent": screen(e.parent),
            "child": screen(e.child),
            "reason": format!("{:?}", e.reason),
        }));
    }

    fn on_update_pass(&mut self, e: &UpdatePassEvent) {
        self.emit(&json!({
            "event": "update_pass",
            "frame": e.frame_index,
            "host": screen(e.host),
            "visited": e.visited,
            "focused": e.focused.map(screen),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proscenium_core::screen::{ScreenOptions, ScreenStore};
    use proscenium_core::trace::DetachReason;
    use proscenium_core::transition::ScreenState;

    fn lines(bytes: Vec<u8>) -> Vec<Value> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn one_object_per_line() {
        let mut store = ScreenStore::<()>::new();
        let root = store.create_screen(ScreenOptions::new());
        let menu = store.create_screen(ScreenOptions::new());

        let mut sink = JsonLinesSink::with_writer(Vec::<u8>::new());
        sink.on_state_change(&StateChangeEvent {
            frame_index: 7,
            screen: menu,
            from: ScreenState::Active,
            to: ScreenState::TransitioningOff,
            position: 0.25,
        });
        sink.on_detach(&DetachEvent {
            frame_index: 9,
            parent: root,
            child: menu,
            reason: DetachReason::Exited,
        });
        sink.on_update_pass(&UpdatePassEvent {
            frame_index: 9,
            host: root,
            visited: 1,
            focused: None,
        });

        let events = lines(sink.into_inner());
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "state_change");
        assert_eq!(events[0]["frame"], 7);
        assert_eq!(events[0]["to"], "TransitioningOff");
        assert_eq!(events[0]["position"], 0.25);
        assert_eq!(events[0]["screen"]["index"], menu.index());
        assert_eq!(events[1]["reason"], "Exited");
        assert!(events[2]["focused"].is_null());
    }

    #[test]
    fn rejected_attach_carries_message() {
        let mut store = ScreenStore::<()>::new();
        let a = store.create_screen(ScreenOptions::new());

        let mut sink = JsonLinesSink::with_writer(Vec::<u8>::new());
        sink.on_attach_rejected(&AttachError::SelfAttach(a));
        let events = lines(sink.into_inner());
        assert_eq!(events[0]["event"], "attach_rejected");
        let message = events[0]["error"].as_str().unwrap();
        assert!(message.contains("itself"), "got: {message}");
    }
}
