// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use proscenium_core::error::AttachError;
use proscenium_core::trace::{
    AttachEvent, DetachEvent, DetachReason, FocusEvent, StateChangeEvent, TraceSink,
    UpdatePassEvent,
};
use proscenium_core::transition::ScreenState;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    show_passes: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("show_passes", &self.show_passes)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Update-pass summaries are printed only when they gave focus to a screen;
    /// see [`show_all_passes`](Self::show_all_passes).
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            show_passes: false,
        }
    }

    /// Prints every update-pass summary, including empty and unfocused ones.
    #[must_use]
    pub fn show_all_passes(mut self) -> Self {
        self.show_passes = true;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn state_name(state: ScreenState) -> &'static str {
    match state {
        ScreenState::TransitioningOn => "on",
        ScreenState::Active => "active",
        ScreenState::TransitioningOff => "off",
        ScreenState::Hidden => "hidden",
    }
}

fn reason_name(reason: DetachReason) -> &'static str {
    match reason {
        DetachReason::Removed => "removed",
        DetachReason::Exited => "exited",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_state_change(&mut self, e: &StateChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[state] frame={} screen={:?} {} -> {} position={:.3}",
            e.frame_index,
            e.screen,
            state_name(e.from),
            state_name(e.to),
            e.position,
        );
    }

    fn on_focus(&mut self, e: &FocusEvent) {
        let _ = writeln!(
            self.writer,
            "[focus] frame={} screen={:?}",
            e.frame_index, e.screen,
        );
    }

    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = writeln!(
            self.writer,
            "[attach] frame={} parent={:?} child={:?}",
            e.frame_index, e.parent, e.child,
        );
    }

    fn on_attach_rejected(&mut self, err: &AttachError) {
        let _ = writeln!(self.writer, "[attach:rejected] {err}");
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        let _ = writeln!(
            self.writer,
            "[detach] frame={} parent={:?} child={:?} reason={}",
            e.frame_index,
            e.parent,
            e.child,
            reason_name(e.reason),
        );
    }

    fn on_update_pass(&mut self, e: &UpdatePassEvent) {
        if !self.show_passes && e.focused.is_none() {
            return;
        }
        let focused = match e.focused {
            Some(id) => format!("{id:?}"),
            None => String::from("none"),
        };
        let _ = writeln!(
            self.writer,
            "[pass] frame={} host={:?} visited={} focused={focused}",
            e.frame_index, e.host, e.visited,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proscenium_core::screen::{ScreenOptions, ScreenStore};

    #[test]
    fn pretty_print_state_change() {
        let mut store = ScreenStore::<()>::new();
        let id = store.create_screen(ScreenOptions::new());
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_state_change(&StateChangeEvent {
            frame_index: 3,
            screen: id,
            from: ScreenState::TransitioningOn,
            to: ScreenState::Active,
            position: 0.0,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[state]"), "got: {output}");
        assert!(output.contains("frame=3"), "got: {output}");
        assert!(output.contains("on -> active"), "got: {output}");
    }

    #[test]
    fn unfocused_passes_are_quiet_by_default() {
        let mut store = ScreenStore::<()>::new();
        let id = store.create_screen(ScreenOptions::new());
        let pass = UpdatePassEvent {
            frame_index: 0,
            host: id,
            visited: 0,
            focused: None,
        };

        let mut quiet = PrettyPrintSink::with_writer(Vec::<u8>::new());
        quiet.on_update_pass(&pass);
        assert!(quiet.into_inner().is_empty());

        let mut loud = PrettyPrintSink::with_writer(Vec::<u8>::new()).show_all_passes();
        loud.on_update_pass(&pass);
        let output = String::from_utf8(loud.into_inner()).unwrap();
        assert!(output.contains("focused=none"), "got: {output}");
    }

    #[test]
    fn store_events_reach_the_sink() {
        use std::cell::RefCell;
        use std::rc::Rc;

        /// Shares the written bytes with the test after the sink is boxed.
        #[derive(Clone, Default)]
        struct Shared(Rc<RefCell<Vec<u8>>>);
        impl Write for Shared {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.borrow_mut().write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let out = Shared::default();
        let mut store = ScreenStore::<()>::new();
        store.set_trace_sink(Box::new(PrettyPrintSink::with_writer(out.clone())));
        let root = store.create_screen(ScreenOptions::new());
        let menu = store.create_screen(ScreenOptions::new());
        store.add_child(root, menu).unwrap();
        let _ = store.add_child(root, menu);
        store.exit_screen(menu);

        let output = String::from_utf8(out.0.borrow().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3, "got: {output}");
        assert!(lines[0].starts_with("[attach]"), "got: {output}");
        assert!(lines[1].starts_with("[attach:rejected]"), "got: {output}");
        assert!(lines[2].ends_with("reason=exited"), "got: {output}");
    }
}
