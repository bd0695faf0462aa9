// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the screen stack.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`ScreenStore`](crate::screen::ScreenStore) calls as screens are attached,
//! detached, change state, and receive focus. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and installing a sink
//! simply drops it. When **on**, each method performs a single `Option`
//! branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use crate::error::AttachError;
use crate::screen::ScreenId;
use crate::transition::ScreenState;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why a screen left its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetachReason {
    /// Removed directly via `remove_child` or `remove_from_parent`.
    Removed,
    /// Finished exiting and was destroyed.
    Exited,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a screen's state tag changes during an update pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateChangeEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// The screen whose state changed.
    pub screen: ScreenId,
    /// State before resolution.
    pub from: ScreenState,
    /// State after resolution.
    pub to: ScreenState,
    /// Transition position after resolution.
    pub position: f64,
}

/// Emitted when a screen is given input focus for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FocusEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// The screen that received input.
    pub screen: ScreenId,
}

/// Emitted when a screen is attached to a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttachEvent {
    /// Most recent frame counter seen by the store.
    pub frame_index: u64,
    /// The new parent.
    pub parent: ScreenId,
    /// The attached screen (now topmost among its siblings).
    pub child: ScreenId,
}

/// Emitted when a screen is detached from its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DetachEvent {
    /// Most recent frame counter seen by the store.
    pub frame_index: u64,
    /// The former parent.
    pub parent: ScreenId,
    /// The detached screen.
    pub child: ScreenId,
    /// Why it was detached.
    pub reason: DetachReason,
}

/// Emitted at the end of each update pass over a host's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UpdatePassEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// The screen whose children were updated.
    pub host: ScreenId,
    /// Number of direct children resolved in this pass.
    pub visited: u32,
    /// The child that received input, if any.
    pub focused: Option<ScreenId>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the screen stack.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a screen's state tag changes.
    fn on_state_change(&mut self, e: &StateChangeEvent) {
        _ = e;
    }

    /// Called when a screen receives input focus.
    fn on_focus(&mut self, e: &FocusEvent) {
        _ = e;
    }

    /// Called when a screen is attached.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called when an attach is rejected.
    fn on_attach_rejected(&mut self, err: &AttachError) {
        _ = err;
    }

    /// Called when a screen is detached.
    fn on_detach(&mut self, e: &DetachEvent) {
        _ = e;
    }

    /// Called at the end of each update pass.
    fn on_update_pass(&mut self, e: &UpdatePassEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        let mut tracer = Self::none();
        tracer.set_sink(sink);
        tracer
    }

    /// Replaces the sink.
    #[inline]
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        #[cfg(feature = "trace")]
        {
            self.sink = Some(sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
        }
    }

    /// Removes and returns the sink, if any.
    #[inline]
    pub fn take_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Emits a [`StateChangeEvent`].
    #[inline]
    pub fn state_change(&mut self, e: &StateChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_state_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FocusEvent`].
    #[inline]
    pub fn focus(&mut self, e: &FocusEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_focus(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a rejected attach.
    #[inline]
    pub fn attach_rejected(&mut self, err: &AttachError) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach_rejected(err);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = err;
        }
    }

    /// Emits a [`DetachEvent`].
    #[inline]
    pub fn detach(&mut self, e: &DetachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_detach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdatePassEvent`].
    #[inline]
    pub fn update_pass(&mut self, e: &UpdatePassEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update_pass(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{ScreenOptions, ScreenStore};

    #[test]
    fn noop_sink_compiles() {
        let mut store = ScreenStore::<()>::new();
        let id = store.create_screen(ScreenOptions::new());
        let mut sink = NoopSink;
        sink.on_focus(&FocusEvent {
            frame_index: 0,
            screen: id,
        });
        sink.on_update_pass(&UpdatePassEvent {
            frame_index: 0,
            host: id,
            visited: 0,
            focused: None,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut store = ScreenStore::<()>::new();
        let id = store.create_screen(ScreenOptions::new());
        let mut tracer = Tracer::none();
        tracer.focus(&FocusEvent {
            frame_index: 1,
            screen: id,
        });
        assert!(tracer.take_sink().is_none(), "no sink installed");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::rc::Rc;
        use alloc::vec::Vec;
        use core::cell::RefCell;

        struct RecordingSink {
            focused: Rc<RefCell<Vec<u64>>>,
        }
        impl TraceSink for RecordingSink {
            fn on_focus(&mut self, e: &FocusEvent) {
                self.focused.borrow_mut().push(e.frame_index);
            }
        }

        let mut store = ScreenStore::<()>::new();
        let id = store.create_screen(ScreenOptions::new());
        let focused = Rc::new(RefCell::new(Vec::new()));
        let mut tracer = Tracer::new(Box::new(RecordingSink {
            focused: Rc::clone(&focused),
        }));
        tracer.focus(&FocusEvent {
            frame_index: 42,
            screen: id,
        });
        assert_eq!(*focused.borrow(), [42]);
    }
}
