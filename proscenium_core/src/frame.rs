// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame inputs to the update pass.

use core::time::Duration;

/// Everything the update pass needs to know about the current frame.
///
/// The host loop builds one of these per frame from its clock, its window
/// focus state, and its input snapshot. `I` is opaque to the core: it is only
/// handed to the [`handle_input`](crate::screen::Screen::handle_input) hook of
/// the screen that holds focus.
#[derive(Debug)]
pub struct FrameContext<'a, I> {
    /// Monotonic frame counter, used for diagnostics.
    pub frame_index: u64,
    /// Time since the previous frame.
    pub elapsed: Duration,
    /// Whether the host application currently receives input. When `false`,
    /// no screen gets focus this frame.
    pub app_active: bool,
    /// The input snapshot for this frame.
    pub input: &'a I,
}

impl<'a, I> FrameContext<'a, I> {
    /// Creates a context for a focused application.
    #[must_use]
    pub const fn new(frame_index: u64, elapsed: Duration, input: &'a I) -> Self {
        Self {
            frame_index,
            elapsed,
            app_active: true,
            input,
        }
    }

    /// Returns a copy of this context with `app_active` set.
    #[must_use]
    pub fn with_app_active(self, app_active: bool) -> Self {
        Self { app_active, ..self }
    }
}

impl<I> Clone for FrameContext<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for FrameContext<'_, I> {}
