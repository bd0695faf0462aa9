// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer contract for drawing backends.
//!
//! The core never talks to a graphics API. During the draw pass, screen
//! [`draw`](crate::screen::Screen::draw) hooks receive a `&mut dyn Renderer`
//! and issue the two primitives the screen stack needs:
//!
//! - **Filled rectangles**: used for the full-viewport fade-to-black overlay
//!   (see [`DrawCx::fade_to_black`](crate::screen::DrawCx::fade_to_black)) and
//!   for simple panels.
//! - **Text**: a string at a position in a given font, for menus and
//!   diagnostics.
//!
//! Backend crates implement [`Renderer`] over their own drawing stack. The
//! [`RecordingRenderer`] in this module keeps the commands in a list, which is
//! useful for tests and headless frame loops.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_frame(now: HostTime) {
//!     let elapsed = clock.tick(now);
//!     let input = poll_input();
//!     let frame = FrameContext::new(clock.frame_index(), elapsed, &input)
//!         .with_app_active(window.has_focus());
//!
//!     // Update: resolve transitions, focus, and cover for the whole stack.
//!     store.update(root, &frame);
//!
//!     // Draw: paint every visible screen bottom to top.
//!     store.draw(root, &mut renderer, viewport);
//! }
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};

/// An 8-bit-per-channel RGBA color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (`0` = transparent, `255` = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates a color from its four channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Returns this color with its alpha replaced.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// An opaque reference to a font.
///
/// Fonts are loaded and owned by the backend; the core only passes the handle
/// through to [`Renderer::draw_text`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontId(pub u32);

impl fmt::Debug for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FontId({})", self.0)
    }
}

/// Draws the primitives screens need.
///
/// Implementations are free to batch. Failures inside a renderer are the
/// backend's concern; the draw pass does not observe them.
pub trait Renderer {
    /// Fills `rect` with `color`, alpha-blended over what is already drawn.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, font: FontId, text: &str, origin: Point, color: Color);
}

/// A single command captured by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A [`Renderer::fill_rect`] call.
    FillRect {
        /// Rectangle that was filled.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A [`Renderer::draw_text`] call.
    Text {
        /// Font handle.
        font: FontId,
        /// The string drawn.
        text: String,
        /// Top-left corner.
        origin: Point,
        /// Text color.
        color: Color,
    },
}

/// A [`Renderer`] that records every command in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the text of every recorded text command, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::FillRect { .. } => None,
        })
    }

    /// Discards all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, font: FontId, text: &str, origin: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            font,
            text: String::from(text),
            origin,
            color,
        });
    }
}
