// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen hooks and the contexts handed to them.

use core::time::Duration;

use kurbo::Rect;

use super::id::ScreenId;
use super::store::{ScreenOptions, ScreenStore};
use crate::backend::{Color, Renderer};
use crate::error::AttachError;
use crate::transition::ScreenState;

/// Per-screen behavior.
///
/// Every method defaults to a no-op, so a screen only implements the hooks it
/// needs. Screens without a behavior still transition, cover, and host
/// children.
pub trait Screen<I> {
    /// Called once per update pass after the screen's transition has been
    /// resolved, whether or not the screen is visible.
    fn update(&mut self, cx: &mut ScreenCx<'_, I>) {
        _ = cx;
    }

    /// Called for the single screen that holds focus this frame.
    fn handle_input(&mut self, cx: &mut ScreenCx<'_, I>, input: &I) {
        _ = (cx, input);
    }

    /// Called once per draw pass for every visible screen.
    fn draw(&self, cx: &DrawCx<'_, I>, renderer: &mut dyn Renderer) {
        _ = (cx, renderer);
    }
}

// ---------------------------------------------------------------------------
// ScreenCx
// ---------------------------------------------------------------------------

/// Mutable context for [`Screen::update`] and [`Screen::handle_input`].
///
/// Tree operations made through the context take effect immediately, including
/// for the update pass in flight: a screen removed here is not visited again
/// in this pass, and a screen added here is first visited next frame.
pub struct ScreenCx<'a, I> {
    pub(crate) store: &'a mut ScreenStore<I>,
    pub(crate) id: ScreenId,
    pub(crate) elapsed: Duration,
    pub(crate) frame_index: u64,
    pub(crate) other_has_focus: bool,
    pub(crate) covered: bool,
}

impl<I> core::fmt::Debug for ScreenCx<'_, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScreenCx")
            .field("id", &self.id)
            .field("frame_index", &self.frame_index)
            .field("other_has_focus", &self.other_has_focus)
            .field("covered", &self.covered)
            .finish_non_exhaustive()
    }
}

impl<I> ScreenCx<'_, I> {
    /// The screen whose hook is running.
    #[must_use]
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// The screen's parent, if the screen is still alive and attached.
    #[must_use]
    pub fn parent(&self) -> Option<ScreenId> {
        if !self.store.is_alive(self.id) {
            return None;
        }
        self.store.parent(self.id)
    }

    /// Time since the previous frame.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frame counter of the pass in flight.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Whether a screen above this one (or the host application losing focus)
    /// took input this frame.
    #[must_use]
    pub fn other_has_focus(&self) -> bool {
        self.other_has_focus
    }

    /// Whether a non-popup screen above this one is on screen.
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.covered
    }

    /// The screen's state after this frame's resolution.
    #[must_use]
    pub fn state(&self) -> ScreenState {
        self.store.state(self.id)
    }

    /// See [`ScreenStore::is_active`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.store.is_active(self.id)
    }

    /// See [`ScreenStore::transition_alpha`].
    #[must_use]
    pub fn transition_alpha(&self) -> u8 {
        self.store.transition_alpha(self.id)
    }

    /// Shared access to the whole store.
    #[must_use]
    pub fn store(&self) -> &ScreenStore<I> {
        self.store
    }

    /// Mutable access to the whole store.
    ///
    /// The running screen's own behavior is lent out for the duration of the
    /// hook and reads as absent through the store.
    pub fn store_mut(&mut self) -> &mut ScreenStore<I> {
        self.store
    }

    /// Creates a detached screen driven by `behavior`.
    pub fn create_screen_with<S>(&mut self, options: ScreenOptions, behavior: S) -> ScreenId
    where
        S: Screen<I> + 'static,
    {
        self.store.create_screen_with(options, behavior)
    }

    /// Attaches `child` as the topmost child of this screen.
    ///
    /// # Errors
    ///
    /// See [`ScreenStore::add_child`].
    pub fn add_child(&mut self, child: ScreenId) -> Result<(), AttachError> {
        self.store.add_child(self.id, child)
    }

    /// Attaches `screen` above this one, as the topmost child of this
    /// screen's parent.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::StaleHandle`] for this screen if it has no
    /// parent or has already been destroyed (for example by an instant
    /// [`exit`](Self::exit)), and otherwise the errors of
    /// [`ScreenStore::add_child`].
    pub fn add_sibling(&mut self, screen: ScreenId) -> Result<(), AttachError> {
        let Some(parent) = self.parent() else {
            let err = AttachError::StaleHandle(self.id);
            self.store.tracer.attach_rejected(&err);
            return Err(err);
        };
        self.store.add_child(parent, screen)
    }

    /// Detaches `child` from this screen. See [`ScreenStore::remove_child`].
    pub fn remove_child(&mut self, child: ScreenId) -> bool {
        self.store.remove_child(self.id, child)
    }

    /// Asks this screen to leave gracefully. See [`ScreenStore::exit_screen`].
    ///
    /// With a zero off-duration the screen is destroyed before the hook
    /// returns. The context stays usable: [`parent`](Self::parent) reports
    /// `None` and [`add_sibling`](Self::add_sibling) is rejected, but the
    /// store queries that take this screen's id will panic.
    pub fn exit(&mut self) {
        self.store.exit_screen(self.id);
    }

    /// Asks another screen to leave gracefully.
    pub fn exit_screen(&mut self, id: ScreenId) {
        self.store.exit_screen(id);
    }

    /// Whether this screen is still alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.store.is_alive(self.id)
    }
}

// ---------------------------------------------------------------------------
// DrawCx
// ---------------------------------------------------------------------------

/// Read-only context for [`Screen::draw`].
pub struct DrawCx<'a, I> {
    pub(crate) store: &'a ScreenStore<I>,
    pub(crate) id: ScreenId,
    pub(crate) viewport: Rect,
}

impl<I> core::fmt::Debug for DrawCx<'_, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawCx")
            .field("id", &self.id)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl<I> DrawCx<'_, I> {
    /// The screen being drawn.
    #[must_use]
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// The screen's current state. Never [`ScreenState::Hidden`].
    #[must_use]
    pub fn state(&self) -> ScreenState {
        self.store.state(self.id)
    }

    /// The screen's transition position (`0.0` = fully on).
    #[must_use]
    pub fn position(&self) -> f64 {
        self.store.transition_position(self.id)
    }

    /// The opacity to draw the screen's content with.
    #[must_use]
    pub fn alpha(&self) -> u8 {
        self.store.transition_alpha(self.id)
    }

    /// How far off the screen is, as an overlay alpha.
    #[must_use]
    pub fn fade_alpha(&self) -> u8 {
        self.store.transition(self.id).fade_alpha()
    }

    /// The full drawing area.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Shared access to the whole store.
    #[must_use]
    pub fn store(&self) -> &ScreenStore<I> {
        self.store
    }

    /// Covers the whole viewport with black at the given alpha.
    pub fn fade_to_black(&self, renderer: &mut dyn Renderer, alpha: u8) {
        renderer.fill_rect(self.viewport, Color::BLACK.with_alpha(alpha));
    }
}
