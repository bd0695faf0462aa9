// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame draw pass.

use kurbo::Rect;

use super::context::DrawCx;
use super::id::ScreenId;
use super::store::ScreenStore;
use crate::backend::Renderer;

impl<I> ScreenStore<I> {
    /// Draws the visible children of `host`, bottom to top.
    ///
    /// Hidden children are skipped along with their subtrees. For every other
    /// child, its own children are drawn first and then its
    /// [`draw`](super::Screen::draw) hook runs. The host itself is not drawn.
    ///
    /// Returns the number of screens drawn, counting those without a behavior.
    ///
    /// # Panics
    ///
    /// Panics if `host` is stale.
    pub fn draw(&self, host: ScreenId, renderer: &mut dyn Renderer, viewport: Rect) -> u32 {
        self.validate(host);
        self.draw_children(host.idx, renderer, viewport)
    }

    fn draw_children(&self, host: u32, renderer: &mut dyn Renderer, viewport: Rect) -> u32 {
        let mut drawn = 0;
        for &c in &self.children[host as usize] {
            let ci = c as usize;
            if !self.transition[ci].state().is_visible() {
                continue;
            }
            drawn += self.draw_children(c, renderer, viewport);
            if let Some(behavior) = &self.behavior[ci] {
                let cx = DrawCx {
                    store: self,
                    id: self.handle(c),
                    viewport,
                };
                behavior.draw(&cx, renderer);
            }
            drawn += 1;
        }
        drawn
    }
}
