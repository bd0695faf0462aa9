// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame update pass.

use super::context::{Screen, ScreenCx};
use super::id::ScreenId;
use super::store::ScreenStore;
use crate::frame::FrameContext;
use crate::trace::{FocusEvent, StateChangeEvent, UpdatePassEvent};
use crate::transition::{Resolution, Situation};

/// Summary of one [`ScreenStore::update`] call over a host's direct children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UpdateStats {
    /// Direct children resolved in this pass.
    pub visited: u32,
    /// The child that received input, if any.
    pub focused: Option<ScreenId>,
}

impl<I> ScreenStore<I> {
    /// Runs one update pass over the children of `host`.
    ///
    /// Children are visited from the top of the stack down. Each child first
    /// updates its own children, then has its transition resolved against the
    /// focus and cover accumulated from the screens above it, then runs its
    /// [`update`](Screen::update) hook. The first input-eligible child gets the
    /// frame's input through [`handle_input`](Screen::handle_input), and every
    /// input-eligible non-popup child covers the ones below it.
    ///
    /// Iteration runs over a snapshot of the child list taken at the start of
    /// the pass. Screens removed during the pass are dropped from the snapshot
    /// and not visited again; screens added during the pass are first visited
    /// on the next pass. If `host` itself is destroyed by a hook, its pass
    /// ends. Calling `update` on a host whose pass is already in flight does
    /// nothing.
    ///
    /// The host's own hooks are not run; that is its parent's job.
    ///
    /// # Panics
    ///
    /// Panics if `host` is stale.
    pub fn update(&mut self, host: ScreenId, frame: &FrameContext<'_, I>) -> UpdateStats {
        self.validate(host);
        self.frame_index = frame.frame_index;
        self.app_active = frame.app_active;

        let h = host.idx as usize;
        let mut stats = UpdateStats::default();
        if self.in_pass[h] {
            return stats;
        }
        self.in_pass[h] = true;

        // Snapshot into the host's working list, reusing its allocation.
        let mut working = core::mem::take(&mut self.working[h]);
        working.clear();
        working.extend_from_slice(&self.children[h]);
        self.working[h] = working;

        let mut other_has_focus = !frame.app_active;
        let mut covered = false;

        while self.is_alive(host) {
            let Some(c) = self.working[h].pop() else {
                break;
            };
            let child = self.handle(c);
            let ci = c as usize;
            stats.visited += 1;

            self.update(child, frame);
            if !self.is_attached_to(child, host) {
                continue;
            }

            // -- Resolve --
            self.focus_suppressed[ci] = other_has_focus;
            self.covered[ci] = covered;
            let from = self.transition[ci].state();
            let resolution = self.transition[ci].resolve(
                frame.elapsed,
                &self.config[ci],
                Situation {
                    exiting: self.exiting[ci],
                    covered,
                    persistent: self.persistent[ci],
                },
            );
            let to = self.transition[ci].state();
            if from != to {
                self.tracer.state_change(&StateChangeEvent {
                    frame_index: frame.frame_index,
                    screen: child,
                    from,
                    to,
                    position: self.transition[ci].position(),
                });
            }
            if resolution == Resolution::Exited {
                self.finish_exit(c);
                continue;
            }

            // -- Hooks --
            self.with_behavior(child, frame, other_has_focus, covered, |b, cx| {
                b.update(cx);
            });
            if !self.is_attached_to(child, host) {
                continue;
            }

            // -- Focus and cover --
            if self.transition[ci].state().is_input_eligible() {
                let popup = self.popup[ci];
                if !other_has_focus {
                    self.tracer.focus(&FocusEvent {
                        frame_index: frame.frame_index,
                        screen: child,
                    });
                    stats.focused = Some(child);
                    self.with_behavior(child, frame, false, covered, |b, cx| {
                        b.handle_input(cx, frame.input);
                    });
                    other_has_focus = true;
                }
                if !popup {
                    covered = true;
                }
            }
        }

        if self.is_alive(host) {
            self.in_pass[h] = false;
        }
        self.tracer.update_pass(&UpdatePassEvent {
            frame_index: frame.frame_index,
            host,
            visited: stats.visited,
            focused: stats.focused,
        });
        stats
    }

    fn is_attached_to(&self, child: ScreenId, host: ScreenId) -> bool {
        self.is_alive(child) && self.parent[child.idx as usize] == host.idx
    }

    /// Lends a screen's behavior to `f` alongside a context over the store.
    ///
    /// The behavior is put back only if the screen survived the hook.
    fn with_behavior<F>(
        &mut self,
        id: ScreenId,
        frame: &FrameContext<'_, I>,
        other_has_focus: bool,
        covered: bool,
        f: F,
    ) where
        F: FnOnce(&mut dyn Screen<I>, &mut ScreenCx<'_, I>),
    {
        let i = id.idx as usize;
        let Some(mut behavior) = self.behavior[i].take() else {
            return;
        };
        let mut cx = ScreenCx {
            store: self,
            id,
            elapsed: frame.elapsed,
            frame_index: frame.frame_index,
            other_has_focus,
            covered,
        };
        f(behavior.as_mut(), &mut cx);
        if self.is_alive(id) && self.behavior[i].is_none() {
            self.behavior[i] = Some(behavior);
        }
    }
}
