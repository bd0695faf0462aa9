// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays screen storage with allocation, topology, and property
//! management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::context::Screen;
use super::id::{INVALID, ScreenId};
use super::traverse::Children;
use crate::error::AttachError;
use crate::trace::{AttachEvent, DetachEvent, DetachReason, TraceSink, Tracer};
use crate::transition::{ScreenState, Transition, TransitionConfig};

/// Configuration for a new screen.
///
/// ```
/// use core::time::Duration;
/// use proscenium_core::screen::ScreenOptions;
/// use proscenium_core::transition::TransitionConfig;
///
/// let pause = ScreenOptions::named("pause")
///     .popup()
///     .with_transition(TransitionConfig::symmetric(Duration::from_millis(300)));
/// assert!(pause.popup);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenOptions {
    /// Name used in diagnostics.
    pub name: String,
    /// Transition durations.
    pub transition: TransitionConfig,
    /// A popup does not cover the screens beneath it.
    pub popup: bool,
    /// A persistent screen does not transition off when covered.
    pub persistent: bool,
}

impl ScreenOptions {
    /// Unnamed, instant, neither popup nor persistent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            transition: TransitionConfig::INSTANT,
            popup: false,
            persistent: false,
        }
    }

    /// Like [`new`](Self::new), with a diagnostic name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Marks the screen as a popup.
    #[must_use]
    pub fn popup(mut self) -> Self {
        self.popup = true;
        self
    }

    /// Marks the screen as persistent.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Sets the transition durations.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }
}

/// Struct-of-arrays storage for all screens.
///
/// Screens are addressed by [`ScreenId`] handles. Internally, each screen
/// occupies a slot in parallel arrays. Destroyed screens are recycled via a
/// free list, and generation counters prevent stale handle access.
///
/// `I` is the per-frame input snapshot type handed to
/// [`Screen::handle_input`].
pub struct ScreenStore<I> {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) children: Vec<Vec<u32>>,
    /// Per-host snapshot of `children` for the update pass in flight.
    pub(crate) working: Vec<Vec<u32>>,
    pub(crate) in_pass: Vec<bool>,

    // -- Transition --
    pub(crate) transition: Vec<Transition>,
    pub(crate) config: Vec<TransitionConfig>,
    pub(crate) popup: Vec<bool>,
    pub(crate) persistent: Vec<bool>,
    pub(crate) exiting: Vec<bool>,

    // -- Per-frame context (written by update) --
    pub(crate) focus_suppressed: Vec<bool>,
    pub(crate) covered: Vec<bool>,

    // -- Hooks --
    pub(crate) behavior: Vec<Option<Box<dyn Screen<I>>>>,
    pub(crate) name: Vec<String>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Diagnostics --
    pub(crate) tracer: Tracer,
    pub(crate) frame_index: u64,
    /// Application focus as of the most recent update pass.
    pub(crate) app_active: bool,
}

impl<I> fmt::Debug for ScreenStore<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenStore")
            .field("slots", &self.len)
            .field("alive", &self.alive_count())
            .field("free_list", &self.free_list.len())
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

impl<I> Default for ScreenStore<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> ScreenStore<I> {
    /// Creates an empty screen store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            children: Vec::new(),
            working: Vec::new(),
            in_pass: Vec::new(),
            transition: Vec::new(),
            config: Vec::new(),
            popup: Vec::new(),
            persistent: Vec::new(),
            exiting: Vec::new(),
            focus_suppressed: Vec::new(),
            covered: Vec::new(),
            behavior: Vec::new(),
            name: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            tracer: Tracer::none(),
            frame_index: 0,
            app_active: true,
        }
    }

    /// Installs a trace sink. Has no effect unless the `trace` feature is on.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer.set_sink(sink);
    }

    /// Removes and returns the installed trace sink, if any.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take_sink()
    }

    /// Returns the frame index of the most recent update pass.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    // -- Allocation API --

    /// Creates a detached screen with no behavior and returns its handle.
    ///
    /// The screen starts fully off ([`transition_position`] `1.0`) in
    /// [`ScreenState::TransitioningOn`]. A screen without behavior is a pure
    /// container: it still transitions, covers, and hosts children.
    ///
    /// [`transition_position`]: Self::transition_position
    pub fn create_screen(&mut self, options: ScreenOptions) -> ScreenId {
        let ScreenOptions {
            name,
            transition,
            popup,
            persistent,
        } = options;

        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = INVALID;
            self.children[i].clear();
            self.working[i].clear();
            self.in_pass[i] = false;
            self.transition[i] = Transition::new();
            self.config[i] = transition;
            self.popup[i] = popup;
            self.persistent[i] = persistent;
            self.exiting[i] = false;
            self.focus_suppressed[i] = !self.app_active;
            self.covered[i] = false;
            self.behavior[i] = None;
            self.name[i] = name;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.children.push(Vec::new());
            self.working.push(Vec::new());
            self.in_pass.push(false);
            self.transition.push(Transition::new());
            self.config.push(transition);
            self.popup.push(popup);
            self.persistent.push(persistent);
            self.exiting.push(false);
            self.focus_suppressed.push(!self.app_active);
            self.covered.push(false);
            self.behavior.push(None);
            self.name.push(name);
            self.generation.push(0);
            idx
        };

        self.handle(idx)
    }

    /// Creates a detached screen driven by `behavior`.
    pub fn create_screen_with<S>(&mut self, options: ScreenOptions, behavior: S) -> ScreenId
    where
        S: Screen<I> + 'static,
    {
        let id = self.create_screen(options);
        self.behavior[id.idx as usize] = Some(Box::new(behavior));
        id
    }

    /// Replaces the behavior of a screen, returning the previous one.
    ///
    /// While a screen's own update or input hook is running its behavior is
    /// lent out: this returns `None`, and the new behavior replaces the
    /// running one once the hook returns.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn set_behavior(
        &mut self,
        id: ScreenId,
        behavior: Option<Box<dyn Screen<I>>>,
    ) -> Option<Box<dyn Screen<I>>> {
        self.validate(id);
        core::mem::replace(&mut self.behavior[id.idx as usize], behavior)
    }

    /// Destroys a screen and its entire subtree, freeing their slots.
    ///
    /// The screen is detached from its parent first if it is attached.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_screen(&mut self, id: ScreenId) {
        self.validate(id);
        self.detach(id.idx, DetachReason::Removed);
        self.free_subtree(id.idx);
    }

    /// Returns whether the given handle refers to a live screen.
    #[must_use]
    pub fn is_alive(&self, id: ScreenId) -> bool {
        id.idx < self.len && self.generation[id.idx as usize] == id.generation
    }

    /// Returns the number of live screens.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Topology API --

    /// Attaches `child` as the topmost child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an [`AttachError`] and leaves the tree unchanged if either
    /// handle is stale, if `child` already has a parent, if `child` is
    /// `parent`, or if `child` is an ancestor of `parent`.
    pub fn add_child(&mut self, parent: ScreenId, child: ScreenId) -> Result<(), AttachError> {
        let result = self.check_attach(parent, child);
        match result {
            Ok(()) => {
                let (p, c) = (parent.idx, child.idx);
                self.parent[c as usize] = p;
                self.children[p as usize].push(c);
                self.tracer.attach(&AttachEvent {
                    frame_index: self.frame_index,
                    parent,
                    child,
                });
            }
            Err(err) => self.tracer.attach_rejected(&err),
        }
        result
    }

    /// Detaches `child` from `parent`.
    ///
    /// The child is also dropped from `parent`'s in-flight update snapshot, so
    /// a screen removed during an update pass is not updated again in that
    /// pass. The child stays alive and may be attached elsewhere or destroyed.
    ///
    /// Returns `false` without doing anything if `child` is not currently a
    /// child of `parent` (including when either handle is stale).
    pub fn remove_child(&mut self, parent: ScreenId, child: ScreenId) -> bool {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return false;
        }
        if self.parent[child.idx as usize] != parent.idx {
            return false;
        }
        self.detach(child.idx, DetachReason::Removed)
    }

    /// Detaches `child` from whatever parent it has.
    ///
    /// Returns `false` if the handle is stale or the screen is not attached.
    pub fn remove_from_parent(&mut self, child: ScreenId) -> bool {
        if !self.is_alive(child) {
            return false;
        }
        self.detach(child.idx, DetachReason::Removed)
    }

    /// Asks a screen to leave gracefully.
    ///
    /// With a zero off-duration the screen is detached and destroyed (with its
    /// subtree) immediately. Otherwise it is marked as exiting: subsequent
    /// update passes animate it off, then detach and destroy it.
    ///
    /// Calling this on a stale handle or on a screen that is already exiting
    /// does nothing.
    pub fn exit_screen(&mut self, id: ScreenId) {
        if !self.is_alive(id) {
            return;
        }
        let i = id.idx as usize;
        if self.config[i].off.is_zero() {
            self.finish_exit(id.idx);
        } else {
            self.exiting[i] = true;
        }
    }

    /// Returns the parent of a screen, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent(&self, id: ScreenId) -> Option<ScreenId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| self.handle(p))
    }

    /// Returns an iterator over the direct children of a screen, from bottom
    /// (first attached) to top (most recently attached).
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn children(&self, id: ScreenId) -> Children<'_> {
        self.validate(id);
        Children::new(&self.children[id.idx as usize], &self.generation)
    }

    /// Returns the number of direct children of a screen.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn child_count(&self, id: ScreenId) -> usize {
        self.validate(id);
        self.children[id.idx as usize].len()
    }

    /// Returns the topmost child of a screen, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn top_child(&self, id: ScreenId) -> Option<ScreenId> {
        self.children(id).next_back()
    }

    /// Returns all live screens that have no parent.
    #[must_use]
    pub fn roots(&self) -> Vec<ScreenId> {
        (0..self.len)
            .filter(|&idx| self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx))
            .map(|idx| self.handle(idx))
            .collect()
    }

    // -- Property getters --

    /// Returns the transition state of a screen.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn state(&self, id: ScreenId) -> ScreenState {
        self.validate(id);
        self.transition[id.idx as usize].state()
    }

    /// Returns the full transition record of a screen.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn transition(&self, id: ScreenId) -> Transition {
        self.validate(id);
        self.transition[id.idx as usize]
    }

    /// Returns the transition position of a screen (`0.0` = fully on).
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn transition_position(&self, id: ScreenId) -> f64 {
        self.transition(id).position()
    }

    /// Returns the draw opacity of a screen (`255` when fully on).
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn transition_alpha(&self, id: ScreenId) -> u8 {
        self.transition(id).alpha()
    }

    /// Returns whether a screen is eligible for input: no screen above it
    /// claimed focus in the last update pass and it is transitioning on or
    /// active.
    ///
    /// A screen that has not been through an update pass yet inherits the
    /// application focus of the most recent pass, so screens created while
    /// the application is unfocused are never active.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_active(&self, id: ScreenId) -> bool {
        self.validate(id);
        let i = id.idx as usize;
        !self.focus_suppressed[i] && self.transition[i].state().is_input_eligible()
    }

    /// Returns whether the last update pass found the screen covered.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_covered(&self, id: ScreenId) -> bool {
        self.validate(id);
        self.covered[id.idx as usize]
    }

    /// Returns whether a screen is a popup.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_popup(&self, id: ScreenId) -> bool {
        self.validate(id);
        self.popup[id.idx as usize]
    }

    /// Returns whether a screen is persistent.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_persistent(&self, id: ScreenId) -> bool {
        self.validate(id);
        self.persistent[id.idx as usize]
    }

    /// Returns whether a screen is exiting.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_exiting(&self, id: ScreenId) -> bool {
        self.validate(id);
        self.exiting[id.idx as usize]
    }

    /// Returns the transition durations of a screen.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn transition_config(&self, id: ScreenId) -> TransitionConfig {
        self.validate(id);
        self.config[id.idx as usize]
    }

    /// Returns the diagnostic name of a screen.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn name(&self, id: ScreenId) -> &str {
        self.validate(id);
        &self.name[id.idx as usize]
    }

    // -- Mutation API --

    /// Sets whether a screen is a popup. Takes effect on the next update pass.
    pub fn set_popup(&mut self, id: ScreenId, popup: bool) {
        self.validate(id);
        self.popup[id.idx as usize] = popup;
    }

    /// Sets whether a screen is persistent. Takes effect on the next update
    /// pass.
    pub fn set_persistent(&mut self, id: ScreenId, persistent: bool) {
        self.validate(id);
        self.persistent[id.idx as usize] = persistent;
    }

    /// Sets the transition durations of a screen.
    pub fn set_transition_config(&mut self, id: ScreenId, config: TransitionConfig) {
        self.validate(id);
        self.config[id.idx as usize] = config;
    }

    /// Sets the diagnostic name of a screen.
    pub fn set_name(&mut self, id: ScreenId, name: impl Into<String>) {
        self.validate(id);
        self.name[id.idx as usize] = name.into();
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: ScreenId) {
        assert!(
            self.is_alive(id),
            "stale ScreenId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    pub(crate) fn handle(&self, idx: u32) -> ScreenId {
        ScreenId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    fn check_attach(&self, parent: ScreenId, child: ScreenId) -> Result<(), AttachError> {
        if !self.is_alive(parent) {
            return Err(AttachError::StaleHandle(parent));
        }
        if !self.is_alive(child) {
            return Err(AttachError::StaleHandle(child));
        }
        if parent == child {
            return Err(AttachError::SelfAttach(child));
        }
        let current = self.parent[child.idx as usize];
        if current != INVALID {
            return Err(AttachError::AlreadyManaged {
                child,
                parent: self.handle(current),
            });
        }
        let mut ancestor = self.parent[parent.idx as usize];
        while ancestor != INVALID {
            if ancestor == child.idx {
                return Err(AttachError::WouldCycle { parent, child });
            }
            ancestor = self.parent[ancestor as usize];
        }
        Ok(())
    }

    /// Unlinks `idx` from its parent's child list and update snapshot.
    ///
    /// Returns `false` if it had no parent.
    fn detach(&mut self, idx: u32, reason: DetachReason) -> bool {
        let p = self.parent[idx as usize];
        if p == INVALID {
            return false;
        }
        remove_first(&mut self.children[p as usize], idx);
        remove_first(&mut self.working[p as usize], idx);
        self.parent[idx as usize] = INVALID;

        self.tracer.detach(&DetachEvent {
            frame_index: self.frame_index,
            parent: self.handle(p),
            child: self.handle(idx),
            reason,
        });
        true
    }

    /// Detaches an exiting screen and destroys its subtree.
    pub(crate) fn finish_exit(&mut self, idx: u32) {
        self.detach(idx, DetachReason::Exited);
        self.free_subtree(idx);
    }

    /// Frees `root` and every descendant. `root` must already be detached.
    fn free_subtree(&mut self, root: u32) {
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let i = idx as usize;
            stack.append(&mut self.children[i]);
            self.parent[i] = INVALID;
            self.working[i].clear();
            self.in_pass[i] = false;
            self.exiting[i] = false;
            self.behavior[i] = None;
            self.name[i].clear();

            // Bump generation so old handles immediately fail validation.
            self.generation[i] += 1;
            self.free_list.push(idx);
        }
    }
}

fn remove_first(list: &mut Vec<u32>, idx: u32) {
    if let Some(pos) = list.iter().position(|&x| x == idx) {
        list.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ScreenStore<()> {
        ScreenStore::new()
    }

    #[test]
    fn create_and_destroy() {
        let mut store = store();
        let id = store.create_screen(ScreenOptions::named("title"));
        assert!(store.is_alive(id));
        assert_eq!(store.name(id), "title");
        assert_eq!(store.state(id), ScreenState::TransitioningOn);
        assert_eq!(store.transition_position(id), 1.0);
        store.destroy_screen(id);
        assert!(!store.is_alive(id));
        assert_eq!(store.alive_count(), 0);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = store();
        let id1 = store.create_screen(ScreenOptions::new());
        store.destroy_screen(id1);
        let id2 = store.create_screen(ScreenOptions::new());
        // id2 reuses the same slot but has a different generation.
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    fn reused_slot_starts_fresh() {
        let mut store = store();
        let old = store.create_screen(ScreenOptions::named("old").popup().persistent());
        store.destroy_screen(old);
        let new = store.create_screen(ScreenOptions::new());
        assert!(!store.is_popup(new));
        assert!(!store.is_persistent(new));
        assert_eq!(store.name(new), "");
        assert_eq!(store.state(new), ScreenState::TransitioningOn);
    }

    #[test]
    fn add_child_appends_on_top() {
        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let a = store.create_screen(ScreenOptions::new());
        let b = store.create_screen(ScreenOptions::new());

        store.add_child(root, a).unwrap();
        store.add_child(root, b).unwrap();

        assert_eq!(store.parent(a), Some(root));
        assert_eq!(store.parent(b), Some(root));
        let kids: Vec<_> = store.children(root).collect();
        assert_eq!(kids, [a, b]);
        assert_eq!(store.top_child(root), Some(b));
    }

    #[test]
    fn attach_already_managed_is_rejected() {
        let mut store = store();
        let p1 = store.create_screen(ScreenOptions::new());
        let p2 = store.create_screen(ScreenOptions::new());
        let child = store.create_screen(ScreenOptions::new());
        store.add_child(p1, child).unwrap();

        let err = store.add_child(p2, child).unwrap_err();
        assert_eq!(err, AttachError::AlreadyManaged { child, parent: p1 });
        assert_eq!(store.parent(child), Some(p1), "no silent re-parenting");
        assert_eq!(store.children(p2).len(), 0);
        assert_eq!(store.children(p1).len(), 1);

        let err = store.add_child(p1, child).unwrap_err();
        assert!(
            matches!(err, AttachError::AlreadyManaged { .. }),
            "re-adding to the same parent is also rejected"
        );
        assert_eq!(store.children(p1).len(), 1, "no duplicate entry");
    }

    #[test]
    fn attach_self_and_cycles_are_rejected() {
        let mut store = store();
        let a = store.create_screen(ScreenOptions::new());
        let b = store.create_screen(ScreenOptions::new());
        let c = store.create_screen(ScreenOptions::new());
        store.add_child(a, b).unwrap();
        store.add_child(b, c).unwrap();

        assert_eq!(store.add_child(a, a), Err(AttachError::SelfAttach(a)));
        assert_eq!(
            store.add_child(c, a),
            Err(AttachError::WouldCycle { parent: c, child: a })
        );
        assert!(store.parent(a).is_none());
    }

    #[test]
    fn attach_stale_handle_is_rejected() {
        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let gone = store.create_screen(ScreenOptions::new());
        store.destroy_screen(gone);
        assert_eq!(
            store.add_child(root, gone),
            Err(AttachError::StaleHandle(gone))
        );
        assert_eq!(
            store.add_child(gone, root),
            Err(AttachError::StaleHandle(gone))
        );
    }

    #[test]
    fn remove_child_is_idempotent() {
        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let child = store.create_screen(ScreenOptions::new());
        store.add_child(root, child).unwrap();

        assert!(store.remove_child(root, child));
        assert_eq!(store.parent(child), None);
        assert!(store.children(root).next().is_none());

        assert!(!store.remove_child(root, child), "second remove is a no-op");
        assert!(!store.remove_from_parent(child));
        assert!(store.is_alive(child), "remove does not destroy");
    }

    #[test]
    fn remove_child_ignores_foreign_children() {
        let mut store = store();
        let p1 = store.create_screen(ScreenOptions::new());
        let p2 = store.create_screen(ScreenOptions::new());
        let child = store.create_screen(ScreenOptions::new());
        store.add_child(p1, child).unwrap();

        assert!(!store.remove_child(p2, child));
        assert_eq!(store.parent(child), Some(p1));
    }

    #[test]
    fn remove_keeps_sibling_order() {
        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let a = store.create_screen(ScreenOptions::new());
        let b = store.create_screen(ScreenOptions::new());
        let c = store.create_screen(ScreenOptions::new());
        for id in [a, b, c] {
            store.add_child(root, id).unwrap();
        }
        assert!(store.remove_from_parent(b));
        let kids: Vec<_> = store.children(root).collect();
        assert_eq!(kids, [a, c]);
    }

    #[test]
    fn detached_screen_can_be_reattached() {
        let mut store = store();
        let p1 = store.create_screen(ScreenOptions::new());
        let p2 = store.create_screen(ScreenOptions::new());
        let child = store.create_screen(ScreenOptions::new());
        store.add_child(p1, child).unwrap();
        store.remove_from_parent(child);
        store.add_child(p2, child).unwrap();
        assert_eq!(store.parent(child), Some(p2));
    }

    #[test]
    fn exit_with_zero_off_duration_is_synchronous() {
        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let menu = store.create_screen(ScreenOptions::new());
        let item = store.create_screen(ScreenOptions::new());
        store.add_child(root, menu).unwrap();
        store.add_child(menu, item).unwrap();

        store.exit_screen(menu);
        assert!(store.children(root).next().is_none());
        assert!(!store.is_alive(menu), "exited screen is destroyed");
        assert!(!store.is_alive(item), "with its subtree");

        // A second request is benign.
        store.exit_screen(menu);
    }

    #[test]
    fn exit_with_off_duration_is_deferred() {
        use core::time::Duration;

        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let menu = store.create_screen(
            ScreenOptions::new()
                .with_transition(TransitionConfig::symmetric(Duration::from_millis(200))),
        );
        store.add_child(root, menu).unwrap();

        store.exit_screen(menu);
        assert!(store.is_alive(menu));
        assert!(store.is_exiting(menu));
        assert_eq!(store.parent(menu), Some(root));
    }

    #[test]
    fn destroy_frees_subtree() {
        let mut store = store();
        let root = store.create_screen(ScreenOptions::new());
        let a = store.create_screen(ScreenOptions::new());
        let b = store.create_screen(ScreenOptions::new());
        let c = store.create_screen(ScreenOptions::new());
        store.add_child(root, a).unwrap();
        store.add_child(a, b).unwrap();
        store.add_child(b, c).unwrap();

        store.destroy_screen(a);
        assert!(store.is_alive(root));
        for id in [a, b, c] {
            assert!(!store.is_alive(id), "{id:?} should be freed");
        }
        assert_eq!(store.alive_count(), 1);
        assert!(store.children(root).next().is_none());
    }

    #[test]
    fn roots_returns_parentless_screens() {
        let mut store = store();
        let a = store.create_screen(ScreenOptions::new());
        let b = store.create_screen(ScreenOptions::new());
        let c = store.create_screen(ScreenOptions::new());
        store.add_child(a, c).unwrap();

        let roots = store.roots();
        assert!(roots.contains(&a));
        assert!(roots.contains(&b));
        assert!(!roots.contains(&c));
    }

    #[test]
    fn setters_round_trip() {
        let mut store = store();
        let id = store.create_screen(ScreenOptions::new());
        store.set_popup(id, true);
        store.set_persistent(id, true);
        store.set_name(id, "hud");
        let config = TransitionConfig::from_secs_f64(0.5, 0.25);
        store.set_transition_config(id, config);

        assert!(store.is_popup(id));
        assert!(store.is_persistent(id));
        assert_eq!(store.name(id), "hud");
        assert_eq!(store.transition_config(id), config);
    }

    #[test]
    fn fresh_screen_is_active_before_first_update() {
        let mut store = store();
        let id = store.create_screen(ScreenOptions::new());
        assert!(store.is_active(id));
        assert!(!store.is_covered(id));
        assert_eq!(store.transition_alpha(id), 0);
    }

    #[test]
    #[should_panic(expected = "stale ScreenId")]
    fn destroyed_handle_panics_on_state() {
        let mut store = store();
        let id = store.create_screen(ScreenOptions::new());
        store.destroy_screen(id);
        let _ = store.state(id);
    }

    #[test]
    #[should_panic(expected = "stale ScreenId")]
    fn destroyed_handle_panics_on_parent() {
        let mut store = store();
        let id = store.create_screen(ScreenOptions::new());
        store.destroy_screen(id);
        let _ = store.parent(id);
    }

    #[test]
    #[should_panic(expected = "stale ScreenId")]
    fn destroyed_handle_panics_on_destroy() {
        let mut store = store();
        let id = store.create_screen(ScreenOptions::new());
        store.destroy_screen(id);
        store.destroy_screen(id);
    }
}
