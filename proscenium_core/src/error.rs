// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for screen tree operations.

use core::fmt;

use crate::screen::ScreenId;

/// Errors from [`ScreenStore::add_child`](crate::screen::ScreenStore::add_child).
///
/// In every case the tree is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// The child is already attached to a parent. Detach it first; screens
    /// are never silently re-parented.
    AlreadyManaged {
        /// The screen that was being attached.
        child: ScreenId,
        /// Its current parent.
        parent: ScreenId,
    },
    /// One of the handles refers to a destroyed screen.
    StaleHandle(ScreenId),
    /// A screen cannot be attached to itself.
    SelfAttach(ScreenId),
    /// The child is an ancestor of the requested parent.
    WouldCycle {
        /// The requested parent.
        parent: ScreenId,
        /// The requested child, an ancestor of `parent`.
        child: ScreenId,
    },
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyManaged { child, parent } => {
                write!(f, "{child:?} is already managed by {parent:?}")
            }
            Self::StaleHandle(id) => write!(f, "stale screen handle {id:?}"),
            Self::SelfAttach(id) => write!(f, "{id:?} cannot be attached to itself"),
            Self::WouldCycle { parent, child } => {
                write!(f, "attaching {child:?} under {parent:?} would form a cycle")
            }
        }
    }
}

impl core::error::Error for AttachError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::screen::{ScreenOptions, ScreenStore};

    #[test]
    fn display_names_both_screens() {
        let mut store = ScreenStore::<()>::new();
        let a = store.create_screen(ScreenOptions::new());
        let b = store.create_screen(ScreenOptions::new());
        let msg = AttachError::AlreadyManaged { child: a, parent: b }.to_string();
        assert!(msg.contains("already managed"), "got: {msg}");
        assert!(msg.contains(&alloc::format!("{a:?}")), "got: {msg}");
    }
}
