// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use core::iter::FusedIterator;
use core::slice;

use super::id::ScreenId;

/// An iterator over the direct children of a screen, bottom to top.
///
/// Created by [`ScreenStore::children`](super::ScreenStore::children).
#[derive(Debug)]
pub struct Children<'a> {
    slots: slice::Iter<'a, u32>,
    generation: &'a [u32],
}

impl<'a> Children<'a> {
    pub(crate) fn new(slots: &'a [u32], generation: &'a [u32]) -> Self {
        Self {
            slots: slots.iter(),
            generation,
        }
    }

    fn handle(&self, idx: u32) -> ScreenId {
        ScreenId {
            idx,
            generation: self.generation[idx as usize],
        }
    }
}

impl Iterator for Children<'_> {
    type Item = ScreenId;

    fn next(&mut self) -> Option<ScreenId> {
        let idx = *self.slots.next()?;
        Some(self.handle(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<ScreenId> {
        let idx = *self.slots.next_back()?;
        Some(self.handle(idx))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}
