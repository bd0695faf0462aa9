// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen tree data model.
//!
//! A *screen* is a node in a stack-like tree of UI layers. Each screen has:
//!
//! - An identity ([`ScreenId`]), a generational handle that becomes stale when
//!   the screen is destroyed, preventing use-after-free bugs at the API level.
//! - Topology: a parent and an ordered child list. The last child is the top
//!   of the stack.
//! - A [`Transition`](crate::transition::Transition) that animates the screen
//!   on and off, plus its [`popup`](ScreenStore::is_popup),
//!   [`persistent`](ScreenStore::is_persistent), and
//!   [`exiting`](ScreenStore::is_exiting) flags.
//! - An optional [`Screen`] behavior whose hooks run during the
//!   [`update`](ScreenStore::update) and [`draw`](ScreenStore::draw) passes.
//!
//! There is no separate manager type. Any screen can host children, and
//! calling `update` or `draw` on a screen runs the stack algorithm over its
//! children. Applications usually create one root screen without a behavior
//! and drive it once per frame.
//!
//! # Focus and cover
//!
//! The update pass walks a host's children from the top down. The first
//! input-eligible child receives the frame's input; every child below it sees
//! `other_has_focus`. Each input-eligible child that is not a popup covers the
//! children below it, which then transition off unless they are persistent.

mod context;
mod draw;
mod id;
mod store;
mod traverse;
mod update;

pub use context::{DrawCx, Screen, ScreenCx};
pub use id::{INVALID, ScreenId};
pub use store::{ScreenOptions, ScreenStore};
pub use traverse::Children;
pub use update::UpdateStats;
