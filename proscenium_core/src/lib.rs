// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and screen tree for stacked, transitioning UI screens.
//!
//! `proscenium_core` manages a tree of screens (menus, popups, gameplay
//! layers, overlays) that animate on and off, decide among themselves which
//! one receives input, and draw bottom to top. It is `no_std` compatible
//! (with `alloc`) and uses array-based struct-of-arrays storage with index
//! handles.
//!
//! # Architecture
//!
//! The crate is organized around a frame loop driven by the host
//! application:
//!
//! ```text
//!   HostTime ──► FrameClock::tick() ──► elapsed
//!                                          │
//!   input, app focus ──────────────────────┤
//!                                          ▼
//!                                    FrameContext
//!                                          │
//!                                          ▼
//!   ScreenStore::update(root) ──► transitions, focus, cover, hooks
//!                                          │
//!                                          ▼
//!   ScreenStore::draw(root) ──► Screen::draw ──► Renderer
//! ```
//!
//! **[`screen`]**: Struct-of-arrays screen tree with generational handles,
//! the update and draw passes, and the [`Screen`](screen::Screen) hook trait.
//!
//! **[`transition`]**: The per-screen transition state machine.
//!
//! **[`frame`]**: [`FrameContext`](frame::FrameContext), the explicit
//! per-frame inputs.
//!
//! **[`backend`]**: The [`Renderer`](backend::Renderer) trait that drawing
//! backends implement.
//!
//! **[`clock`]**: [`FrameClock`](clock::FrameClock) for turning host
//! timestamps into frame deltas.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! instrumentation, with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use proscenium_core::frame::FrameContext;
//! use proscenium_core::screen::{ScreenOptions, ScreenStore};
//! use proscenium_core::transition::ScreenState;
//!
//! let mut store = ScreenStore::<()>::new();
//! let root = store.create_screen(ScreenOptions::named("root"));
//! let game = store.create_screen(ScreenOptions::named("game"));
//! let pause = store.create_screen(ScreenOptions::named("pause").popup());
//! store.add_child(root, game).unwrap();
//! store.add_child(root, pause).unwrap();
//!
//! let stats = store.update(root, &FrameContext::new(0, Duration::ZERO, &()));
//! assert_eq!(stats.focused, Some(pause));
//! assert_eq!(store.state(game), ScreenState::Active);
//! assert!(!store.is_active(game));
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod clock;
pub mod error;
pub mod frame;
pub mod screen;
pub mod trace;
pub mod transition;
