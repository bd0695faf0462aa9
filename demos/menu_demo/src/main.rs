// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated frame loop that exercises the screen stack.
//!
//! Builds a background, a main menu, a gameplay screen, and a pause popup,
//! then feeds a scripted key sequence through ~60 Hz synthetic frames. Trace
//! events go to a [`PrettyPrintSink`] on stdout, and every half second the
//! recorded draw commands are printed.

use core::time::Duration;

use proscenium_core::backend::{Color, DrawCommand, FontId, RecordingRenderer, Renderer};
use proscenium_core::clock::{FrameClock, HostTime, Timebase};
use proscenium_core::frame::FrameContext;
use proscenium_core::screen::{DrawCx, Screen, ScreenCx, ScreenId, ScreenOptions, ScreenStore};
use proscenium_core::transition::{ScreenState, TransitionConfig};

use kurbo::{Point, Rect};
use proscenium_debug::pretty::PrettyPrintSink;

const MAX_FRAMES: u64 = 600;
/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 480.0);
const FONT: FontId = FontId(0);
const HIGHLIGHT: Color = Color::rgb(255, 210, 0);

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    Up,
    Down,
    Enter,
    Escape,
}

/// The per-frame input snapshot.
#[derive(Clone, Copy, Debug, Default)]
struct Input {
    pressed: Option<Key>,
}

/// Frame number and key for each scripted press.
const SCRIPT: &[(u64, Key)] = &[
    (40, Key::Down),
    (50, Key::Up),
    (60, Key::Enter),
    (120, Key::Escape),
    (150, Key::Enter),
    (200, Key::Escape),
    (230, Key::Down),
    (240, Key::Enter),
    (300, Key::Down),
    (305, Key::Down),
    (320, Key::Enter),
];

/// Frames during which the window is unfocused.
const UNFOCUSED: core::ops::Range<u64> = 125..140;

fn input_for(frame_index: u64) -> Input {
    Input {
        pressed: SCRIPT
            .iter()
            .find(|(at, _)| *at == frame_index)
            .map(|&(_, key)| key),
    }
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

fn transition(on_ms: u64, off_ms: u64) -> TransitionConfig {
    TransitionConfig::new(Duration::from_millis(on_ms), Duration::from_millis(off_ms))
}

/// Full-screen backdrop behind the menus. Persistent, so menus do not hide it.
struct Background;

impl Screen<Input> for Background {
    fn draw(&self, cx: &DrawCx<'_, Input>, renderer: &mut dyn Renderer) {
        renderer.fill_rect(cx.viewport(), Color::rgb(20, 24, 40).with_alpha(cx.alpha()));
        renderer.draw_text(
            FONT,
            "~ proscenium ~",
            Point::new(320.0, 40.0),
            Color::WHITE.with_alpha(cx.alpha()),
        );
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Play,
    Options,
    Resume,
    QuitToMenu,
    ExitGame,
}

/// A vertical list of entries navigated with up, down, and enter.
struct Menu {
    title: &'static str,
    entries: Vec<(&'static str, Action)>,
    selected: usize,
    dims_background: bool,
}

impl Menu {
    fn main() -> Self {
        Self {
            title: "Main Menu",
            entries: vec![
                ("Play", Action::Play),
                ("Options", Action::Options),
                ("Exit", Action::ExitGame),
            ],
            selected: 0,
            dims_background: false,
        }
    }

    fn pause() -> Self {
        Self {
            title: "Paused",
            entries: vec![("Resume", Action::Resume), ("Quit", Action::QuitToMenu)],
            selected: 0,
            dims_background: true,
        }
    }

    fn activate(&self, cx: &mut ScreenCx<'_, Input>) {
        match self.entries[self.selected].1 {
            Action::Play => {
                let game = cx.create_screen_with(
                    ScreenOptions::named("gameplay").with_transition(transition(500, 500)),
                    Gameplay::default(),
                );
                if cx.add_sibling(game).is_ok() {
                    cx.exit();
                }
            }
            Action::Options => {}
            Action::Resume => cx.exit(),
            Action::QuitToMenu => {
                let Some(parent) = cx.parent() else {
                    return;
                };
                let others: Vec<ScreenId> = cx
                    .store()
                    .children(parent)
                    .filter(|&id| !cx.store().is_persistent(id))
                    .collect();
                let menu = cx.create_screen_with(main_menu_options(), Menu::main());
                if cx.add_sibling(menu).is_ok() {
                    for id in others {
                        cx.exit_screen(id);
                    }
                }
            }
            Action::ExitGame => {
                if let Some(parent) = cx.parent() {
                    let all: Vec<ScreenId> = cx.store().children(parent).collect();
                    for id in all {
                        cx.exit_screen(id);
                    }
                }
            }
        }
    }
}

fn main_menu_options() -> ScreenOptions {
    ScreenOptions::named("main-menu").with_transition(transition(500, 500))
}

impl Screen<Input> for Menu {
    fn handle_input(&mut self, cx: &mut ScreenCx<'_, Input>, input: &Input) {
        match input.pressed {
            Some(Key::Up) => {
                self.selected = (self.selected + self.entries.len() - 1) % self.entries.len();
            }
            Some(Key::Down) => self.selected = (self.selected + 1) % self.entries.len(),
            Some(Key::Enter) => self.activate(cx),
            Some(Key::Escape) if self.dims_background => cx.exit(),
            Some(Key::Escape) | None => {}
        }
    }

    fn draw(&self, cx: &DrawCx<'_, Input>, renderer: &mut dyn Renderer) {
        if self.dims_background {
            cx.fade_to_black(renderer, cx.alpha() / 3 * 2);
        }

        // Slide in from the left, out to the right.
        let offset = cx.position() * cx.position() * 256.0;
        let x = if cx.state() == ScreenState::TransitioningOn {
            100.0 - offset
        } else {
            100.0 + offset
        };
        let alpha = cx.alpha();
        renderer.draw_text(FONT, self.title, Point::new(x, 120.0), Color::WHITE.with_alpha(alpha));
        for (i, (label, _)) in self.entries.iter().enumerate() {
            let color = if i == self.selected && cx.store().is_active(cx.id()) {
                HIGHLIGHT
            } else {
                Color::WHITE
            };
            let y = 180.0 + 40.0 * i as f64;
            renderer.draw_text(FONT, label, Point::new(x, y), color.with_alpha(alpha));
        }
    }
}

/// The "game". Fades toward black while a popup holds focus.
#[derive(Default)]
struct Gameplay {
    ticks: u64,
    pause_alpha: f64,
}

impl Screen<Input> for Gameplay {
    fn update(&mut self, cx: &mut ScreenCx<'_, Input>) {
        let step = cx.elapsed().as_secs_f64() * 2.0;
        self.pause_alpha = if cx.other_has_focus() {
            (self.pause_alpha + step).min(1.0)
        } else {
            (self.pause_alpha - step).max(0.0)
        };
        if cx.is_active() {
            self.ticks += 1;
        }
    }

    fn handle_input(&mut self, cx: &mut ScreenCx<'_, Input>, input: &Input) {
        if input.pressed == Some(Key::Escape) {
            let pause = cx.create_screen_with(
                ScreenOptions::named("pause")
                    .popup()
                    .with_transition(transition(200, 200)),
                Menu::pause(),
            );
            let _ = cx.add_sibling(pause);
        }
    }

    fn draw(&self, cx: &DrawCx<'_, Input>, renderer: &mut dyn Renderer) {
        renderer.draw_text(
            FONT,
            &format!("playing: {} ticks", self.ticks),
            Point::new(40.0, 440.0),
            Color::WHITE,
        );
        let fade = f64::from(cx.fade_alpha()).max(self.pause_alpha * 128.0);
        if fade > 0.0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "fade is within 0.0..=255.0"
            )]
            let fade = fade as u8;
            cx.fade_to_black(renderer, fade);
        }
    }
}

// ---------------------------------------------------------------------------
// Frame loop
// ---------------------------------------------------------------------------

fn print_frame(frame_index: u64, store: &ScreenStore<Input>, root: ScreenId, r: &RecordingRenderer) {
    println!("--- frame {frame_index} ---");
    for id in store.children(root) {
        println!(
            "  {:<10} {:?} alpha={} active={}",
            store.name(id),
            store.state(id),
            store.transition_alpha(id),
            store.is_active(id),
        );
    }
    for cmd in r.commands() {
        match cmd {
            DrawCommand::FillRect { color, .. } => println!("  fill {color:?}"),
            DrawCommand::Text {
                text,
                origin,
                color,
                ..
            } => println!("  text {text:?} at ({:.0}, {:.0}) {color:?}", origin.x, origin.y),
        }
    }
}

fn main() {
    let mut store = ScreenStore::<Input>::new();
    store.set_trace_sink(Box::new(PrettyPrintSink::new(Box::new(std::io::stdout()))));

    let root = store.create_screen(ScreenOptions::named("root"));
    let background = store.create_screen_with(
        ScreenOptions::named("background")
            .persistent()
            .with_transition(transition(250, 250)),
        Background,
    );
    let menu = store.create_screen_with(main_menu_options(), Menu::main());
    for id in [background, menu] {
        if let Err(err) = store.add_child(root, id) {
            eprintln!("failed to build the screen stack: {err}");
            return;
        }
    }

    let mut clock = FrameClock::new(Timebase::NANOS);
    let mut renderer = RecordingRenderer::new();
    let mut now_ticks: u64 = 1_000_000_000; // start at 1s

    while clock.frame_index() < MAX_FRAMES && store.child_count(root) > 0 {
        let elapsed = clock.tick(HostTime(now_ticks));
        let frame_index = clock.frame_index();
        let input = input_for(frame_index);
        let frame = FrameContext::new(frame_index, elapsed, &input)
            .with_app_active(!UNFOCUSED.contains(&frame_index));

        store.update(root, &frame);

        renderer.clear();
        store.draw(root, &mut renderer, VIEWPORT);
        if frame_index % 30 == 0 {
            print_frame(frame_index, &store, root, &renderer);
        }

        now_ticks += REFRESH_INTERVAL_NS;
    }

    println!(
        "finished after {} frames with {} screens alive",
        clock.frame_index(),
        store.alive_count(),
    );
}
