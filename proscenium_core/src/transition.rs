// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-screen transition state machine.
//!
//! Every screen carries a [`Transition`]: a position in `[0.0, 1.0]` plus a
//! discrete [`ScreenState`] tag. Position `0.0` means fully on (active and
//! opaque) and `1.0` means fully off. The mapping is deliberately inverted:
//! the position tracks *how far off* a screen is, so a freshly created screen
//! starts at `1.0` and animates toward `0.0`.
//!
//! Once per frame the owning traversal calls [`Transition::resolve`], which
//! picks a direction from the screen's situation, in priority order:
//!
//! 1. **Exiting**: animate off; report [`Resolution::Exited`] on completion
//!    so the owner can detach the screen for good.
//! 2. **Covered and not persistent**: animate off; settle in
//!    [`ScreenState::Hidden`].
//! 3. **Otherwise**: animate on; settle in [`ScreenState::Active`].

use core::time::Duration;

/// Discrete transition state of a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// Animating toward fully on.
    TransitioningOn,
    /// Fully on.
    Active,
    /// Animating toward fully off.
    TransitioningOff,
    /// Fully off. Still attached and still updated, but never drawn.
    Hidden,
}

impl ScreenState {
    /// Returns whether a screen in this state may claim input focus and
    /// cover the screens beneath it.
    #[inline]
    #[must_use]
    pub const fn is_input_eligible(self) -> bool {
        matches!(self, Self::TransitioningOn | Self::Active)
    }

    /// Returns whether a screen in this state is drawn.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Transition durations for a screen.
///
/// A zero duration makes the corresponding transition instantaneous: it
/// completes on the first frame it is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransitionConfig {
    /// Time to animate from fully off to fully on.
    pub on: Duration,
    /// Time to animate from fully on to fully off.
    pub off: Duration,
}

impl TransitionConfig {
    /// Both transitions complete immediately.
    pub const INSTANT: Self = Self {
        on: Duration::ZERO,
        off: Duration::ZERO,
    };

    /// Creates a configuration with the given on and off durations.
    #[inline]
    #[must_use]
    pub const fn new(on: Duration, off: Duration) -> Self {
        Self { on, off }
    }

    /// Creates a configuration that uses `duration` in both directions.
    #[inline]
    #[must_use]
    pub const fn symmetric(duration: Duration) -> Self {
        Self {
            on: duration,
            off: duration,
        }
    }

    /// Creates a configuration from durations in seconds.
    ///
    /// Negative and NaN values are treated as zero (instantaneous); values too
    /// large to represent saturate to [`Duration::MAX`].
    #[must_use]
    pub fn from_secs_f64(on: f64, off: f64) -> Self {
        Self {
            on: secs_or_zero(on),
            off: secs_or_zero(off),
        }
    }

    /// Returns the duration that drives a transition in `direction`.
    #[inline]
    #[must_use]
    pub const fn duration(&self, direction: Direction) -> Duration {
        match direction {
            Direction::On => self.on,
            Direction::Off => self.off,
        }
    }
}

fn secs_or_zero(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Direction of travel for [`Transition::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward position `0.0` (fully on).
    On,
    /// Toward position `1.0` (fully off).
    Off,
}

impl Direction {
    /// Returns the sign applied to the position delta.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::On => -1.0,
            Self::Off => 1.0,
        }
    }
}

/// Outcome of a single [`Transition::advance`] step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Progress {
    /// The boundary in the direction of travel has not been reached.
    InProgress,
    /// The boundary was reached and the position clamped to it.
    Finished,
}

/// Outcome of a per-frame [`Transition::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The screen is still animating.
    InProgress,
    /// The screen settled in [`ScreenState::Active`] or
    /// [`ScreenState::Hidden`].
    Settled,
    /// An exiting screen finished animating off and must be detached.
    Exited,
}

/// Transition position and state for one screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    position: f64,
    state: ScreenState,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

impl Transition {
    /// Creates a transition that starts fully off and is animating on.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 1.0,
            state: ScreenState::TransitioningOn,
        }
    }

    /// Returns the current position in `[0.0, 1.0]` (`0.0` = fully on).
    #[inline]
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Returns the current state tag.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> ScreenState {
        self.state
    }

    /// Returns the opacity for drawing the screen: `255` at position `0.0`
    /// and `0` at position `1.0`.
    #[inline]
    #[must_use]
    pub fn alpha(&self) -> u8 {
        unit_to_u8(1.0 - self.position)
    }

    /// Returns how far off the screen is, scaled to `0..=255`: `0` at
    /// position `0.0` and `255` at position `1.0`.
    ///
    /// This is the amount used for fade-to-black overlays.
    #[inline]
    #[must_use]
    pub fn fade_alpha(&self) -> u8 {
        unit_to_u8(self.position)
    }

    /// Moves the position toward the boundary in `direction`.
    ///
    /// The step is `elapsed / duration`, or a full step when `duration` is
    /// zero. Returns [`Progress::Finished`] once the boundary is reached, with
    /// the position clamped onto it.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        duration: Duration,
        direction: Direction,
    ) -> Progress {
        let delta = if duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / duration.as_secs_f64()
        };

        self.position += delta * direction.sign();

        let finished = match direction {
            Direction::On => self.position <= 0.0,
            Direction::Off => self.position >= 1.0,
        };
        self.position = self.position.clamp(0.0, 1.0);

        if finished {
            Progress::Finished
        } else {
            Progress::InProgress
        }
    }

    /// Advances one frame according to the screen's situation and updates the
    /// state tag.
    pub fn resolve(
        &mut self,
        elapsed: Duration,
        config: &TransitionConfig,
        situation: Situation,
    ) -> Resolution {
        if situation.exiting {
            self.state = ScreenState::TransitioningOff;
            return match self.advance(elapsed, config.off, Direction::Off) {
                Progress::InProgress => Resolution::InProgress,
                Progress::Finished => Resolution::Exited,
            };
        }

        if situation.covered && !situation.persistent {
            match self.advance(elapsed, config.off, Direction::Off) {
                Progress::InProgress => {
                    self.state = ScreenState::TransitioningOff;
                    Resolution::InProgress
                }
                Progress::Finished => {
                    self.state = ScreenState::Hidden;
                    Resolution::Settled
                }
            }
        } else {
            match self.advance(elapsed, config.on, Direction::On) {
                Progress::InProgress => {
                    self.state = ScreenState::TransitioningOn;
                    Resolution::InProgress
                }
                Progress::Finished => {
                    self.state = ScreenState::Active;
                    Resolution::Settled
                }
            }
        }
    }
}

/// The inputs to [`Transition::resolve`] for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Situation {
    /// The screen has been asked to exit.
    pub exiting: bool,
    /// A non-popup, input-eligible screen sits above this one.
    pub covered: bool,
    /// The screen ignores being covered.
    pub persistent: bool,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to 0..=255 before the cast"
)]
fn unit_to_u8(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
