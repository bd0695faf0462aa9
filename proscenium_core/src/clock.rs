// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time and per-frame elapsed time.
//!
//! [`HostTime`] is a point in time in platform-native monotonic ticks
//! (e.g. `mach_absolute_time`, `QueryPerformanceCounter`, or plain
//! nanoseconds). [`Timebase`] carries the rational ticks-to-nanoseconds
//! factor. [`FrameClock`] turns the stream of per-frame timestamps a host
//! loop observes into the elapsed [`Duration`] that transitions consume.

use core::fmt;
use core::time::Duration;

/// A point in time expressed as platform-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the number of ticks between `self` and an earlier time, or zero
    /// if `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_ticks_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
///
/// `nanoseconds = ticks * numer / denom`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// A timebase where ticks are already nanoseconds (1:1).
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Creates a new timebase with the given numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(denom != 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let wide = ticks as u128 * self.numer as u128 / self.denom as u128;
        wide as u64
    }

    /// Converts a tick count to a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn ticks_to_duration(self, ticks: u64) -> Duration {
        Duration::from_nanos(self.ticks_to_nanos(ticks))
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

/// Produces the elapsed time between successive frames.
///
/// The first call to [`tick`](Self::tick) reports [`Duration::ZERO`], since
/// there is no previous frame. A timestamp earlier than the previous one
/// also reports zero rather than going negative.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    timebase: Timebase,
    last: Option<HostTime>,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock that interprets timestamps with `timebase`.
    #[must_use]
    pub const fn new(timebase: Timebase) -> Self {
        Self {
            timebase,
            last: None,
            frame_index: 0,
        }
    }

    /// Records a new frame at `now` and returns the time since the previous
    /// frame.
    pub fn tick(&mut self, now: HostTime) -> Duration {
        let elapsed = match self.last {
            Some(last) => self
                .timebase
                .ticks_to_duration(now.saturating_ticks_since(last)),
            None => Duration::ZERO,
        };
        if self.last.is_some() {
            self.frame_index += 1;
        }
        self.last = Some(now);
        elapsed
    }

    /// Returns the index of the most recent frame (0 for the first).
    #[inline]
    #[must_use]
    pub const fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Returns the timestamp of the most recent frame, if any.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<HostTime> {
        self.last
    }

    /// Returns the timebase used for conversions.
    #[inline]
    #[must_use]
    pub const fn timebase(&self) -> Timebase {
        self.timebase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_style_timebase() {
        // Typical ARM Mac: 125/3 (ticks run at 24 MHz)
        let tb = Timebase::new(125, 3);
        assert_eq!(tb.ticks_to_nanos(24_000_000), 1_000_000_000, "24 MHz -> 1s");
        assert_eq!(tb.ticks_to_duration(24_000_000), Duration::from_secs(1));
    }

    #[test]
    fn overflow_safe_conversion() {
        let tb = Timebase::new(125, 3);
        // Should not panic; result is approximate but deterministic.
        let _nanos = tb.ticks_to_nanos(u64::MAX / 2);
    }

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new(Timebase::NANOS);
        assert_eq!(clock.tick(HostTime(5_000)), Duration::ZERO);
        assert_eq!(clock.frame_index(), 0);
        assert_eq!(clock.last(), Some(HostTime(5_000)));
    }

    #[test]
    fn elapsed_between_frames() {
        let mut clock = FrameClock::new(Timebase::NANOS);
        clock.tick(HostTime(1_000_000_000));
        let elapsed = clock.tick(HostTime(1_016_666_667));
        assert_eq!(elapsed, Duration::from_nanos(16_666_667));
        assert_eq!(clock.frame_index(), 1);
    }

    #[test]
    fn backwards_time_saturates() {
        let mut clock = FrameClock::new(Timebase::NANOS);
        clock.tick(HostTime(2_000));
        assert_eq!(clock.tick(HostTime(1_000)), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "timebase denominator must not be zero")]
    fn zero_denominator_panics() {
        let _ = Timebase::new(1, 0);
    }
}
