// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap state helper: distinguish single taps from double taps.
//!
//! A release that could still be the first half of a double tap is held as
//! *pending*. It is released as a single tap once the double-tap window has
//! passed, either by [`TapState::flush`] or by the next press.
//!
//! ## Usage
//!
//! 1) Call [`TapState::on_down`] on press. It may hand back an older pending tap.
//! 2) Forward moves to [`TapState::on_move`]; travelling past the slop cancels the tap.
//! 3) Call [`TapState::on_up`] on release.
//! 4) Call [`TapState::flush`] on each frame or timer tick to release expired taps.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use easel_event_state::tap::{TapConfig, TapResult, TapState};
//!
//! let mut taps = TapState::new(TapConfig::default());
//!
//! taps.on_down(Point::new(10.0, 10.0), 0);
//! assert_eq!(taps.on_up(Point::new(11.0, 10.0), 50), TapResult::Pending);
//!
//! // Nothing else happens; the window closes and the tap is delivered.
//! assert_eq!(taps.flush(400), Some(Point::new(11.0, 10.0)));
//!
//! // Two quick taps become a double tap.
//! taps.on_down(Point::new(10.0, 10.0), 1000);
//! taps.on_up(Point::new(10.0, 10.0), 1040);
//! taps.on_down(Point::new(12.0, 10.0), 1150);
//! assert_eq!(
//!     taps.on_up(Point::new(12.0, 10.0), 1190),
//!     TapResult::DoubleTap(Point::new(12.0, 10.0))
//! );
//! ```

use kurbo::Point;

/// Tolerances for tap recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TapConfig {
    /// Maximum pointer travel, in screen units, for a press/release to count as a tap.
    pub slop: f64,
    /// Maximum time between the first release and the second release of a double tap.
    pub double_tap_timeout_ms: u64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            slop: 8.0,
            double_tap_timeout_ms: 300,
        }
    }
}

/// Outcome of a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapResult {
    /// The release is not a tap (no press, or the pointer travelled too far).
    None,
    /// A tap was recognized and is being held in case it becomes a double tap.
    Pending,
    /// The release completed a double tap at the given position.
    DoubleTap(Point),
}

#[derive(Clone, Copy, Debug)]
struct Stamp {
    pos: Point,
    time_ms: u64,
}

/// Tracks press/release pairs for tap and double-tap recognition.
#[derive(Clone, Debug, Default)]
pub struct TapState {
    config: TapConfig,
    down: Option<Stamp>,
    pending: Option<Stamp>,
}

impl TapState {
    /// Creates a tap tracker with the given tolerances.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            down: None,
            pending: None,
        }
    }

    /// Returns the configured tolerances.
    #[must_use]
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Records a press.
    ///
    /// Returns a previously pending tap if this press can no longer turn it
    /// into a double tap (the window has expired or the press is too far away).
    pub fn on_down(&mut self, pos: Point, time_ms: u64) -> Option<Point> {
        let released = match self.pending {
            Some(p) if self.expired(p, time_ms) || !self.within_slop(p.pos, pos) => {
                self.pending = None;
                Some(p.pos)
            }
            _ => None,
        };
        self.down = Some(Stamp { pos, time_ms });
        released
    }

    /// Records pointer travel while pressed. Moving past the slop cancels the press.
    pub fn on_move(&mut self, pos: Point) {
        if let Some(down) = self.down {
            if !self.within_slop(down.pos, pos) {
                self.down = None;
            }
        }
    }

    /// Records a release.
    pub fn on_up(&mut self, pos: Point, time_ms: u64) -> TapResult {
        let Some(down) = self.down.take() else {
            return TapResult::None;
        };
        if !self.within_slop(down.pos, pos) {
            return TapResult::None;
        }
        match self.pending.take() {
            Some(first) if !self.expired(first, time_ms) && self.within_slop(first.pos, pos) => {
                TapResult::DoubleTap(pos)
            }
            _ => {
                self.pending = Some(Stamp { pos, time_ms });
                TapResult::Pending
            }
        }
    }

    /// Releases the pending tap once the double-tap window has passed.
    pub fn flush(&mut self, now_ms: u64) -> Option<Point> {
        match self.pending {
            Some(p) if self.expired(p, now_ms) && self.down.is_none() => {
                self.pending = None;
                Some(p.pos)
            }
            _ => None,
        }
    }

    /// Drops the current press, for example when a second pointer or a drag
    /// turns the interaction into a transform gesture.
    ///
    /// A pending tap can no longer become a double tap, so it is released
    /// and returned for the caller to deliver.
    pub fn cancel(&mut self) -> Option<Point> {
        self.down = None;
        self.pending.take().map(|p| p.pos)
    }

    /// Returns `true` while a tap is held waiting for a possible second tap.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn expired(&self, stamp: Stamp, now_ms: u64) -> bool {
        now_ms.saturating_sub(stamp.time_ms) > self.config.double_tap_timeout_ms
    }

    fn within_slop(&self, a: Point, b: Point) -> bool {
        (a - b).hypot2() <= self.config.slop * self.config.slop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taps() -> TapState {
        TapState::new(TapConfig::default())
    }

    #[test]
    fn release_without_press_is_not_a_tap() {
        let mut t = taps();
        assert_eq!(t.on_up(Point::new(0.0, 0.0), 10), TapResult::None);
        assert!(!t.is_pending());
    }

    #[test]
    fn travel_past_slop_cancels() {
        let mut t = taps();
        t.on_down(Point::new(0.0, 0.0), 0);
        t.on_move(Point::new(20.0, 0.0));
        assert_eq!(t.on_up(Point::new(0.0, 0.0), 10), TapResult::None);

        t.on_down(Point::new(0.0, 0.0), 100);
        assert_eq!(t.on_up(Point::new(9.0, 0.0), 110), TapResult::None);
    }

    #[test]
    fn flush_waits_for_window() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), 0);
        assert_eq!(t.on_up(Point::new(5.0, 5.0), 20), TapResult::Pending);
        assert_eq!(t.flush(200), None);
        assert_eq!(t.flush(321), Some(Point::new(5.0, 5.0)));
        assert_eq!(t.flush(1000), None);
    }

    #[test]
    fn slow_second_press_releases_first_tap() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), 0);
        t.on_up(Point::new(5.0, 5.0), 20);
        assert_eq!(t.on_down(Point::new(5.0, 5.0), 500), Some(Point::new(5.0, 5.0)));
        assert_eq!(t.on_up(Point::new(5.0, 5.0), 520), TapResult::Pending);
    }

    #[test]
    fn distant_second_press_releases_first_tap() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), 0);
        t.on_up(Point::new(5.0, 5.0), 20);
        assert_eq!(t.on_down(Point::new(100.0, 5.0), 60), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn double_tap_is_recognized_and_consumed() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), 0);
        t.on_up(Point::new(5.0, 5.0), 20);
        assert_eq!(t.on_down(Point::new(6.0, 5.0), 120), None);
        assert_eq!(
            t.on_up(Point::new(6.0, 5.0), 150),
            TapResult::DoubleTap(Point::new(6.0, 5.0))
        );
        assert!(!t.is_pending());
        assert_eq!(t.flush(10_000), None);
    }

    #[test]
    fn cancel_releases_pending_tap() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), 0);
        t.on_up(Point::new(5.0, 5.0), 20);
        t.on_down(Point::new(6.0, 5.0), 100);
        assert_eq!(t.cancel(), Some(Point::new(5.0, 5.0)));
        assert!(!t.is_pending());
        assert_eq!(t.on_up(Point::new(6.0, 5.0), 120), TapResult::None);
        assert_eq!(t.flush(10_000), None);
    }

    #[test]
    fn cancel_without_pending_releases_nothing() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), 0);
        assert_eq!(t.cancel(), None);
        assert_eq!(t.on_up(Point::new(5.0, 5.0), 20), TapResult::None);
    }
}
