// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform gesture helper: reduce multi-pointer movement to pan/zoom/rotate deltas.
//!
//! Each move event is compared with the previous positions of the same set of
//! pointers and reduced to a [`TransformDelta`]:
//!
//! - `centroid`: mean position of the active pointers after the move.
//! - `pan`: movement of the centroid.
//! - `zoom`: ratio of the mean pointer distance from the centroid (`1.0` for a
//!   single pointer).
//! - `rotation`: change in the angle of the line through the first two
//!   pointers, in degrees (`0.0` for a single pointer).
//!
//! Nothing is reported until the gesture has moved past the touch slop, so a
//! shaky press is not mistaken for a pan.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use easel_event_state::transform::{TransformGestureConfig, TransformGestureState};
//!
//! let mut gesture = TransformGestureState::new(TransformGestureConfig { touch_slop: 0.0 });
//! gesture.pointer_down(1, Point::new(0.0, 0.0));
//! gesture.pointer_down(2, Point::new(100.0, 0.0));
//!
//! // Spread the second finger: zoom 2x around a centroid that moves right.
//! let delta = gesture.pointer_move(2, Point::new(200.0, 0.0)).unwrap();
//! assert_eq!(delta.pan.x, 50.0);
//! assert_eq!(delta.zoom, 2.0);
//! assert_eq!(delta.rotation, 0.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Application-defined pointer identifier.
pub type PointerId = u64;

/// Tolerances for transform gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformGestureConfig {
    /// Motion, in screen units, before a gesture starts reporting deltas.
    pub touch_slop: f64,
}

impl Default for TransformGestureConfig {
    fn default() -> Self {
        Self { touch_slop: 8.0 }
    }
}

/// One incremental step of a transform gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformDelta {
    /// Mean pointer position after this step.
    pub centroid: Point,
    /// Centroid movement during this step.
    pub pan: Vec2,
    /// Multiplicative zoom for this step.
    pub zoom: f64,
    /// Rotation for this step, in degrees, within `(-180, 180]`.
    pub rotation: f64,
}

/// Tracks active pointers and turns their movement into [`TransformDelta`]s.
#[derive(Clone, Debug)]
pub struct TransformGestureState {
    config: TransformGestureConfig,
    pointers: SmallVec<[(PointerId, Point); 4]>,
    past_slop: bool,
    pan_motion: Vec2,
    zoom_motion: f64,
    rotation_motion: f64,
}

impl TransformGestureState {
    /// Creates a tracker with the given tolerances.
    #[must_use]
    pub fn new(config: TransformGestureConfig) -> Self {
        Self {
            config,
            pointers: SmallVec::new(),
            past_slop: false,
            pan_motion: Vec2::ZERO,
            zoom_motion: 1.0,
            rotation_motion: 0.0,
        }
    }

    /// Registers a pressed pointer, or moves it without reporting a delta if
    /// it is already tracked.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) {
        match self.pointers.iter_mut().find(|(p, _)| *p == id) {
            Some(entry) => entry.1 = pos,
            None => self.pointers.push((id, pos)),
        }
    }

    /// Forgets a released pointer. Releasing the last pointer ends the gesture.
    pub fn pointer_up(&mut self, id: PointerId) {
        self.pointers.retain(|(p, _)| *p != id);
        if self.pointers.is_empty() {
            self.reset_motion();
        }
    }

    /// Drops all pointers and ends the gesture.
    pub fn cancel(&mut self) {
        self.pointers.clear();
        self.reset_motion();
    }

    /// Returns the number of pointers currently pressed.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` once the gesture has moved past the touch slop.
    #[must_use]
    pub fn is_transforming(&self) -> bool {
        self.past_slop
    }

    /// Moves a tracked pointer and returns the resulting delta.
    ///
    /// Returns `None` for untracked pointers and while still within the
    /// touch slop.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> Option<TransformDelta> {
        let index = self.pointers.iter().position(|(p, _)| *p == id)?;
        let before: SmallVec<[Point; 4]> = self.pointers.iter().map(|(_, p)| *p).collect();
        self.pointers[index].1 = pos;
        let after: SmallVec<[Point; 4]> = self.pointers.iter().map(|(_, p)| *p).collect();

        let centroid_before = centroid(&before);
        let centroid_after = centroid(&after);
        let span_before = mean_span(&before, centroid_before);
        let span_after = mean_span(&after, centroid_after);

        let pan = centroid_after - centroid_before;
        let zoom = if after.len() > 1 && span_before > 0.0 {
            span_after / span_before
        } else {
            1.0
        };
        let rotation = if after.len() > 1 {
            normalize_degrees(
                ((after[1] - after[0]).atan2() - (before[1] - before[0]).atan2()).to_degrees(),
            )
        } else {
            0.0
        };

        if !self.past_slop {
            self.pan_motion += pan;
            self.zoom_motion *= zoom;
            self.rotation_motion += rotation;
            let zoom_travel = (1.0 - self.zoom_motion).abs() * span_after;
            let rotation_travel = self.rotation_motion.to_radians().abs() * span_after;
            let slop = self.config.touch_slop;
            self.past_slop =
                self.pan_motion.hypot() > slop || zoom_travel > slop || rotation_travel > slop;
            if !self.past_slop {
                return None;
            }
        }

        Some(TransformDelta {
            centroid: centroid_after,
            pan,
            zoom,
            rotation,
        })
    }

    fn reset_motion(&mut self) {
        self.past_slop = false;
        self.pan_motion = Vec2::ZERO;
        self.zoom_motion = 1.0;
        self.rotation_motion = 0.0;
    }
}

impl Default for TransformGestureState {
    fn default() -> Self {
        Self::new(TransformGestureConfig::default())
    }
}

fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    (sum / points.len() as f64).to_point()
}

fn mean_span(points: &[Point], center: Point) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|p| (*p - center).hypot()).sum();
    total / points.len() as f64
}

fn normalize_degrees(degrees: f64) -> f64 {
    if degrees > 180.0 {
        degrees - 360.0
    } else if degrees <= -180.0 {
        degrees + 360.0
    } else {
        degrees
    }
}
