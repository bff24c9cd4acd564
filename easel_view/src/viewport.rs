// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Zoom range and pan slack for a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportLimits {
    /// Smallest allowed canvas scale.
    pub min_scale: f64,
    /// Largest allowed canvas scale.
    pub max_scale: f64,
    /// Empty space, in screen units, that may be exposed past each canvas edge.
    pub pan_margin: f64,
}

impl ViewportLimits {
    /// Limits used when nothing else is configured: scale `[1.0, 4.0]`, margin `50`.
    pub const DEFAULT: Self = Self {
        min_scale: 1.0,
        max_scale: 4.0,
        pan_margin: 50.0,
    };

    /// Creates limits, normalizing the range so that `min_scale <= max_scale`.
    ///
    /// A NaN bound takes the value of the other bound.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64, pan_margin: f64) -> Self {
        Self {
            min_scale: min_scale.min(max_scale),
            max_scale: min_scale.max(max_scale),
            pan_margin,
        }
    }

    /// Clamps `scale` into the configured range.
    ///
    /// Reversed fields are ordered first. NaN resolves to the lower bound;
    /// with two NaN bounds the range is unbounded and NaN becomes `1.0`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let lo = self.min_scale.min(self.max_scale);
        let hi = self.min_scale.max(self.max_scale);
        if lo.is_nan() {
            return if scale.is_nan() { 1.0 } else { scale };
        }
        if scale.is_nan() {
            return lo;
        }
        scale.max(lo).min(hi)
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sizes of the visible container ("box") and of the canvas centered inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewLayout {
    /// Size of the on-screen container, in screen units.
    pub box_size: Size,
    /// Unscaled size of the canvas, in canvas units.
    pub canvas_size: Size,
}

impl ViewLayout {
    /// Creates a layout from the container and canvas sizes.
    #[must_use]
    pub const fn new(box_size: Size, canvas_size: Size) -> Self {
        Self {
            box_size,
            canvas_size,
        }
    }

    /// Center of the container in screen space.
    #[must_use]
    pub fn box_center(&self) -> Point {
        self.box_size.to_rect().center()
    }

    /// Center of the canvas in canvas space.
    #[must_use]
    pub fn canvas_center(&self) -> Point {
        self.canvas_size.to_rect().center()
    }
}

/// One step of a viewport pinch/pan gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewGesture {
    /// Gesture centroid, measured from the container center (the frame the
    /// viewport offset lives in).
    pub centroid: Point,
    /// Pan delta in screen units.
    pub pan: Vec2,
    /// Multiplicative zoom factor for this step.
    pub zoom: f64,
}

/// Whole-canvas pan/zoom state.
///
/// The canvas is centered in its container and drawn scaled by `scale`
/// about its center, then shifted by `offset` in screen units. A tap at
/// screen point `p` (container-local) therefore lands on canvas point
/// `(p - box_center - offset) / scale + canvas_center`.
///
/// `Viewport` is a plain value: every operation returns a new viewport and
/// leaves `self` untouched, except [`Viewport::reset`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    scale: f64,
    offset: Vec2,
}

impl Viewport {
    /// Unit scale, no offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a viewport from raw parts.
    ///
    /// Values are stored as given; use [`Viewport::clamped`] to bring them
    /// within a layout's limits.
    #[must_use]
    pub const fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Returns the current canvas scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current offset in screen units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Resets to unit scale and zero offset.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns the largest allowed offset magnitude on each axis at `scale`.
    ///
    /// Per axis this is `max((canvas * scale - box) / 2 + margin, 0)`.
    #[must_use]
    pub fn max_offset(layout: &ViewLayout, limits: &ViewportLimits, scale: f64) -> Vec2 {
        let slack = |canvas: f64, container: f64| {
            ((canvas * scale - container) / 2.0 + limits.pan_margin).max(0.0)
        };
        Vec2::new(
            slack(layout.canvas_size.width, layout.box_size.width),
            slack(layout.canvas_size.height, layout.box_size.height),
        )
    }

    /// Returns this viewport with scale and offset clamped for `layout`.
    ///
    /// Use after the container or canvas is resized.
    #[must_use]
    pub fn clamped(&self, layout: &ViewLayout, limits: &ViewportLimits) -> Self {
        let scale = limits.clamp_scale(self.scale);
        Self {
            scale,
            offset: clamp_offset(self.offset, Self::max_offset(layout, limits, scale)),
        }
    }

    /// Applies one pinch/pan step, keeping the canvas point under the
    /// centroid fixed while zooming.
    ///
    /// Scale is updated first, the pan is added to the focus-preserving
    /// offset, and the offset is clamped last. A NaN zoom factor is treated
    /// as `1.0`.
    #[must_use]
    pub fn apply_gesture(
        &self,
        gesture: &ViewGesture,
        layout: &ViewLayout,
        limits: &ViewportLimits,
    ) -> Self {
        let zoom = if gesture.zoom.is_nan() {
            1.0
        } else {
            gesture.zoom
        };
        let centroid = gesture.centroid.to_vec2();
        let focus = (centroid - self.offset) / self.divisor_scale();
        let scale = limits.clamp_scale(self.scale * zoom);
        let offset = centroid - focus * scale + gesture.pan;
        Self {
            scale,
            offset: clamp_offset(offset, Self::max_offset(layout, limits, scale)),
        }
    }

    /// Maps a container-local screen point into canvas space.
    #[must_use]
    pub fn screen_to_canvas(&self, pt: Point, layout: &ViewLayout) -> Point {
        let v = (pt - layout.box_center() - self.offset) / self.divisor_scale();
        layout.canvas_center() + v
    }

    /// Maps a canvas point into container-local screen space.
    #[must_use]
    pub fn canvas_to_screen(&self, pt: Point, layout: &ViewLayout) -> Point {
        self.canvas_transform(layout) * pt
    }

    /// Returns the canvas-to-screen drawing transform.
    #[must_use]
    pub fn canvas_transform(&self, layout: &ViewLayout) -> Affine {
        Affine::translate(layout.box_center().to_vec2() + self.offset)
            * Affine::scale(self.scale)
            * Affine::translate(-layout.canvas_center().to_vec2())
    }

    fn divisor_scale(&self) -> f64 {
        if self.scale != 0.0 { self.scale } else { 1.0 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Applies one viewport gesture step. See [`Viewport::apply_gesture`].
#[must_use]
pub fn apply_viewport_gesture(
    viewport: &Viewport,
    gesture: &ViewGesture,
    layout: &ViewLayout,
    limits: &ViewportLimits,
) -> Viewport {
    viewport.apply_gesture(gesture, layout, limits)
}

/// Maps a container-local screen point into canvas space. See
/// [`Viewport::screen_to_canvas`].
#[must_use]
pub fn map_screen_point_to_canvas(pt: Point, layout: &ViewLayout, viewport: &Viewport) -> Point {
    viewport.screen_to_canvas(pt, layout)
}

fn clamp_offset(offset: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(offset.x.clamp(-max.x, max.x), offset.y.clamp(-max.y, max.y))
}
