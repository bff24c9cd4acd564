// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View: whole-canvas pan/zoom for a 2D scene editor.
//!
//! This crate is the viewport half of Easel's transform engine. It models a
//! canvas centered inside an on-screen container ("box") and focuses on:
//! - Viewport state (uniform scale + screen-space offset).
//! - Focus-preserving pinch zoom combined with simultaneous panning.
//! - Clamping, so the scaled canvas never exposes more than a fixed margin
//!   of empty space past the container.
//! - Coordinate conversion between container-local screen space and canvas
//!   space, for hit testing and drawing.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to feed gesture deltas in and draw with [`Viewport::canvas_transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use easel_view::{ViewGesture, ViewLayout, Viewport, ViewportLimits};
//!
//! // 400x400 container showing a 400x400 canvas.
//! let layout = ViewLayout::new(Size::new(400.0, 400.0), Size::new(400.0, 400.0));
//! let limits = ViewportLimits::default();
//!
//! // Pinch out 2x around the container center.
//! let view = Viewport::IDENTITY.apply_gesture(
//!     &ViewGesture { centroid: Point::ZERO, pan: Vec2::ZERO, zoom: 2.0 },
//!     &layout,
//!     &limits,
//! );
//! assert_eq!(view.scale(), 2.0);
//!
//! // The container center still shows the canvas center.
//! assert_eq!(view.screen_to_canvas(Point::new(200.0, 200.0), &layout), Point::new(200.0, 200.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is **uniform** and clamped to [`ViewportLimits`] (`[1.0, 4.0]` by default).
//! - The offset is expressed in screen units relative to the centered canvas.
//! - Rotation of the whole canvas is intentionally not modeled; per-object
//!   rotation lives in `easel_geometry`.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{
    ViewGesture, ViewLayout, Viewport, ViewportLimits, apply_viewport_gesture,
    map_screen_point_to_canvas,
};
