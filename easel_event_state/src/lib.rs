// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Event State: pointer state managers for a scene editor surface.
//!
//! The editor core only understands two semantic inputs: a tap at a point,
//! and a manipulation delta (pan, zoom factor, rotation). This crate holds
//! the small state machines that reduce raw pointer events to those inputs:
//!
//! - [`tap`]: recognize single taps and double taps with spatial and temporal tolerance.
//! - [`transform`]: reduce one or more moving pointers to centroid, pan, zoom
//!   and rotation deltas.
//!
//! Both are plain state holders. They know nothing about the scene, the
//! viewport, or any windowing toolkit; the caller feeds positions and
//! timestamps in and routes the results.
//!
//! ## Typical wiring
//!
//! ```rust
//! use kurbo::Point;
//! use easel_event_state::tap::{TapConfig, TapState};
//! use easel_event_state::transform::{TransformGestureConfig, TransformGestureState};
//!
//! let mut taps = TapState::new(TapConfig::default());
//! let mut gesture = TransformGestureState::new(TransformGestureConfig::default());
//!
//! // First finger down: could be a tap or the start of a drag.
//! taps.on_down(Point::new(100.0, 100.0), 0);
//! gesture.pointer_down(0, Point::new(100.0, 100.0));
//!
//! // Second finger down: this is a pinch, not a tap. There was no earlier
//! // tap waiting for a second one, so nothing is released.
//! assert_eq!(taps.cancel(), None);
//! gesture.pointer_down(1, Point::new(200.0, 100.0));
//!
//! let delta = gesture.pointer_move(1, Point::new(300.0, 100.0));
//! assert!(delta.is_some_and(|d| d.zoom > 1.0));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod tap;
pub mod transform;
