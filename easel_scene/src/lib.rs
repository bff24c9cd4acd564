// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Scene: the state store and editor surface of a 2D scene editor.
//!
//! A scene is a list of independently transformable rectangles plus at most
//! one selected object. This crate owns that state and the rules for
//! changing it; the geometry comes from `easel_geometry` and the canvas
//! viewport from `easel_view`.
//!
//! - [`SceneStore`]: single owner of the scene. One entry point,
//!   [`SceneStore::dispatch`], accepts a closed set of [`SceneAction`]s and
//!   publishes immutable [`SceneState`] snapshots behind an `Arc`.
//! - [`EditorSurface`]: the boundary a renderer talks to. It turns screen
//!   taps into canvas taps, routes transform gestures either to the
//!   selected object or to the viewport, and describes the result as a
//!   [`Frame`] of [`DrawItem`]s.
//! - [`ObjectSequence`]: the id and z-index counter owned by each store.
//! - [`DemoLayout`]: a diagonal staircase of rectangles for seeding a scene.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kurbo::{Point, Rect, Vec2};
//! use easel_geometry::ObjectLimits;
//! use easel_scene::{SceneAction, SceneStore};
//!
//! let mut store = SceneStore::with_rects(
//!     [Rect::new(0.0, 0.0, 100.0, 100.0), Rect::new(50.0, 50.0, 150.0, 150.0)],
//!     ObjectLimits::default(),
//! );
//!
//! // Tap the overlap: the later (higher) rectangle is selected.
//! let state = store.dispatch(SceneAction::Tap(Point::new(75.0, 75.0)));
//! let top = state.objects()[1].id();
//! assert_eq!(state.selected(), Some(top));
//!
//! // Drag it.
//! let moved = store.dispatch(SceneAction::manipulate(Vec2::new(10.0, 0.0), 1.0, 0.0));
//! assert_eq!(moved.object(top).unwrap().translation(), Vec2::new(10.0, 0.0));
//!
//! // The earlier snapshot is untouched.
//! assert_eq!(state.object(top).unwrap().translation(), Vec2::ZERO);
//! assert!(!Arc::ptr_eq(&state, &moved));
//! ```
//!
//! ## Concurrency
//!
//! A store is a single logical owner: dispatch takes `&mut self` and runs to
//! completion, including observer callbacks. Snapshots are immutable and can
//! be shared freely once published.
//!
//! ## Logging
//!
//! Published changes are logged at `debug` level through `tracing`; no-op
//! dispatches and gesture routing are logged at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod layout;
mod sequence;
mod state;
mod store;
mod surface;

pub use action::SceneAction;
pub use layout::DemoLayout;
pub use sequence::ObjectSequence;
pub use state::SceneState;
pub use store::{SceneStore, SubscriptionId};
pub use surface::{
    DrawItem, EditorSurface, Frame, GestureTarget, Outline, SceneStyle, SurfaceConfig,
};
