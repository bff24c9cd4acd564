// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Geometry: per-object transforms for a 2D scene editor.
//!
//! This crate is the object half of Easel's transform engine. It is pure
//! and stateless: every function takes values and returns values, so it can
//! be called from any thread without synchronization.
//!
//! - [`SceneObject`]: an axis-aligned local rectangle plus translation,
//!   rotation (degrees) and uniform scale.
//! - [`compose_object_transform`]: local-to-canvas [`kurbo::Affine`].
//! - [`hit_test`]: inverse-map a canvas point and resolve the topmost object.
//! - [`apply_manipulation`]: fold one gesture step into an object, clamping
//!   scale to [`ObjectLimits`].
//!
//! ## Transform order
//!
//! An object is drawn by translating, then rotating about the **original**
//! (untranslated) bounds center, then scaling about that same center. The
//! translation is therefore not subject to the object's own rotation:
//! accumulated pan does not follow accumulated rotation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use easel_geometry::{hit_test, Manipulation, ObjectId, ObjectLimits, SceneObject};
//!
//! let a = SceneObject::new(ObjectId::from_raw(1), Rect::new(0.0, 0.0, 100.0, 100.0), 1);
//! let b = SceneObject::new(ObjectId::from_raw(2), Rect::new(50.0, 50.0, 150.0, 150.0), 2);
//!
//! // Overlap resolves to the higher z-index.
//! assert_eq!(hit_test(Point::new(75.0, 75.0), [&a, &b]), Some(b.id()));
//!
//! // Drag `a` out from under `b`.
//! let a = a.manipulated(Manipulation::pan(Vec2::new(-200.0, 0.0)), &ObjectLimits::default());
//! assert_eq!(hit_test(Point::new(-150.0, 10.0), [&a, &b]), Some(a.id()));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod hit;
mod object;
mod types;

pub use hit::{hit_test, hit_test_object};
pub use object::{SceneObject, apply_manipulation, compose_object_transform};
pub use types::{Manipulation, ObjectId, ObjectLimits};
