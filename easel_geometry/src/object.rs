// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene objects: a local rectangle plus an independent translate/rotate/scale.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::types::{Manipulation, ObjectId, ObjectLimits};

/// A transformable rectangle.
///
/// The rectangle is stored untransformed in local space. Its on-canvas
/// placement is described by three independent components:
///
/// - `translation`, applied last and *not* subject to the object's own rotation,
/// - `rotation` in degrees about the local bounds center,
/// - `scale`, uniform, about the local bounds center.
///
/// Positive rotation turns clockwise on a y-down canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneObject {
    id: ObjectId,
    bounds: Rect,
    z_index: i32,
    translation: Vec2,
    scale: f64,
    rotation: f64,
}

impl SceneObject {
    /// Creates an untransformed object.
    ///
    /// `bounds` is normalized so that `x0 <= x1` and `y0 <= y1`.
    #[must_use]
    pub fn new(id: ObjectId, bounds: Rect, z_index: i32) -> Self {
        Self {
            id,
            bounds: bounds.abs(),
            z_index,
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Returns a copy with the given translation.
    #[must_use]
    pub fn with_translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    /// Returns a copy with the given scale.
    ///
    /// The value is stored as given; use [`SceneObject::manipulated`] for
    /// updates that must respect [`ObjectLimits`].
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the given rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Returns the object's identifier.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the untransformed local bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the stacking order. Higher values paint on top and win hit tests.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Returns the accumulated translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the accumulated rotation in degrees. This is never normalized.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the local-to-canvas transform.
    ///
    /// Equivalent to translating by `translation`, then rotating about the
    /// *original* bounds center, then scaling about that same center.
    #[must_use]
    pub fn transform(&self) -> Affine {
        compose_object_transform(self)
    }

    /// Maps a canvas-space point into this object's local space.
    ///
    /// Undoes translation, then rotation, then scale. A zero scale is treated
    /// as an inverse factor of `1.0`.
    #[must_use]
    pub fn map_to_local(&self, pt: Point) -> Point {
        let center = self.bounds.center();
        let local = pt - self.translation;
        let local = about(center, Affine::rotate(-self.rotation.to_radians())) * local;
        let inverse_scale = if self.scale != 0.0 {
            1.0 / self.scale
        } else {
            1.0
        };
        about(center, Affine::scale(inverse_scale)) * local
    }

    /// Returns `true` if the canvas-space point lies on or inside the
    /// transformed rectangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        contains_inclusive(self.bounds, self.map_to_local(pt))
    }

    /// Returns a copy with `manipulation` applied.
    ///
    /// Translation and rotation accumulate additively; scale is multiplied by
    /// the zoom factor and clamped into `limits`. A NaN zoom factor is
    /// treated as `1.0`.
    #[must_use]
    pub fn manipulated(&self, manipulation: Manipulation, limits: &ObjectLimits) -> Self {
        apply_manipulation(self, manipulation, limits)
    }
}

/// Returns the local-to-canvas transform of `object`.
///
/// See [`SceneObject::transform`].
#[must_use]
pub fn compose_object_transform(object: &SceneObject) -> Affine {
    let center = object.bounds.center();
    Affine::translate(object.translation)
        * about(center, Affine::rotate(object.rotation.to_radians()))
        * about(center, Affine::scale(object.scale))
}

/// Returns a copy of `object` with `manipulation` applied.
///
/// See [`SceneObject::manipulated`].
#[must_use]
pub fn apply_manipulation(
    object: &SceneObject,
    manipulation: Manipulation,
    limits: &ObjectLimits,
) -> SceneObject {
    let zoom = if manipulation.zoom.is_nan() {
        1.0
    } else {
        manipulation.zoom
    };
    SceneObject {
        translation: object.translation + manipulation.pan,
        scale: limits.clamp_scale(object.scale * zoom),
        rotation: object.rotation + manipulation.rotation,
        ..object.clone()
    }
}

/// Conjugates `affine` so that it pivots on `center` instead of the origin.
fn about(center: Point, affine: Affine) -> Affine {
    let c = center.to_vec2();
    Affine::translate(c) * affine * Affine::translate(-c)
}

/// Edge-inclusive containment; `Rect::contains` excludes the max edges.
fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}
