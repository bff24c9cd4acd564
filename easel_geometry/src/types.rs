// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: object identifiers, scale limits, and manipulation deltas.

use kurbo::Vec2;

/// Identifier for an object in a scene.
///
/// This is a small, copyable, opaque handle. Identifiers are issued by the
/// owning store from a monotonically increasing sequence and are never reused
/// within that store, so a stale `ObjectId` never aliases a different object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(u64);

impl ObjectId {
    /// Wraps a raw identifier value.
    ///
    /// Stores normally allocate identifiers themselves; this is exposed so
    /// that sequences living in other crates can mint them.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Allowed range for an object's uniform scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectLimits {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
}

impl ObjectLimits {
    /// Scale range used when nothing else is configured: `[0.2, 5.0]`.
    pub const DEFAULT: Self = Self {
        min_scale: 0.2,
        max_scale: 5.0,
    };

    /// Creates limits from a scale range.
    ///
    /// The range is normalized so that `min_scale <= max_scale`. A NaN
    /// bound takes the value of the other bound.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale: min_scale.min(max_scale),
            max_scale: min_scale.max(max_scale),
        }
    }

    /// Clamps `scale` into this range.
    ///
    /// The public fields may hold a reversed range (for example when
    /// deserialized), so the bounds are ordered here as well. A NaN input
    /// resolves to the lower bound. If both bounds are NaN the range is
    /// unbounded and only a NaN input is replaced, by `1.0`.
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

impl Default for ObjectLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An incremental manipulation of a single object, as produced by one
/// multi-touch gesture step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Manipulation {
    /// Translation delta in canvas units, added to the object's translation.
    pub pan: Vec2,
    /// Multiplicative zoom factor applied to the object's scale.
    pub zoom: f64,
    /// Rotation delta in degrees, added to the object's rotation.
    pub rotation: f64,
}

impl Manipulation {
    /// The manipulation that changes nothing.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        zoom: 1.0,
        rotation: 0.0,
    };

    /// Creates a manipulation from its three components.
    #[must_use]
    pub const fn new(pan: Vec2, zoom: f64, rotation: f64) -> Self {
        Self {
            pan,
            zoom,
            rotation,
        }
    }

    /// A pure translation.
    #[must_use]
    pub const fn pan(pan: Vec2) -> Self {
        Self {
            pan,
            zoom: 1.0,
            rotation: 0.0,
        }
    }
}

impl Default for Manipulation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
