// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_geometry::Manipulation;
use kurbo::{Point, Vec2};

/// The closed set of state changes a [`SceneStore`](crate::SceneStore) accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneAction {
    /// Select the topmost object under a canvas-space point, or clear the
    /// selection if there is none.
    Tap(Point),
    /// Apply a manipulation to the selected object. Ignored when nothing is
    /// selected.
    Manipulate(Manipulation),
}

impl SceneAction {
    /// Shorthand for [`SceneAction::Manipulate`].
    #[must_use]
    pub fn manipulate(pan: Vec2, zoom: f64, rotation: f64) -> Self {
        Self::Manipulate(Manipulation::new(pan, zoom, rotation))
    }

    /// A short static name, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tap(_) => "tap",
            Self::Manipulate(_) => "manipulate",
        }
    }
}
