// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

/// A diagonal staircase of equally sized rectangles used to seed a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoLayout {
    /// Number of rectangles.
    pub count: usize,
    /// Size of each rectangle.
    pub rect_size: Size,
    /// Top-left corner of the first rectangle.
    pub origin: Point,
    /// Each rectangle is offset from the previous one by `rect_size / step_divisor`.
    pub step_divisor: f64,
}

impl DemoLayout {
    /// Returns the rectangles, bottom-most first.
    #[must_use]
    pub fn rects(&self) -> Vec<Rect> {
        let divisor = if self.step_divisor != 0.0 {
            self.step_divisor
        } else {
            1.0
        };
        let step = Vec2::new(self.rect_size.width, self.rect_size.height) / divisor;
        let mut top_left = self.origin;
        let mut rects = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            rects.push(Rect::from_origin_size(top_left, self.rect_size));
            top_left += step;
        }
        rects
    }
}

impl Default for DemoLayout {
    fn default() -> Self {
        Self {
            count: 5,
            rect_size: Size::new(200.0, 200.0),
            origin: Point::ZERO,
            step_divisor: 1.5,
        }
    }
}
