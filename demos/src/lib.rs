// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless pointer-session replay for Easel demos.
//!
//! A [`Replayer`] plays the part of a renderer's input layer: it feeds raw
//! pointer events through the `easel_event_state` recognizers and routes the
//! resulting taps, double taps and transform steps to an [`EditorSurface`].
//!
//! Run:
//! - `cargo run -p easel_demos --example scene_replay`
//! - `cargo run -p easel_demos --example scene_replay -- path/to/config.json`

use easel_event_state::tap::{TapConfig, TapResult, TapState};
use easel_event_state::transform::{PointerId, TransformGestureConfig, TransformGestureState};
use easel_geometry::{ObjectId, ObjectLimits};
use easel_scene::{DemoLayout, EditorSurface, GestureTarget, SceneStore, SurfaceConfig};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to set up a demo surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Scale limits for objects.
    pub object_limits: ObjectLimits,
    /// Viewport limits and drawing style.
    pub surface: SurfaceConfig,
    /// Tap recognition tolerances.
    pub tap: TapConfig,
    /// Transform gesture tolerances.
    pub gesture: TransformGestureConfig,
    /// Initial rectangles.
    pub layout: DemoLayout,
    /// Size of the on-screen container.
    pub box_size: Size,
    /// Size of the canvas inside it.
    pub canvas_size: Size,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            object_limits: ObjectLimits::default(),
            surface: SurfaceConfig::default(),
            tap: TapConfig::default(),
            gesture: TransformGestureConfig::default(),
            layout: DemoLayout::default(),
            box_size: Size::new(400.0, 800.0),
            canvas_size: Size::new(400.0, 400.0),
        }
    }
}

/// A raw pointer event with a millisecond timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// A pointer was pressed.
    Down {
        /// Pointer identifier.
        id: PointerId,
        /// Container-local position.
        pos: Point,
        /// Timestamp in milliseconds.
        time_ms: u64,
    },
    /// A pressed pointer moved.
    Move {
        /// Pointer identifier.
        id: PointerId,
        /// Container-local position.
        pos: Point,
        /// Timestamp in milliseconds.
        time_ms: u64,
    },
    /// A pointer was released.
    Up {
        /// Pointer identifier.
        id: PointerId,
        /// Container-local position.
        pos: Point,
        /// Timestamp in milliseconds.
        time_ms: u64,
    },
    /// Time passed without input.
    Tick {
        /// Timestamp in milliseconds.
        time_ms: u64,
    },
}

/// What the surface did in response to an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reaction {
    /// A single tap was delivered; carries the resulting selection.
    Tap(Option<ObjectId>),
    /// A double tap reset the viewport.
    DoubleTap,
    /// A transform step was applied.
    Gesture(GestureTarget),
}

/// Drives an [`EditorSurface`] from raw pointer events.
#[derive(Debug)]
pub struct Replayer {
    surface: EditorSurface,
    taps: TapState,
    gesture: TransformGestureState,
}

impl Replayer {
    /// Builds a surface seeded with `config.layout`.
    #[must_use]
    pub fn new(config: &DemoConfig) -> Self {
        let store = SceneStore::demo(&config.layout, config.object_limits);
        let mut surface = EditorSurface::new(store, config.surface);
        surface.set_layout(config.box_size, config.canvas_size);
        Self {
            surface,
            taps: TapState::new(config.tap),
            gesture: TransformGestureState::new(config.gesture),
        }
    }

    /// Returns the surface being driven.
    #[must_use]
    pub fn surface(&self) -> &EditorSurface {
        &self.surface
    }

    /// Feeds one event through the recognizers.
    ///
    /// Most events cause at most one reaction. A press or drag that ends a
    /// pending tap delivers that tap first, ahead of its own reaction.
    pub fn apply(&mut self, event: PointerEvent) -> Vec<Reaction> {
        let mut reactions = Vec::new();
        match event {
            PointerEvent::Down { id, pos, time_ms } => {
                let released = if self.gesture.pointer_count() == 0 {
                    self.taps.on_down(pos, time_ms)
                } else {
                    self.taps.cancel()
                };
                if let Some(tap) = released {
                    reactions.push(self.deliver_tap(tap));
                }
                self.gesture.pointer_down(id, pos);
            }
            PointerEvent::Move { id, pos, .. } => {
                if self.gesture.pointer_count() == 1 {
                    self.taps.on_move(pos);
                }
                if let Some(delta) = self.gesture.pointer_move(id, pos) {
                    if let Some(tap) = self.taps.cancel() {
                        reactions.push(self.deliver_tap(tap));
                    }
                    let target = self.surface.transform_gesture(
                        delta.centroid,
                        delta.pan,
                        delta.zoom,
                        delta.rotation,
                    );
                    reactions.push(Reaction::Gesture(target));
                }
            }
            PointerEvent::Up { id, pos, time_ms } => {
                self.gesture.pointer_up(id);
                if self.gesture.pointer_count() == 0
                    && matches!(self.taps.on_up(pos, time_ms), TapResult::DoubleTap(_))
                {
                    self.surface.double_tap();
                    reactions.push(Reaction::DoubleTap);
                }
            }
            PointerEvent::Tick { time_ms } => {
                if let Some(tap) = self.taps.flush(time_ms) {
                    reactions.push(self.deliver_tap(tap));
                }
            }
        }
        reactions
    }

    fn deliver_tap(&mut self, pos: Point) -> Reaction {
        let state = self.surface.tap(pos);
        debug!(?pos, selected = ?state.selected(), "tap delivered");
        Reaction::Tap(state.selected())
    }
}

/// A short scripted session: select a rectangle, drag and twist it,
/// deselect, pinch the canvas, then double tap to reset.
#[must_use]
pub fn sample_session() -> Vec<PointerEvent> {
    let down = |id, x, y, time_ms| PointerEvent::Down {
        id,
        pos: Point::new(x, y),
        time_ms,
    };
    let moved = |id, x, y, time_ms| PointerEvent::Move {
        id,
        pos: Point::new(x, y),
        time_ms,
    };
    let up = |id, x, y, time_ms| PointerEvent::Up {
        id,
        pos: Point::new(x, y),
        time_ms,
    };
    let tick = |time_ms| PointerEvent::Tick { time_ms };
    vec![
        // Tap the first rectangle. The canvas is centered in a taller box,
        // so screen y is canvas y plus 200.
        down(0, 60.0, 260.0, 0),
        up(0, 60.0, 260.0, 40),
        tick(400),
        // Two-finger twist and spread.
        down(0, 40.0, 300.0, 1000),
        down(1, 140.0, 300.0, 1010),
        moved(1, 140.0, 340.0, 1030),
        moved(1, 170.0, 380.0, 1050),
        up(1, 170.0, 380.0, 1070),
        up(0, 40.0, 300.0, 1080),
        // Tap empty space to deselect.
        down(0, 390.0, 790.0, 2000),
        up(0, 390.0, 790.0, 2030),
        tick(2400),
        // Pinch the canvas.
        down(0, 150.0, 400.0, 3000),
        down(1, 250.0, 400.0, 3005),
        moved(1, 350.0, 400.0, 3030),
        up(1, 350.0, 400.0, 3050),
        up(0, 150.0, 400.0, 3055),
        // Double tap resets the viewport.
        down(0, 200.0, 400.0, 4000),
        up(0, 200.0, 400.0, 4030),
        down(0, 200.0, 400.0, 4120),
        up(0, 200.0, 400.0, 4150),
    ]
}
