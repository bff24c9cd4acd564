// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor surface: the boundary between a gesture-detecting renderer and the store.

use alloc::sync::Arc;
use alloc::vec::Vec;

use easel_geometry::{Manipulation, ObjectId};
use easel_view::{ViewGesture, ViewLayout, Viewport, ViewportLimits};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;
use peniko::color::palette;
use tracing::trace;

use crate::action::SceneAction;
use crate::state::SceneState;
use crate::store::{SceneStore, SubscriptionId};

/// Colors used to describe the scene for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneStyle {
    /// Fill color of every rectangle.
    pub fill: Color,
    /// Stroke color of the selection outline.
    pub outline: Color,
    /// Stroke width of the selection outline, in local object units.
    pub outline_width: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            fill: palette::css::BLACK,
            outline: palette::css::RED,
            outline_width: 4.0,
        }
    }
}

/// Configuration for an [`EditorSurface`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfig {
    /// Zoom range and pan margin of the canvas viewport.
    pub viewport_limits: ViewportLimits,
    /// Drawing colors.
    pub style: SceneStyle,
}

/// Stroke around the selected rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in local object units.
    pub width: f64,
}

/// Everything a renderer needs to draw one object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    /// The object drawn.
    pub id: ObjectId,
    /// Local, untransformed rectangle.
    pub rect: Rect,
    /// Local-to-screen transform: viewport transform times object transform.
    pub transform: Affine,
    /// Fill color.
    pub fill: Color,
    /// Selection outline; present only for the selected object.
    pub outline: Option<Outline>,
}

/// A drawable description of the surface at one instant.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The scene snapshot this frame was built from.
    pub state: Arc<SceneState>,
    /// The viewport at the time the frame was built.
    pub viewport: Viewport,
    /// Canvas-to-screen transform of the viewport.
    pub canvas_transform: Affine,
    /// Objects bottom-to-top.
    pub items: Vec<DrawItem>,
}

/// Where a transform gesture step was routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureTarget {
    /// The step manipulated the selected object.
    Object(ObjectId),
    /// Nothing was selected; the step panned or zoomed the canvas.
    Viewport,
}

/// Routes taps and transform gestures to the scene store or the viewport.
///
/// The surface owns the viewport, which has no bearing on object identity,
/// and forwards object-related input to its [`SceneStore`]:
///
/// - [`tap`](Self::tap) maps the screen point into canvas space and selects
///   the object under it.
/// - [`double_tap`](Self::double_tap) resets the viewport.
/// - [`transform_gesture`](Self::transform_gesture) manipulates the selected
///   object, or zooms and pans the canvas when nothing is selected.
#[derive(Debug)]
pub struct EditorSurface {
    store: SceneStore,
    viewport: Viewport,
    layout: ViewLayout,
    config: SurfaceConfig,
}

impl EditorSurface {
    /// Wraps a store. The layout starts empty; call [`Self::set_layout`]
    /// once sizes are known.
    #[must_use]
    pub fn new(store: SceneStore, config: SurfaceConfig) -> Self {
        Self {
            store,
            viewport: Viewport::IDENTITY,
            layout: ViewLayout::default(),
            config,
        }
    }

    /// Updates the container and canvas sizes and re-clamps the viewport.
    pub fn set_layout(&mut self, box_size: Size, canvas_size: Size) {
        let layout = ViewLayout::new(box_size, canvas_size);
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        self.viewport = self
            .viewport
            .clamped(&self.layout, &self.config.viewport_limits);
    }

    /// Returns the current layout.
    #[must_use]
    pub fn layout(&self) -> &ViewLayout {
        &self.layout
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// Returns the current scene snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<SceneState> {
        self.store.state()
    }

    /// Registers a snapshot observer on the underlying store.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Arc<SceneState>) + 'static,
    {
        self.store.subscribe(observer)
    }

    /// Removes a snapshot observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Handles a single tap at a container-local screen point.
    pub fn tap(&mut self, screen: Point) -> Arc<SceneState> {
        let canvas = self.viewport.screen_to_canvas(screen, &self.layout);
        trace!(?screen, ?canvas, "tap");
        self.store.dispatch(SceneAction::Tap(canvas))
    }

    /// Handles a double tap: resets the viewport. Selection is unaffected.
    pub fn double_tap(&mut self) {
        trace!("double tap resets viewport");
        self.viewport.reset();
    }

    /// Handles one step of a transform gesture.
    ///
    /// `centroid` is container-local, `pan` is in screen units and
    /// `rotation` is in degrees. With a selection, the pan is converted to
    /// canvas units by dividing by the viewport scale.
    pub fn transform_gesture(
        &mut self,
        centroid: Point,
        pan: Vec2,
        zoom: f64,
        rotation: f64,
    ) -> GestureTarget {
        if let Some(selected) = self.store.state().selected() {
            let scale = self.viewport.scale();
            let pan = if scale != 0.0 { pan / scale } else { pan };
            trace!(?selected, ?pan, zoom, rotation, "gesture manipulates object");
            self.store
                .dispatch(SceneAction::Manipulate(Manipulation::new(pan, zoom, rotation)));
            return GestureTarget::Object(selected);
        }
        let gesture = ViewGesture {
            centroid: (centroid - self.layout.box_center()).to_point(),
            pan,
            zoom,
        };
        self.viewport =
            self.viewport
                .apply_gesture(&gesture, &self.layout, &self.config.viewport_limits);
        trace!(
            scale = self.viewport.scale(),
            offset = ?self.viewport.offset(),
            "gesture moves viewport"
        );
        GestureTarget::Viewport
    }

    /// Builds a drawable description of the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let state = self.store.state();
        let canvas_transform = self.viewport.canvas_transform(&self.layout);
        let style = &self.config.style;
        let items = state
            .objects_in_paint_order()
            .into_iter()
            .map(|o| DrawItem {
                id: o.id(),
                rect: o.bounds(),
                transform: canvas_transform * o.transform(),
                fill: style.fill,
                outline: state.is_selected(o.id()).then_some(Outline {
                    color: style.outline,
                    width: style.outline_width,
                }),
            })
            .collect();
        Frame {
            state,
            viewport: self.viewport,
            canvas_transform,
            items,
        }
    }
}
