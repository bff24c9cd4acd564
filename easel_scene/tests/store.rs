// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SceneStore` dispatch.
//!
//! These exercise tap resolution against z-order and transforms, clamped
//! manipulation of the selection, and the snapshot publishing rules.

use std::sync::Arc;

use easel_geometry::{ObjectLimits, SceneObject};
use easel_scene::{DemoLayout, SceneAction, SceneStore};
use kurbo::{Point, Rect, Vec2};

fn three_stacked() -> SceneStore {
    SceneStore::with_rects(
        [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(25.0, 25.0, 125.0, 125.0),
            Rect::new(40.0, 40.0, 140.0, 140.0),
        ],
        ObjectLimits::default(),
    )
}

fn square(side: f64) -> SceneStore {
    SceneStore::with_rects([Rect::new(0.0, 0.0, side, side)], ObjectLimits::default())
}

#[test]
fn tap_on_overlap_selects_highest_z() {
    let mut store = three_stacked();
    let zs: Vec<i32> = store.state().objects().iter().map(SceneObject::z_index).collect();
    assert_eq!(zs, [1, 2, 3]);

    let state = store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
    let selected = state.selected_object().expect("an object is selected");
    assert_eq!(selected.z_index(), 3);
}

#[test]
fn tap_outside_everything_clears_selection() {
    let mut store = three_stacked();
    store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
    let state = store.dispatch(SceneAction::Tap(Point::new(500.0, -500.0)));
    assert_eq!(state.selected(), None);
    assert_eq!(state.selected_object(), None);
}

#[test]
fn tap_on_empty_canvas_with_no_selection_is_unchanged() {
    let mut store = three_stacked();
    let before = store.state();
    let after = store.dispatch(SceneAction::Tap(Point::new(-1.0, -1.0)));
    assert!(Arc::ptr_eq(&before, &after), "snapshot should be reused");
    assert_eq!(after.selected(), None);
}

#[test]
fn tap_resolves_rotated_object() {
    let mut store = square(100.0);
    let id = store.state().objects()[0].id();
    store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
    store.dispatch(SceneAction::manipulate(Vec2::ZERO, 1.0, 90.0));

    let obj = store.state().object(id).cloned().expect("object exists");
    assert_eq!(obj.rotation(), 90.0);
    let canvas = obj.transform() * Point::new(10.0, 50.0);
    assert!((canvas.x - 50.0).abs() < 1e-9, "x was {}", canvas.x);
    assert!((canvas.y - 10.0).abs() < 1e-9, "y was {}", canvas.y);

    // Clear, then re-select through the rotated point.
    store.dispatch(SceneAction::Tap(Point::new(1000.0, 1000.0)));
    let state = store.dispatch(SceneAction::Tap(canvas));
    assert_eq!(state.selected(), Some(id));
}

#[test]
fn manipulate_clamps_scale() {
    let mut store = square(100.0);
    store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
    store.dispatch(SceneAction::manipulate(Vec2::ZERO, 4.0, 0.0));
    assert_eq!(store.state().selected_object().map(SceneObject::scale), Some(4.0));

    let state = store.dispatch(SceneAction::manipulate(Vec2::ZERO, 2.0, 0.0));
    assert_eq!(state.selected_object().map(SceneObject::scale), Some(5.0));

    let state = store.dispatch(SceneAction::manipulate(Vec2::ZERO, 0.0, 0.0));
    assert_eq!(state.selected_object().map(SceneObject::scale), Some(0.2));
}

#[test]
fn manipulate_without_selection_is_unchanged() {
    let mut store = three_stacked();
    let before = store.state();
    let after = store.dispatch(SceneAction::manipulate(Vec2::new(10.0, 10.0), 2.0, 45.0));
    assert!(Arc::ptr_eq(&before, &after), "snapshot should be reused");
    assert_eq!(*before, *after);
}

#[test]
fn manipulate_touches_only_the_selection() {
    let mut store = three_stacked();
    let before = store.dispatch(SceneAction::Tap(Point::new(130.0, 130.0)));
    let selected = before.selected().expect("top object selected");
    let after = store.dispatch(SceneAction::manipulate(Vec2::new(5.0, -5.0), 1.5, -30.0));

    for (old, new) in before.objects().iter().zip(after.objects()) {
        if old.id() == selected {
            assert_eq!(new.translation(), Vec2::new(5.0, -5.0));
            assert_eq!(new.scale(), 1.5);
            assert_eq!(new.rotation(), -30.0);
        } else {
            assert_eq!(old, new);
        }
    }
    assert_eq!(after.revision(), before.revision() + 1);
}

#[test]
fn rotation_accumulates_without_normalizing() {
    let mut store = square(10.0);
    store.dispatch(SceneAction::Tap(Point::new(5.0, 5.0)));
    for _ in 0..5 {
        store.dispatch(SceneAction::manipulate(Vec2::ZERO, 1.0, 90.0));
    }
    assert_eq!(store.state().selected_object().map(SceneObject::rotation), Some(450.0));
}

#[test]
fn object_order_is_independent_of_selection() {
    let mut store = three_stacked();
    let ids: Vec<_> = store.state().objects().iter().map(SceneObject::id).collect();
    store.dispatch(SceneAction::Tap(Point::new(5.0, 5.0)));
    store.dispatch(SceneAction::manipulate(Vec2::new(200.0, 0.0), 1.0, 0.0));
    let after: Vec<_> = store.state().objects().iter().map(SceneObject::id).collect();
    assert_eq!(ids, after);
}

#[test]
fn demo_scene_selects_top_of_staircase() {
    let mut store = SceneStore::demo(&DemoLayout::default(), ObjectLimits::default());
    assert_eq!(store.state().len(), 5);
    // (150, 150) lies in the first two rectangles of the staircase.
    let state = store.dispatch(SceneAction::Tap(Point::new(150.0, 150.0)));
    assert_eq!(state.selected_object().map(SceneObject::z_index), Some(2));
}

#[test]
fn custom_limits_apply() {
    let mut store = SceneStore::with_rects(
        [Rect::new(0.0, 0.0, 10.0, 10.0)],
        ObjectLimits::new(0.5, 2.0),
    );
    store.dispatch(SceneAction::Tap(Point::new(5.0, 5.0)));
    let state = store.dispatch(SceneAction::manipulate(Vec2::ZERO, 100.0, 0.0));
    assert_eq!(state.selected_object().map(SceneObject::scale), Some(2.0));
}
