// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene store: single owner of the object list and selection.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use easel_geometry::{Manipulation, ObjectId, ObjectLimits, hit_test};
use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::action::SceneAction;
use crate::layout::DemoLayout;
use crate::sequence::ObjectSequence;
use crate::state::SceneState;

/// Handle returned by [`SceneStore::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Arc<SceneState>)>;

/// Owns the authoritative [`SceneState`] and applies [`SceneAction`]s to it.
///
/// Every change publishes a fresh `Arc<SceneState>`; earlier snapshots stay
/// valid and unchanged for anyone still holding them. Dispatch is
/// synchronous and observers run before [`SceneStore::dispatch`] returns.
pub struct SceneStore {
    state: Arc<SceneState>,
    sequence: ObjectSequence,
    limits: ObjectLimits,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl SceneStore {
    /// Creates a store with an empty scene.
    #[must_use]
    pub fn new(limits: ObjectLimits) -> Self {
        Self {
            state: Arc::new(SceneState::default()),
            sequence: ObjectSequence::new(),
            limits,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store seeded with one untransformed object per rectangle.
    ///
    /// Later rectangles stack above earlier ones.
    #[must_use]
    pub fn with_rects<I>(rects: I, limits: ObjectLimits) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut store = Self::new(limits);
        let objects = rects
            .into_iter()
            .map(|r| store.sequence.create(r))
            .collect();
        store.state = Arc::new(SceneState::new(objects));
        store
    }

    /// Creates a store seeded with [`DemoLayout::rects`].
    #[must_use]
    pub fn demo(layout: &DemoLayout, limits: ObjectLimits) -> Self {
        Self::with_rects(layout.rects(), limits)
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<SceneState> {
        Arc::clone(&self.state)
    }

    /// Returns the scale limits applied to manipulations.
    #[must_use]
    pub fn limits(&self) -> &ObjectLimits {
        &self.limits
    }

    /// Applies `action` and returns the resulting snapshot.
    ///
    /// When the action changes nothing (a tap that resolves to the current
    /// selection, a manipulation with nothing selected, or one that leaves the
    /// object unchanged) the current snapshot is returned as the same `Arc`
    /// and observers are not called.
    pub fn dispatch(&mut self, action: SceneAction) -> Arc<SceneState> {
        let next = match action {
            SceneAction::Tap(pt) => self.reduce_tap(pt),
            SceneAction::Manipulate(m) => self.reduce_manipulate(m),
        };
        match next {
            Some(next) => {
                self.state = Arc::new(next);
                debug!(
                    action = action.name(),
                    revision = self.state.revision(),
                    selected = ?self.state.selected(),
                    "scene updated"
                );
                self.notify();
            }
            None => trace!(action = action.name(), "dispatch left scene unchanged"),
        }
        Arc::clone(&self.state)
    }

    /// Registers `observer` to be called with every new snapshot.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Arc<SceneState>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn reduce_tap(&self, pt: Point) -> Option<SceneState> {
        let hit = hit_test(pt, self.state.objects());
        if hit == self.state.selected() {
            return None;
        }
        Some(self.state.successor(self.state.objects().to_vec(), hit))
    }

    fn reduce_manipulate(&self, manipulation: Manipulation) -> Option<SceneState> {
        let selected: ObjectId = self.state.selected()?;
        let index = self
            .state
            .objects()
            .iter()
            .position(|o| o.id() == selected)?;
        let current = &self.state.objects()[index];
        let updated = current.manipulated(manipulation, &self.limits);
        if updated == *current {
            return None;
        }
        let mut objects = self.state.objects().to_vec();
        objects[index] = updated;
        Some(self.state.successor(objects, Some(selected)))
    }

    fn notify(&mut self) {
        let state = Arc::clone(&self.state);
        for (_, observer) in &mut self.observers {
            observer(&state);
        }
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(ObjectLimits::default())
    }
}

impl fmt::Debug for SceneStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneStore")
            .field("state", &self.state)
            .field("sequence", &self.sequence)
            .field("limits", &self.limits)
            .field("observers", &self.observers.len())
            .field("next_subscription", &self.next_subscription)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::Vec2;

    use super::*;

    fn square_at(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 100.0, y + 100.0)
    }

    #[test]
    fn seeded_objects_stack_in_creation_order() {
        let store = SceneStore::with_rects(
            [square_at(0.0, 0.0), square_at(10.0, 10.0)],
            ObjectLimits::default(),
        );
        let state = store.state();
        assert_eq!(state.len(), 2);
        assert!(state.objects()[1].z_index() > state.objects()[0].z_index());
        assert_eq!(state.revision(), 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn repeated_tap_keeps_snapshot() {
        let mut store = SceneStore::with_rects([square_at(0.0, 0.0)], ObjectLimits::default());
        let first = store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
        let second = store.dispatch(SceneAction::Tap(Point::new(60.0, 60.0)));
        assert!(Arc::ptr_eq(&first, &second), "same selection should not republish");
        assert_eq!(first.revision(), 1);
    }

    #[test]
    fn observers_fire_only_on_change() {
        let mut store = SceneStore::with_rects([square_at(0.0, 0.0)], ObjectLimits::default());
        let calls = Rc::new(Cell::new(0_u32));
        let seen = Rc::clone(&calls);
        let sub = store.subscribe(move |_| seen.set(seen.get() + 1));

        store.dispatch(SceneAction::manipulate(Vec2::new(1.0, 0.0), 1.0, 0.0));
        assert_eq!(calls.get(), 0);

        store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
        assert_eq!(calls.get(), 1);

        store.dispatch(SceneAction::manipulate(Vec2::new(1.0, 0.0), 1.0, 0.0));
        assert_eq!(calls.get(), 2);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.dispatch(SceneAction::Tap(Point::new(500.0, 500.0)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn identity_manipulation_is_a_no_op() {
        let mut store = SceneStore::with_rects([square_at(0.0, 0.0)], ObjectLimits::default());
        let selected = store.dispatch(SceneAction::Tap(Point::new(50.0, 50.0)));
        let after = store.dispatch(SceneAction::Manipulate(Manipulation::IDENTITY));
        assert!(Arc::ptr_eq(&selected, &after), "identity manipulation republished");
    }

    #[test]
    fn debug_output_does_not_expose_closures() {
        let mut store = SceneStore::default();
        store.subscribe(|_| {});
        let text = alloc::format!("{store:?}");
        assert!(text.contains("observers: 1"), "{text}");
    }
}
