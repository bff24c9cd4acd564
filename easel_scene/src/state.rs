// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable scene snapshots.

use alloc::vec::Vec;

use easel_geometry::{ObjectId, SceneObject};

/// One immutable snapshot of the scene.
///
/// Snapshots are published by [`SceneStore`](crate::SceneStore) behind an
/// `Arc` and never mutated afterwards, so readers always see a complete and
/// consistent object list.
///
/// Invariant: if [`selected`](Self::selected) is `Some`, it names an object
/// present in [`objects`](Self::objects).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneState {
    objects: Vec<SceneObject>,
    selected: Option<ObjectId>,
    revision: u64,
}

impl SceneState {
    pub(crate) fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            selected: None,
            revision: 0,
        }
    }

    /// Returns a successor snapshot with the given contents.
    ///
    /// A selection that does not name a present object is dropped.
    pub(crate) fn successor(&self, objects: Vec<SceneObject>, selected: Option<ObjectId>) -> Self {
        let selected = selected.filter(|id| objects.iter().any(|o| o.id() == *id));
        Self {
            objects,
            selected,
            revision: self.revision + 1,
        }
    }

    /// Returns all objects in creation order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Returns the selected object's id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Returns the selected object, if any.
    #[must_use]
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|id| self.object(id))
    }

    /// Returns `true` if `id` is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    /// Looks up an object by id.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    /// Returns the objects sorted bottom-to-top for painting.
    ///
    /// Objects with equal z keep their creation order.
    #[must_use]
    pub fn objects_in_paint_order(&self) -> Vec<&SceneObject> {
        let mut ordered: Vec<&SceneObject> = self.objects.iter().collect();
        ordered.sort_by_key(|o| o.z_index());
        ordered
    }

    /// Returns the snapshot's revision.
    ///
    /// The first snapshot of a store has revision `0`; every published
    /// change increments it by one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
