// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point hit testing over transformed objects.

use kurbo::Point;

use crate::object::SceneObject;
use crate::types::ObjectId;

/// Returns the topmost object containing `pt`, if any.
///
/// `pt` is in canvas space. Each candidate maps the point into its local
/// space (see [`SceneObject::map_to_local`]) and tests edge-inclusive
/// containment against its bounds. Among all hits the highest
/// [`z_index`](SceneObject::z_index) wins; on equal z the object that comes
/// first in iteration order wins.
///
/// This is `O(n)` in the number of candidates and allocates nothing.
#[must_use]
pub fn hit_test<'a, I>(pt: Point, objects: I) -> Option<ObjectId>
where
    I: IntoIterator<Item = &'a SceneObject>,
{
    hit_test_object(pt, objects).map(SceneObject::id)
}

/// Like [`hit_test`], but returns the object itself.
#[must_use]
pub fn hit_test_object<'a, I>(pt: Point, objects: I) -> Option<&'a SceneObject>
where
    I: IntoIterator<Item = &'a SceneObject>,
{
    let mut best: Option<&'a SceneObject> = None;
    for obj in objects {
        if best.is_some_and(|b| obj.z_index() <= b.z_index()) {
            continue;
        }
        if obj.contains(pt) {
            best = Some(obj);
        }
    }
    best
}
