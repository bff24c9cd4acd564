// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_geometry::{ObjectId, SceneObject};
use kurbo::Rect;

/// Issues object identifiers and z-indices.
///
/// Both counters advance together, so creation order, id order and stacking
/// order agree. Values are never reused for the lifetime of the sequence.
#[derive(Clone, Debug)]
pub struct ObjectSequence {
    next_id: u64,
    next_z: i32,
}

impl ObjectSequence {
    /// Creates a sequence whose first object gets id `1` and z-index `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            next_z: 1,
        }
    }

    /// Allocates the next id and z-index.
    pub fn allocate(&mut self) -> (ObjectId, i32) {
        let id = ObjectId::from_raw(self.next_id);
        let z = self.next_z;
        self.next_id += 1;
        self.next_z = self.next_z.saturating_add(1);
        (id, z)
    }

    /// Creates an untransformed object on top of everything issued so far.
    pub fn create(&mut self, bounds: Rect) -> SceneObject {
        let (id, z) = self.allocate();
        SceneObject::new(id, bounds, z)
    }

    /// Returns the z-index the next object will receive.
    #[must_use]
    pub fn peek_z(&self) -> i32 {
        self.next_z
    }
}

impl Default for ObjectSequence {
    fn default() -> Self {
        Self::new()
    }
}
