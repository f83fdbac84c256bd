//! Compact membership set for object handles

use bitvec::prelude::*;
use std::fmt;

use crate::world::object::GridObjectId;

/// Growable bitset of object handles
///
/// Handles are issued densely by the grid, so membership is a single bit at
/// the handle's index. Used by the connectivity pass to collect every object
/// reached by a transport scan.
#[derive(Clone, Debug, Default)]
pub struct ObjectBitset {
    bits: BitVec,
}

impl ObjectBitset {
    /// Create an empty bitset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bitset with room for `capacity` handles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Insert a handle, growing as needed
    pub fn insert(&mut self, id: GridObjectId) {
        let index = id.index();
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits.set(index, true);
    }

    /// Test handle membership
    pub fn contains(&self, id: GridObjectId) -> bool {
        self.bits.get(id.index()).as_deref() == Some(&true)
    }

    /// Remove every handle while keeping the allocation
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no handles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count handles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all handles in ascending order
    pub fn to_vec(&self) -> Vec<GridObjectId> {
        self.bits
            .iter_ones()
            .map(|index| GridObjectId::new(index as u32))
            .collect()
    }
}

impl fmt::Display for ObjectBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectBitset({} objects: {:?})", self.count(), self.to_vec())
    }
}
