/*!
 * Free and Block Lists
 * Extent bookkeeping for holes and live allocations
 */

use crate::core::types::{Address, Size};
use crate::memory::types::Extent;

/// Holes in the pool
///
/// Kept unordered on the insertion path; snapshots sort by start offset.
/// Invariants maintained by the manager: holes never overlap and no two
/// holes are mutually adjacent.
#[derive(Debug, Default)]
pub(super) struct FreeList {
    holes: Vec<Extent>,
}

impl FreeList {
    /// Reset to a single hole covering the given extent
    pub fn reset(&mut self, extent: Extent) {
        self.holes.clear();
        self.holes.push(extent);
    }

    pub fn clear(&mut self) {
        self.holes.clear();
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn insert(&mut self, extent: Extent) {
        self.holes.push(extent);
    }

    /// Index of the hole starting exactly at `start`
    pub fn find_starting_at(&self, start: Size) -> Option<usize> {
        self.holes.iter().position(|h| h.start == start)
    }

    /// Index of the hole whose end touches `end`
    pub fn find_ending_at(&self, end: Size) -> Option<usize> {
        self.holes.iter().position(|h| h.end() == end)
    }

    pub fn get(&self, index: usize) -> Extent {
        self.holes[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Extent {
        &mut self.holes[index]
    }

    pub fn remove(&mut self, index: usize) -> Extent {
        self.holes.swap_remove(index)
    }

    /// Holes sorted ascending by start offset
    pub fn sorted(&self) -> Vec<Extent> {
        let mut holes = self.holes.clone();
        holes.sort_by_key(|h| h.start);
        holes
    }

    pub fn total_free(&self) -> Size {
        self.holes.iter().map(|h| h.size).sum()
    }

    pub fn largest(&self) -> Size {
        self.holes.iter().map(|h| h.size).max().unwrap_or(0)
    }
}

/// Live allocations, each identified by its start offset
#[derive(Debug, Default)]
pub(super) struct BlockList {
    blocks: Vec<Extent>,
}

impl BlockList {
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn insert(&mut self, extent: Extent) {
        self.blocks.push(extent);
    }

    /// Index of the block starting exactly at `address`
    pub fn find(&self, address: Address) -> Option<usize> {
        self.blocks.iter().position(|b| b.start == address)
    }

    pub fn get(&self, index: usize) -> Extent {
        self.blocks[index]
    }

    pub fn remove(&mut self, index: usize) -> Extent {
        self.blocks.swap_remove(index)
    }

    pub fn total_allocated(&self) -> Size {
        self.blocks.iter().map(|b| b.size).sum()
    }
}
