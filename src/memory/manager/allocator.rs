/*!
 * Allocation and Release
 * Placement, hole consumption, and coalescing logic
 */

use super::MemoryManager;
use crate::core::types::{Address, Size};
use crate::memory::types::{Extent, MemoryError, MemoryResult};
use log::{error, info, warn};

impl MemoryManager {
    /// Allocate `size_in_bytes`, rounded up to whole words
    ///
    /// Snapshots the free list in word units, asks the active placement
    /// policy for a hole, and carves the block out of its front. Returns the
    /// block's byte-offset handle. A zero-byte request yields a degenerate
    /// zero-size block at the chosen hole's start.
    pub fn allocate(&mut self, size_in_bytes: Size) -> MemoryResult<Address> {
        if self.pool.is_none() {
            return Err(MemoryError::NotInitialized);
        }

        let words = size_in_bytes.div_ceil(self.word_size);
        if self.free_list.is_empty() {
            error!("Allocation of {} words failed: pool is full", words);
            return Err(MemoryError::OutOfSpace {
                requested_words: words,
                holes: 0,
            });
        }

        let holes = self.free_list_words();
        let Some(word_offset) = self.policy.choose(words, &holes) else {
            error!(
                "Out of space: no hole fits {} words ({} holes free)",
                words,
                holes.holes()
            );
            return Err(MemoryError::OutOfSpace {
                requested_words: words,
                holes: holes.holes(),
            });
        };

        let offset = word_offset * self.word_size;
        let size = words * self.word_size;

        // The built-in policies only ever return a hole start large enough
        // for the request; a custom policy is user code and gets checked.
        let hole_index = match self.free_list.find_starting_at(offset) {
            Some(index) if self.free_list.get(index).size >= size => index,
            _ => {
                warn!(
                    "Placement policy chose word offset {} which is not a usable hole",
                    word_offset
                );
                return Err(MemoryError::OutOfSpace {
                    requested_words: words,
                    holes: holes.holes(),
                });
            }
        };

        self.ever_allocated = true;

        let block = Extent::new(offset, size);
        if let Some(pool) = self.pool.as_mut() {
            pool.mark_allocated(block);
        }
        self.block_list.insert(block);

        let hole = self.free_list.get(hole_index);
        if hole.size == size {
            self.free_list.remove(hole_index);
        } else {
            let hole = self.free_list.get_mut(hole_index);
            hole.start += size;
            hole.size -= size;
        }

        info!(
            "Allocated {} bytes ({} words) at offset {}",
            size, words, offset
        );
        Ok(offset)
    }

    /// Release the block starting at `address`
    ///
    /// Zeroes the block's range, probes the bytes on either side for free
    /// state, and merges with the adjacent hole(s). At most one hole can
    /// touch each side because holes are never left mutually adjacent.
    pub fn free(&mut self, address: Address) -> MemoryResult<()> {
        let Some(pool) = self.pool.as_mut() else {
            return Err(MemoryError::NotInitialized);
        };

        let Some(block_index) = self.block_list.find(address) else {
            warn!(
                "Attempted to free invalid or already freed offset {}",
                address
            );
            return Err(MemoryError::InvalidFree(address));
        };

        let block = self.block_list.remove(block_index);

        // Zero-size blocks own no bytes and never touch the free list.
        if block.is_empty() {
            info!("Freed zero-size block at offset {}", block.start);
            return Ok(());
        }

        pool.mark_free(block);

        let left_free = block.start > 0 && pool.byte_is_free(block.start - 1);
        let right_free = block.end() < pool.len() && pool.byte_is_free(block.end());

        let left = if left_free {
            self.free_list.find_ending_at(block.start)
        } else {
            None
        };
        let right = if right_free {
            self.free_list.find_starting_at(block.end())
        } else {
            None
        };

        match (left, right) {
            // No neighbor: the block becomes a hole of its own
            (None, None) => self.free_list.insert(block),
            // Left neighbor: grow it over the block
            (Some(left_index), None) => {
                self.free_list.get_mut(left_index).size += block.size;
            }
            // Right neighbor: pull its start back over the block
            (None, Some(right_index)) => {
                let hole = self.free_list.get_mut(right_index);
                hole.start = block.start;
                hole.size += block.size;
            }
            // Both: merge into the left hole, drop the right one
            (Some(left_index), Some(right_index)) => {
                let right_size = self.free_list.remove(right_index).size;
                // removal may have shifted the left hole's index
                let left_index = self
                    .free_list
                    .find_ending_at(block.start)
                    .unwrap_or(left_index);
                self.free_list.get_mut(left_index).size += block.size + right_size;
            }
        }

        info!("Freed {} bytes at offset {}", block.size, block.start);
        Ok(())
    }
}
