/*!
 * Memory Traits
 * Pool management abstractions
 */

use super::types::*;
use crate::core::types::{Address, Size, WordCount, WordOffset};
use std::io;
use std::path::Path;

/// Pool allocator interface
pub trait Allocator: Send + Sync {
    /// Allocate a byte range, rounded up to whole words
    fn allocate(&mut self, size_in_bytes: Size) -> MemoryResult<Address>;

    /// Release the block starting at an address handed out by `allocate`
    fn free(&mut self, address: Address) -> MemoryResult<()>;

    /// Check if an address is the start of a live block
    fn is_valid(&self, address: Address) -> bool;

    /// Get the size of a live block
    fn block_size(&self, address: Address) -> Option<Size>;
}

/// Pool statistics provider
pub trait MemoryInfo: Send + Sync {
    /// Get overall pool statistics
    fn stats(&self) -> MemoryResult<MemoryStats>;

    /// Get pool usage as (total, used, available)
    fn info(&self) -> MemoryResult<(Size, Size, Size)>;
}

/// Hole selection strategy
///
/// A policy is a pure function over the word-list snapshot: it never mutates
/// allocator state and sees holes in ascending offset order. Closures with
/// the matching signature implement this trait via the blanket impl, so a
/// policy can be hot-swapped with either a named strategy or an ad-hoc
/// function.
pub trait PlacementPolicy: Send + Sync {
    /// Choose the hole satisfying `words_needed`, returning its word offset
    fn choose(&self, words_needed: WordCount, holes: &WordList) -> Option<WordOffset>;
}

impl<F> PlacementPolicy for F
where
    F: Fn(WordCount, &WordList) -> Option<WordOffset> + Send + Sync,
{
    fn choose(&self, words_needed: WordCount, holes: &WordList) -> Option<WordOffset> {
        self(words_needed, holes)
    }
}

/// Byte-sink collaborator for memory map dumps
///
/// The dump path is the only I/O in the crate; everything above this seam is
/// pure bookkeeping.
pub trait ByteSink: Send + Sync {
    /// Write `data` to `path`, replacing any existing contents
    fn write_all(&mut self, path: &Path, data: &[u8]) -> io::Result<()>;
}
