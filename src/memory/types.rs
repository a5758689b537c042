/*!
 * Memory Types
 * Common types for pool management
 */

use crate::core::types::{Address, Size, WordCount, WordOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Pool is not initialized")]
    NotInitialized,

    #[error("Pool capacity exceeded: requested {requested_words} words, ceiling {limit_words} words")]
    CapacityExceeded {
        requested_words: WordCount,
        limit_words: WordCount,
    },

    #[error("Out of space: no hole fits {requested_words} words ({holes} holes free)")]
    OutOfSpace {
        requested_words: WordCount,
        holes: usize,
    },

    #[error("Invalid free: offset {0} does not match any live block")]
    InvalidFree(Address),

    #[error("No allocation has been performed yet")]
    NoAllocations,

    #[error("Memory map dump failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for MemoryError {
    fn from(err: std::io::Error) -> Self {
        MemoryError::Io(err.to_string())
    }
}

/// Contiguous byte range within the pool
///
/// Holes and blocks share this shape; the free and block lists tag which is
/// which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub start: Size,
    pub size: Size,
}

impl Extent {
    pub fn new(start: Size, size: Size) -> Self {
        Self { start, size }
    }

    /// First byte past the extent
    pub fn end(&self) -> Size {
        self.start + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// One hole in word units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub offset: WordOffset,
    pub size: WordCount,
}

impl WordSpan {
    pub fn new(offset: WordOffset, size: WordCount) -> Self {
        Self { offset, size }
    }
}

/// Snapshot of the free list in word units, ascending by offset
///
/// A fresh value is built on every call; the serialized form's leading hole
/// count is `holes()`. Hole starts and sizes are rounded up to word
/// granularity independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    spans: Vec<WordSpan>,
}

impl WordList {
    /// Build a word list from spans already sorted ascending by offset
    pub fn new(spans: Vec<WordSpan>) -> Self {
        debug_assert!(spans.windows(2).all(|w| w[0].offset <= w[1].offset));
        Self { spans }
    }

    /// Leading hole count of the serialized form
    pub fn holes(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordSpan> {
        self.spans.iter()
    }

    pub fn spans(&self) -> &[WordSpan] {
        &self.spans
    }
}

/// Pool statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_bytes: Size,
    pub used_bytes: Size,
    pub available_bytes: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub holes: usize,
    pub largest_hole_bytes: Size,
}
