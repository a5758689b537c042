/*!
 * Byte Pool
 * Owned backing buffer and word arithmetic
 */

use crate::core::limits::ALLOCATED_FILL;
use crate::core::types::{Size, WordCount};
use crate::memory::types::Extent;

/// Zero-initialized byte buffer of `word_size * words` bytes
///
/// Allocated ranges are filled with [`ALLOCATED_FILL`], free ranges hold
/// zero, so a single byte probe answers "is this side of a block a hole".
#[derive(Debug)]
pub(super) struct Pool {
    bytes: Vec<u8>,
    word_size: Size,
}

impl Pool {
    pub fn new(word_size: Size, words: WordCount) -> Self {
        Self {
            bytes: vec![0; word_size * words],
            word_size,
        }
    }

    /// Total capacity in bytes
    pub fn len(&self) -> Size {
        self.bytes.len()
    }

    pub fn word_size(&self) -> Size {
        self.word_size
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Round a byte quantity up to whole words
    pub fn words_for(&self, bytes: Size) -> WordCount {
        bytes.div_ceil(self.word_size)
    }

    pub fn mark_allocated(&mut self, extent: Extent) {
        self.bytes[extent.start..extent.end()].fill(ALLOCATED_FILL);
    }

    pub fn mark_free(&mut self, extent: Extent) {
        self.bytes[extent.start..extent.end()].fill(0);
    }

    /// Probe one byte for free state
    pub fn byte_is_free(&self, index: Size) -> bool {
        self.bytes[index] == 0
    }
}
