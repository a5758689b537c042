/*!
 * System Limits and Constants
 *
 * Centralized location for pool-wide limits and defaults.
 */

use crate::core::types::{Size, WordCount};

/// Pool size ceiling (64Ki words)
/// `initialize` requests above this are rejected with prior state untouched
pub const MAX_POOL_WORDS: WordCount = 65536;

/// Default word size for `MemoryManager::default` and the demo binary
pub const DEFAULT_WORD_SIZE: Size = 8;

/// Bits per bitmap payload byte
/// Word states are packed eight to a byte, mirrored within each byte
pub const BITMAP_GROUP_BITS: usize = 8;

/// Byte value written over an allocated range
/// Free ranges hold zero; the `free` adjacency probe relies on this split
pub const ALLOCATED_FILL: u8 = 1;
