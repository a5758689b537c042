/*!
 * Core Types
 * Common types used across the pool allocator
 */

/// Address type for pool operations
///
/// Addresses handed out by `allocate` are opaque byte offsets into the pool
/// buffer, valid until the matching `free` or the next `shutdown`.
pub type Address = usize;

/// Size type for byte quantities
pub type Size = usize;

/// Count of words (word = `word_size` bytes, fixed per manager instance)
pub type WordCount = usize;

/// Offset in word units from the start of the pool
pub type WordOffset = usize;
