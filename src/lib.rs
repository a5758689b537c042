/*!
 * Wordpool Library
 * Simulated word-addressed pool allocator with pluggable placement
 */

pub mod core;
pub mod memory;

// Re-exports
pub use memory::{
    Allocator, BestFit, ByteSink, Extent, FileSink, MemoryError, MemoryInfo, MemoryManager,
    MemoryResult, MemoryStats, PlacementPolicy, WordList, WordSpan, WorstFit,
};
