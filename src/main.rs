/*!
 * Wordpool Demo - Main Entry Point
 *
 * Small scenario driver for the pool allocator:
 * - Builds a pool and churns a few allocations through it
 * - Swaps the placement policy at runtime
 * - Dumps the memory map and the bitmap export
 */

use log::info;
use std::error::Error;
use std::path::Path;

use wordpool::core::limits::DEFAULT_WORD_SIZE;
use wordpool::{MemoryManager, WorstFit};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    info!("wordpool demo starting...");

    let mut manager = MemoryManager::new(DEFAULT_WORD_SIZE);
    manager.initialize(64)?;
    let (total, _, _) = manager.info()?;
    info!("Pool ready: {} bytes", total);

    let first = manager.allocate(100)?;
    let second = manager.allocate(40)?;
    let third = manager.allocate(256)?;
    info!("Live blocks at offsets {}, {}, {}", first, second, third);

    // Punch a hole in the middle, then fill from the largest hole instead
    manager.free(second)?;
    manager.set_policy(Box::new(WorstFit));
    let fourth = manager.allocate(8)?;
    info!("Worst-fit placed 8 bytes at offset {}", fourth);

    let list = manager.word_list()?;
    info!("Free list: {} holes", list.holes());

    let bitmap = manager.bitmap()?;
    info!("Bitmap export: {} bytes", bitmap.len());

    let dump_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "memory_map.txt".to_string());
    manager.dump_memory_map(Path::new(&dump_path))?;
    info!("Memory map written to {}", dump_path);

    let stats = manager.stats()?;
    info!(
        "Usage: {} / {} bytes ({:.1}%), {} blocks, {} holes",
        stats.used_bytes,
        stats.total_bytes,
        stats.usage_percentage,
        stats.allocated_blocks,
        stats.holes
    );

    manager.shutdown();
    info!("wordpool demo complete");
    Ok(())
}
