/*!
 * Memory Management
 *
 * Simulated word-addressed allocator over a fixed-size byte pool.
 *
 * ## Model
 *
 * - **Pool**: owned, zero-initialized byte buffer of `word_size * words`
 *   bytes, created by `initialize` and dropped by `shutdown`
 * - **Free list / block list**: extent collections that exactly partition
 *   the pool; only `allocate` and `free` mutate them
 * - **Placement policy**: pluggable hole selection over a word-granular
 *   snapshot of the free list; best-fit and worst-fit built in, swappable
 *   at runtime
 * - **Exports**: word-list snapshot, packed bitmap, and an ASCII memory map
 *   dump
 *
 * The manager is a single-threaded state machine: mutating operations take
 * `&mut self` and callers serialize access externally.
 */

mod allocator;
mod free_list;
mod pool;
mod serialize;

use crate::core::limits::{DEFAULT_WORD_SIZE, MAX_POOL_WORDS};
use crate::core::types::{Address, Size, WordCount};
use crate::memory::policy::BestFit;
use crate::memory::traits::{Allocator, MemoryInfo, PlacementPolicy};
use crate::memory::types::{Extent, MemoryError, MemoryResult, MemoryStats};
use free_list::{BlockList, FreeList};
use log::info;
use pool::Pool;

/// Word-addressed pool allocator
pub struct MemoryManager {
    word_size: Size,
    pool: Option<Pool>,
    free_list: FreeList,
    block_list: BlockList,
    policy: Box<dyn PlacementPolicy>,
    // Sticky: set by the first successful allocate, cleared only by
    // initialize/shutdown. Gates the word-list export.
    ever_allocated: bool,
}

impl MemoryManager {
    /// Create a manager with the best-fit policy
    ///
    /// # Panics
    ///
    /// Panics if `word_size` is zero.
    pub fn new(word_size: Size) -> Self {
        Self::with_policy(word_size, Box::new(BestFit))
    }

    /// Create a manager with a custom placement policy
    ///
    /// # Panics
    ///
    /// Panics if `word_size` is zero.
    pub fn with_policy(word_size: Size, policy: Box<dyn PlacementPolicy>) -> Self {
        assert!(word_size > 0, "word size must be nonzero");
        Self {
            word_size,
            pool: None,
            free_list: FreeList::default(),
            block_list: BlockList::default(),
            policy,
            ever_allocated: false,
        }
    }

    /// Build the pool and reset all bookkeeping
    ///
    /// Rejects requests above [`MAX_POOL_WORDS`] with prior state untouched.
    /// Re-initializing an initialized manager shuts it down first. A
    /// zero-word request degenerates to the shutdown state.
    pub fn initialize(&mut self, size_in_words: WordCount) -> MemoryResult<()> {
        if size_in_words > MAX_POOL_WORDS {
            return Err(MemoryError::CapacityExceeded {
                requested_words: size_in_words,
                limit_words: MAX_POOL_WORDS,
            });
        }

        if self.pool.is_some() {
            self.shutdown();
        }
        if size_in_words == 0 {
            return Ok(());
        }

        let pool = Pool::new(self.word_size, size_in_words);
        self.free_list.reset(Extent::new(0, pool.len()));
        self.block_list.clear();
        self.ever_allocated = false;
        info!(
            "Pool initialized: {} words x {} bytes/word = {} bytes",
            size_in_words,
            self.word_size,
            pool.len()
        );
        self.pool = Some(pool);
        Ok(())
    }

    /// Release the pool and clear all bookkeeping; idempotent
    pub fn shutdown(&mut self) {
        if self.pool.is_none() {
            return;
        }
        self.pool = None;
        self.free_list.clear();
        self.block_list.clear();
        self.ever_allocated = false;
        info!("Pool shut down");
    }

    /// Replace the placement policy, effective from the next allocate
    pub fn set_policy(&mut self, policy: Box<dyn PlacementPolicy>) {
        self.policy = policy;
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.is_some()
    }

    /// Bytes per word, fixed for the manager's lifetime
    pub fn word_size(&self) -> Size {
        self.word_size
    }

    /// Total byte capacity, zero when uninitialized
    pub fn memory_limit(&self) -> Size {
        self.pool.as_ref().map_or(0, Pool::len)
    }

    /// Pool size in words, zero when uninitialized
    pub fn word_count(&self) -> WordCount {
        self.memory_limit() / self.word_size
    }

    /// Borrowed view of the pool bytes, from the pool base
    pub fn memory(&self) -> MemoryResult<&[u8]> {
        self.pool
            .as_ref()
            .map(Pool::as_slice)
            .ok_or(MemoryError::NotInitialized)
    }

    /// Overall pool statistics
    pub fn stats(&self) -> MemoryResult<MemoryStats> {
        let pool = self.pool.as_ref().ok_or(MemoryError::NotInitialized)?;
        let total = pool.len();
        let used = self.block_list.total_allocated();
        Ok(MemoryStats {
            total_bytes: total,
            used_bytes: used,
            available_bytes: total - used,
            usage_percentage: (used as f64 / total as f64) * 100.0,
            allocated_blocks: self.block_list.len(),
            holes: self.free_list.len(),
            largest_hole_bytes: self.free_list.largest(),
        })
    }

    /// Pool usage as (total, used, available)
    pub fn info(&self) -> MemoryResult<(Size, Size, Size)> {
        let stats = self.stats()?;
        Ok((stats.total_bytes, stats.used_bytes, stats.available_bytes))
    }

    /// Check if an address is the start of a live block
    pub fn is_valid(&self, address: Address) -> bool {
        self.block_list.find(address).is_some()
    }

    /// Get the size of a live block
    pub fn block_size(&self, address: Address) -> Option<Size> {
        self.block_list.find(address).map(|i| self.block_list.get(i).size)
    }
}

impl Drop for MemoryManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_SIZE)
    }
}

// Implement trait interfaces
impl Allocator for MemoryManager {
    fn allocate(&mut self, size_in_bytes: Size) -> MemoryResult<Address> {
        MemoryManager::allocate(self, size_in_bytes)
    }

    fn free(&mut self, address: Address) -> MemoryResult<()> {
        MemoryManager::free(self, address)
    }

    fn is_valid(&self, address: Address) -> bool {
        MemoryManager::is_valid(self, address)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        MemoryManager::block_size(self, address)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryResult<MemoryStats> {
        MemoryManager::stats(self)
    }

    fn info(&self) -> MemoryResult<(Size, Size, Size)> {
        MemoryManager::info(self)
    }
}
