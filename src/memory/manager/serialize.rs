/*!
 * Free-Space Serialization
 * Word-list snapshot and packed bitmap exports
 */

use super::MemoryManager;
use crate::core::limits::BITMAP_GROUP_BITS;
use crate::memory::types::{MemoryError, MemoryResult, WordList, WordSpan};
use bytes::{BufMut, Bytes, BytesMut};

impl MemoryManager {
    /// Snapshot the free list in word units
    ///
    /// Requires an initialized pool and at least one successful allocation
    /// in the pool's lifetime; the gate stays open even after every block
    /// has been freed again. Each call returns a fresh, caller-owned value.
    pub fn word_list(&self) -> MemoryResult<WordList> {
        if self.pool.is_none() {
            return Err(MemoryError::NotInitialized);
        }
        if !self.ever_allocated {
            return Err(MemoryError::NoAllocations);
        }
        Ok(self.free_list_words())
    }

    /// Ungated word-granular snapshot, sorted ascending by offset
    ///
    /// Hole start and size round up to word granularity independently.
    pub(super) fn free_list_words(&self) -> WordList {
        let spans = self
            .free_list
            .sorted()
            .into_iter()
            .map(|hole| {
                WordSpan::new(
                    hole.start.div_ceil(self.word_size),
                    hole.size.div_ceil(self.word_size),
                )
            })
            .collect();
        WordList::new(spans)
    }

    /// Export per-word allocation state as a packed bitmap
    ///
    /// Scans the raw buffer for maximal allocated/free byte runs, converts
    /// each run to a word count by ceiling division, and emits one bit per
    /// word (`1` = allocated). The bitstream is padded to a byte boundary
    /// with zeros and mirrored within each 8-bit group: the first word-state
    /// of a group lands in the least significant bit of its payload byte.
    /// The payload is prefixed with its byte length as a 2-byte
    /// little-endian integer.
    pub fn bitmap(&self) -> MemoryResult<Bytes> {
        let pool = self.pool.as_ref().ok_or(MemoryError::NotInitialized)?;

        // Maximal byte runs, each rounded to words on its own
        let mut runs: Vec<(usize, bool)> = Vec::new();
        let mut iter = pool.as_slice().iter();
        if let Some(first) = iter.next() {
            let mut state = *first != 0;
            let mut length = 1usize;
            for byte in iter {
                let allocated = *byte != 0;
                if allocated == state {
                    length += 1;
                } else {
                    runs.push((pool.words_for(length), state));
                    state = allocated;
                    length = 1;
                }
            }
            runs.push((pool.words_for(length), state));
        }

        let total_bits: usize = runs.iter().map(|(words, _)| words).sum();
        let mut payload = vec![0u8; total_bits.div_ceil(BITMAP_GROUP_BITS)];

        let mut bit = 0usize;
        for (words, allocated) in runs {
            if allocated {
                for index in bit..bit + words {
                    payload[index / BITMAP_GROUP_BITS] |= 1 << (index % BITMAP_GROUP_BITS);
                }
            }
            bit += words;
        }

        let mut buf = BytesMut::with_capacity(2 + payload.len());
        buf.put_u16_le(payload.len() as u16);
        buf.put_slice(&payload);
        Ok(buf.freeze())
    }
}
