/*!
 * Placement Policies
 * Built-in hole selection strategies
 */

use super::traits::PlacementPolicy;
use super::types::WordList;
use crate::core::types::{WordCount, WordOffset};

/// Selects the smallest hole that still fits the request
///
/// Scans holes in ascending offset order and updates only on a strictly
/// smaller qualifying size, so ties keep the lowest offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl PlacementPolicy for BestFit {
    fn choose(&self, words_needed: WordCount, holes: &WordList) -> Option<WordOffset> {
        let mut best: Option<(WordOffset, WordCount)> = None;
        for span in holes.iter() {
            if span.size < words_needed {
                continue;
            }
            match best {
                Some((_, size)) if span.size >= size => {}
                _ => best = Some((span.offset, span.size)),
            }
        }
        best.map(|(offset, _)| offset)
    }
}

/// Selects the largest hole that fits the request
///
/// Symmetric to [`BestFit`]: updates only on a strictly larger qualifying
/// size, ties keep the lowest offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl PlacementPolicy for WorstFit {
    fn choose(&self, words_needed: WordCount, holes: &WordList) -> Option<WordOffset> {
        let mut worst: Option<(WordOffset, WordCount)> = None;
        for span in holes.iter() {
            if span.size < words_needed {
                continue;
            }
            match worst {
                Some((_, size)) if span.size <= size => {}
                _ => worst = Some((span.offset, span.size)),
            }
        }
        worst.map(|(offset, _)| offset)
    }
}
