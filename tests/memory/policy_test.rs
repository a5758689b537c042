/*!
 * Placement Policy Tests
 * Best-fit and worst-fit placement through the manager, runtime swapping
 */

use pretty_assertions::assert_eq;
use wordpool::{BestFit, MemoryError, MemoryManager, WordList, WorstFit};

/// Carve the hole layout (0,5) (10,3) (20,8) out of a 31-word pool
fn fragmented_manager() -> MemoryManager {
    let mut manager = MemoryManager::new(1);
    manager.initialize(31).unwrap();

    let a = manager.allocate(5).unwrap();
    manager.allocate(5).unwrap();
    let b = manager.allocate(3).unwrap();
    manager.allocate(7).unwrap();
    let c = manager.allocate(8).unwrap();
    manager.allocate(3).unwrap();

    manager.free(a).unwrap();
    manager.free(b).unwrap();
    manager.free(c).unwrap();

    let spans: Vec<(usize, usize)> = manager
        .word_list()
        .unwrap()
        .spans()
        .iter()
        .map(|s| (s.offset, s.size))
        .collect();
    assert_eq!(spans, vec![(0, 5), (10, 3), (20, 8)]);
    manager
}

#[test]
fn test_best_fit_placement() {
    let mut manager = fragmented_manager();
    // Smallest qualifying hole is (0, 5); the size-3 hole never qualifies
    let addr = manager.allocate(4).unwrap();
    assert_eq!(addr, 0);
}

#[test]
fn test_worst_fit_placement() {
    let mut manager = fragmented_manager();
    manager.set_policy(Box::new(WorstFit));
    // Largest qualifying hole is (20, 8)
    let addr = manager.allocate(4).unwrap();
    assert_eq!(addr, 20);
}

#[test]
fn test_policy_swap_takes_effect_on_next_allocate() {
    let mut manager = fragmented_manager();

    let best = manager.allocate(4).unwrap();
    assert_eq!(best, 0);
    manager.free(best).unwrap();

    manager.set_policy(Box::new(WorstFit));
    let worst = manager.allocate(4).unwrap();
    assert_eq!(worst, 20);

    manager.set_policy(Box::new(BestFit));
    let best_again = manager.allocate(4).unwrap();
    assert_eq!(best_again, 0);
}

#[test]
fn test_closure_policy_first_fit() {
    let mut manager = fragmented_manager();
    manager.set_policy(Box::new(|words: usize, holes: &WordList| {
        holes.iter().find(|s| s.size >= words).map(|s| s.offset)
    }));

    // First-fit takes (0, 5) even though best-fit would take (10, 3)
    let addr = manager.allocate(2).unwrap();
    assert_eq!(addr, 0);
}

#[test]
fn test_policy_returning_bogus_offset_is_rejected() {
    let mut manager = fragmented_manager();
    let before = manager.word_list().unwrap();

    manager.set_policy(Box::new(|_words: usize, _holes: &WordList| Some(7usize)));
    let result = manager.allocate(2);
    assert_eq!(
        result,
        Err(MemoryError::OutOfSpace {
            requested_words: 2,
            holes: 3,
        })
    );
    assert_eq!(manager.word_list().unwrap(), before);
}

#[test]
fn test_no_fit_reports_out_of_space() {
    let mut manager = fragmented_manager();
    let result = manager.allocate(9);
    assert_eq!(
        result,
        Err(MemoryError::OutOfSpace {
            requested_words: 9,
            holes: 3,
        })
    );
}

#[test]
fn test_constructor_policy_is_used() {
    let mut manager = MemoryManager::with_policy(1, Box::new(WorstFit));
    manager.initialize(31).unwrap();

    let a = manager.allocate(5).unwrap();
    manager.allocate(5).unwrap();
    let b = manager.allocate(8).unwrap();
    manager.allocate(13).unwrap();
    manager.free(a).unwrap();
    manager.free(b).unwrap();

    // Holes (0, 5) and (10, 8); worst-fit lands in the larger one
    assert_eq!(manager.allocate(2).unwrap(), 10);
}
