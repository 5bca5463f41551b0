// ==============================================
// CROSS-OPERATION INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify structural guarantees across whole operation sequences
// rather than single calls. These span allocator + ring behavior and belong
// here rather than in any single source file.

use ringlist::ds::RingList;
use ringlist::error::ListError;

// ==============================================
// Capacity Conservation
// ==============================================
//
// At every observation point, live entries plus free slots must equal the
// configured capacity, whatever sequence of operations ran before.

#[test]
fn conservation_holds_through_mixed_sequence() {
    let mut list: RingList<u32, u32> = RingList::new(5);
    let mut live: Vec<usize> = Vec::new();

    let script: &[(u8, u32)] = &[
        (0, 1),
        (1, 2),
        (0, 3),
        (2, 0), // remove oldest tracked
        (1, 4),
        (0, 5),
        (1, 6),
        (2, 1),
        (2, 0),
        (1, 7),
    ];

    for &(op, v) in script {
        match op {
            0 => {
                let handle = list.push_front(v, v).unwrap();
                live.push(handle.index());
            }
            1 => {
                let handle = list.push_back(v, v).unwrap();
                live.push(handle.index());
            }
            _ => {
                let idx = live.remove(v as usize % live.len());
                let handle = list.entry(idx).unwrap();
                list.remove(handle).unwrap();
            }
        }
        assert_eq!(
            list.len() + list.free_slots(),
            list.capacity(),
            "conservation violated after op ({op}, {v})"
        );
        list.check_invariants().unwrap();
    }
}

#[test]
fn conservation_holds_across_exhaustion_and_drain() {
    let mut list: RingList<u32, u32> = RingList::new(3);

    for i in 0..3 {
        list.push_back(i, i).unwrap();
    }
    assert_eq!(list.push_back(9, 9), Err(ListError::PoolExhausted));
    assert_eq!(list.len() + list.free_slots(), 3);

    while let Some(idx) = list.front_index() {
        let handle = list.entry(idx).unwrap();
        list.remove(handle).unwrap();
        assert_eq!(list.len() + list.free_slots(), 3);
        list.check_invariants().unwrap();
    }
    assert!(list.is_empty());
    assert_eq!(list.free_slots(), 3);
}

// ==============================================
// Ring Closure
// ==============================================
//
// Walking forward from the head exactly len steps must land back on the
// head; likewise backward from the tail. check_invariants performs both
// walks, so exercising it after reordering churn covers the property.

#[test]
fn ring_closes_after_reordering_churn() {
    let mut list: RingList<u32, u32> = RingList::new(8);
    let mut indices = Vec::new();
    for i in 0..8 {
        indices.push(list.push_back(i, i).unwrap().index());
    }

    for round in 0..32usize {
        let idx = indices[round % indices.len()];
        let handle = list.entry(idx).unwrap();
        if round % 2 == 0 {
            list.move_to_front(handle).unwrap();
        } else {
            list.move_to_back(handle).unwrap();
        }
        list.check_invariants().unwrap();
        assert_eq!(list.iter().count(), 8);
    }
}

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// A zero-capacity list is honored, not coerced to capacity 1: it reports
// capacity 0 and every insertion fails with PoolExhausted.

#[test]
fn capacity_zero_is_honored() {
    let mut list: RingList<&str, i32> = RingList::new(0);

    assert_eq!(
        list.capacity(),
        0,
        "RingList::new(0) should honor capacity=0, not coerce to {}",
        list.capacity()
    );
    assert_eq!(list.push_back("key", 42), Err(ListError::PoolExhausted));
    assert_eq!(list.len(), 0);
}

// ==============================================
// Clear Reusability
// ==============================================
//
// clear() resets to empty while keeping the same capacity; the list must
// accept a full load again without reconstruction.

#[test]
fn clear_keeps_full_capacity_usable() {
    let mut list: RingList<u32, u32> = RingList::new(4);
    for i in 0..4 {
        list.push_back(i, i).unwrap();
    }
    list.clear();

    for i in 10..14 {
        list.push_back(i, i).unwrap();
    }
    let values: Vec<u32> = list.iter().copied().collect();
    assert_eq!(values, vec![10, 11, 12, 13]);
    assert_eq!(list.push_back(99, 99), Err(ListError::PoolExhausted));
    list.check_invariants().unwrap();
}

// ==============================================
// Stale Handle Rejection
// ==============================================

#[test]
fn handles_go_stale_across_unrelated_mutations() {
    let mut list: RingList<u32, u32> = RingList::new(4);
    let a = list.push_back(1, 1).unwrap();
    let b = list.push_back(2, 2).unwrap();
    list.push_back(3, 3).unwrap();

    // Removing b rewires a's neighborhood; a's old handle must be rejected.
    let b = list.entry(b.index()).unwrap();
    list.remove(b).unwrap();

    assert_eq!(list.remove(a), Err(ListError::InvalidNode));
    assert_eq!(list.move_to_front(a), Err(ListError::InvalidNode));

    // Re-fetched handle works and the entry is intact.
    let a = list.entry(a.index()).unwrap();
    assert_eq!(list.remove(a), Ok(1));
    list.check_invariants().unwrap();
}
