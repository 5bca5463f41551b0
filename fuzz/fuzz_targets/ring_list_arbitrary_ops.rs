#![no_main]

use libfuzzer_sys::fuzz_target;
use ringlist::ds::RingList;
use ringlist::error::ListError;

// Fuzz arbitrary operation sequences on RingList
//
// Tests random sequences of push_front, push_back, insert_before,
// insert_after, remove, move_to_front, move_to_back, update_entry, get,
// clear operations against the structural invariants.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let mut list: RingList<u32, u32> = RingList::new(capacity);
    // Slot indices of entries we believe are live.
    let mut live: Vec<usize> = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 10;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => match list.push_front(value, value) {
                Ok(handle) => {
                    live.push(handle.index());
                    assert_eq!(list.front_index(), Some(handle.index()));
                }
                Err(err) => {
                    assert_eq!(err, ListError::PoolExhausted);
                    assert_eq!(list.len(), capacity);
                }
            },
            1 => match list.push_back(value, value) {
                Ok(handle) => {
                    live.push(handle.index());
                    assert_eq!(list.back_index(), Some(handle.index()));
                }
                Err(err) => {
                    assert_eq!(err, ListError::PoolExhausted);
                    assert_eq!(list.len(), capacity);
                }
            },
            2 => {
                // remove a tracked entry via a fresh handle
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let slot = live.swap_remove(pick);
                    let handle = list.entry(slot).expect("tracked entry missing");
                    let old_len = list.len();
                    list.remove(handle).expect("fresh handle rejected");
                    assert_eq!(list.len(), old_len - 1);
                    assert!(!list.contains(slot));
                }
            }
            3 => {
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let handle = list.entry(live[pick]).expect("tracked entry missing");
                    list.move_to_front(handle).expect("fresh handle rejected");
                    assert_eq!(list.front_index(), Some(live[pick]));
                }
            }
            4 => {
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let handle = list.entry(live[pick]).expect("tracked entry missing");
                    list.move_to_back(handle).expect("fresh handle rejected");
                    assert_eq!(list.back_index(), Some(live[pick]));
                }
            }
            5 => {
                // insert_before a tracked mark
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let mark = list.entry(live[pick]).expect("tracked entry missing");
                    match list.insert_before(value, value, mark) {
                        Ok(handle) => live.push(handle.index()),
                        Err(err) => assert_eq!(err, ListError::PoolExhausted),
                    }
                }
            }
            6 => {
                // insert_after a tracked mark
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    let mark = list.entry(live[pick]).expect("tracked entry missing");
                    match list.insert_after(value, value, mark) {
                        Ok(handle) => live.push(handle.index()),
                        Err(err) => assert_eq!(err, ListError::PoolExhausted),
                    }
                }
            }
            7 => {
                if !live.is_empty() {
                    let pick = (value as usize) % live.len();
                    list.update_entry(live[pick], value, value, u64::from(value))
                        .expect("tracked entry missing");
                    let (_, stored) = list.get(live[pick]).unwrap();
                    assert_eq!(*stored, value);
                }
            }
            8 => {
                // read-only probes, including indices that may be free
                let probe = (value as usize) % (capacity + 2);
                let _ = list.get(probe);
                let _ = list.contains(probe);
                let _ = list.entry(probe);
            }
            9 => {
                list.clear();
                live.clear();
                assert!(list.is_empty());
                assert_eq!(list.free_slots(), capacity);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), live.len());
        assert_eq!(list.len() + list.free_slots(), capacity);
        assert_eq!(list.iter().count(), list.len());
        list.check_invariants().expect("ring invariant violated");

        idx += 2;
    }
});
