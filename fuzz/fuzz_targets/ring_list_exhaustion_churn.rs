#![no_main]

use libfuzzer_sys::fuzz_target;
use ringlist::ds::RingList;
use ringlist::error::ListError;

// Stress fill/drain cycles around the capacity ceiling
//
// Drives the list to exhaustion, verifies rejected pushes change nothing,
// then drains from alternating ends and refills, checking conservation the
// whole way.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut list: RingList<u32, u32> = RingList::new(capacity);

    for (round, &byte) in data.iter().skip(1).enumerate() {
        // Fill to the ceiling.
        let mut next = u32::from(byte);
        while list.len() < capacity {
            list.push_back(next, next).expect("push below capacity failed");
            next = next.wrapping_add(1);
        }

        let before: Vec<u32> = list.iter().copied().collect();
        assert_eq!(list.push_back(next, next), Err(ListError::PoolExhausted));
        assert_eq!(list.push_front(next, next), Err(ListError::PoolExhausted));
        let after: Vec<u32> = list.iter().copied().collect();
        assert_eq!(before, after);

        // Drain a prefix from alternating ends.
        let drain = usize::from(byte) % (capacity + 1);
        for step in 0..drain {
            let end = if (round + step) % 2 == 0 {
                list.front_index()
            } else {
                list.back_index()
            };
            let Some(slot) = end else { break };
            let handle = list.entry(slot).expect("endpoint entry missing");
            list.remove(handle).expect("endpoint removal failed");
            assert_eq!(list.len() + list.free_slots(), capacity);
        }

        list.check_invariants().expect("ring invariant violated");
    }
});
