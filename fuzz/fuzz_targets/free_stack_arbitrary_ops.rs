#![no_main]

use libfuzzer_sys::fuzz_target;
use ringlist::ds::FreeStack;

// Fuzz arbitrary acquire/release/reset sequences on FreeStack
//
// Checks conservation (held + free == capacity), uniqueness of handed-out
// indices, and LIFO reuse of the most recently released index.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 64);
    let mut stack = FreeStack::new(capacity);
    let mut held: Vec<usize> = Vec::new();

    for &byte in data.iter().skip(1) {
        match byte % 4 {
            0 | 1 => match stack.acquire() {
                Some(idx) => {
                    assert!(idx < capacity);
                    assert!(!held.contains(&idx), "index {idx} handed out twice");
                    held.push(idx);
                }
                None => assert_eq!(held.len(), capacity),
            },
            2 => {
                if !held.is_empty() {
                    let idx = held.swap_remove(usize::from(byte) % held.len());
                    stack.release(idx);
                    // Most recently released comes back first.
                    let back = stack.acquire().expect("just-released index missing");
                    assert_eq!(back, idx);
                    held.push(back);
                }
            }
            _ => {
                stack.reset();
                held.clear();
                assert_eq!(stack.len(), capacity);
            }
        }

        assert_eq!(held.len() + stack.len(), capacity);
    }
});
