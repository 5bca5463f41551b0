use ringlist::ds::RingList;
use ringlist::error::ListError;

fn main() {
    let mut list: RingList<&str, u32> = RingList::new(3);

    list.push_back("a", 1).unwrap();
    let b = list.push_back("b", 2).unwrap();
    list.push_back("c", 3).unwrap();

    let b = list.entry(b.index()).unwrap();
    list.move_to_front(b).unwrap();

    let order: Vec<u32> = list.iter().copied().collect();
    println!("order: {order:?}");

    match list.push_back("d", 4) {
        Err(ListError::PoolExhausted) => println!("pool exhausted at {}", list.capacity()),
        other => println!("unexpected: {other:?}"),
    }
}

// Expected output:
// order: [2, 1, 3]
// pool exhausted at 3
//
// Explanation: capacity=3; move_to_front(b) reorders without allocating,
// and a fourth push is rejected rather than evicting or growing.
