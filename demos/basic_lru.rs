use ringlist::ds::RingList;
use rustc_hash::FxHashMap;

// Minimal LRU built the intended way: the list keeps recency order
// (front = MRU), the map owns key -> slot index.

fn insert(
    list: &mut RingList<u32, &'static str>,
    index: &mut FxHashMap<u32, usize>,
    key: u32,
    value: &'static str,
) {
    if list.free_slots() == 0 {
        let tail = list.back_index().unwrap();
        let (&evicted, _) = list.get(tail).unwrap();
        let handle = list.entry(tail).unwrap();
        list.remove(handle).unwrap();
        index.remove(&evicted);
        println!("evicted {evicted}");
    }
    let handle = list.push_front(key, value).unwrap();
    index.insert(key, handle.index());
}

fn main() {
    let mut list: RingList<u32, &'static str> = RingList::new(2);
    let mut index: FxHashMap<u32, usize> = FxHashMap::default();

    insert(&mut list, &mut index, 1, "alpha");
    insert(&mut list, &mut index, 2, "beta");

    // Access key 1: move to MRU so key 2 becomes the eviction candidate.
    let slot = index[&1];
    let handle = list.entry(slot).unwrap();
    list.move_to_front(handle).unwrap();
    if let Ok((_, value)) = list.get(slot) {
        println!("hit 1: {value}");
    }

    insert(&mut list, &mut index, 3, "gamma");

    println!("contains 2? {}", index.contains_key(&2));
}

// Expected output:
// hit 1: alpha
// evicted 2
// contains 2? false
//
// Explanation: capacity=2; after touching key 1, key 2 is least recently
// used, so inserting key 3 evicts it. The list itself never evicts — the
// cache frees a slot before pushing.
