// ==============================================
// LRU COLLABORATOR TESTS (integration)
// ==============================================
//
// The list never searches by key and never evicts on its own; a cache built
// on top owns the key -> slot index mapping and the eviction policy. These
// tests exercise that contract end to end: an LRU cache that pairs a
// RingList (recency order, front = MRU) with an FxHashMap index.

use rustc_hash::FxHashMap;

use ringlist::ds::RingList;

struct LruCache<V> {
    list: RingList<u64, V>,
    index: FxHashMap<u64, usize>,
}

impl<V> LruCache<V> {
    fn new(capacity: usize) -> Self {
        Self {
            list: RingList::new(capacity),
            index: FxHashMap::default(),
        }
    }

    /// Inserts `key`, evicting the LRU entry first when the pool is full.
    ///
    /// The list reports exhaustion instead of evicting on its own, so the
    /// cache frees a slot before pushing.
    fn insert(&mut self, key: u64, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            self.list.update_entry(slot, key, value, 0).unwrap();
            let handle = self.list.entry(slot).unwrap();
            self.list.move_to_front(handle).unwrap();
            return;
        }
        if self.list.free_slots() == 0 {
            self.evict_lru();
        }
        let handle = self.list.push_front(key, value).unwrap();
        self.index.insert(key, handle.index());
    }

    fn evict_lru(&mut self) {
        let tail = self.list.back_index().expect("evicting from empty cache");
        let (&key, _) = self.list.get(tail).unwrap();
        let handle = self.list.entry(tail).unwrap();
        self.list.remove(handle).unwrap();
        self.index.remove(&key);
    }

    /// Returns the value for `key` and marks it most recently used.
    fn get(&mut self, key: u64) -> Option<&V> {
        let slot = *self.index.get(&key)?;
        let handle = self.list.entry(slot).ok()?;
        self.list.move_to_front(handle).ok()?;
        let (_, value) = self.list.get(slot).ok()?;
        Some(value)
    }

    fn contains(&self, key: u64) -> bool {
        self.index.contains_key(&key)
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

#[test]
fn lru_evicts_least_recently_used() {
    let mut cache = LruCache::new(2);
    cache.insert(1, "alpha");
    cache.insert(2, "beta");

    // Touch key 1 so key 2 becomes the LRU.
    assert_eq!(cache.get(1), Some(&"alpha"));

    cache.insert(3, "gamma");
    assert!(cache.contains(1));
    assert!(!cache.contains(2));
    assert!(cache.contains(3));
    assert_eq!(cache.len(), 2);
}

#[test]
fn lru_update_existing_key_keeps_size() {
    let mut cache = LruCache::new(2);
    cache.insert(1, 10);
    cache.insert(2, 20);
    cache.insert(1, 11);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(1), Some(&11));
    assert!(cache.contains(2));
}

#[test]
fn lru_eviction_order_follows_recency() {
    let mut cache = LruCache::new(3);
    for key in 1..=3 {
        cache.insert(key, key);
    }
    // Recency now 3, 2, 1; touching 1 makes it 1, 3, 2.
    cache.get(1);

    cache.insert(4, 4);
    assert!(!cache.contains(2));

    cache.insert(5, 5);
    assert!(!cache.contains(3));

    assert!(cache.contains(1));
    assert!(cache.contains(4));
    assert!(cache.contains(5));
}

#[test]
fn lru_index_and_list_stay_consistent() {
    let mut cache = LruCache::new(4);
    for key in 0..32 {
        cache.insert(key, key * 10);
        assert!(cache.len() <= 4);
        assert_eq!(cache.len(), cache.index.len());
        cache.list.check_invariants().unwrap();
    }
    // Only the four most recent keys survive.
    for key in 28..32 {
        assert!(cache.contains(key));
    }
    assert!(!cache.contains(27));
}
