//! Fixed-capacity doubly linked list backed by an index arena.
//!
//! Stores entries in a pre-allocated slot array and links them by index,
//! giving O(1) push/insert/remove/move with no per-operation heap
//! allocation. Free slots are recycled through a [`FreeStack`].
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Option<Node<K, V>>>, fixed length = capacity)
//!   ┌───────┬──────────────────────────────────────────────┐
//!   │ index │ Node { key, value, tag, prev, next }         │
//!   ├───────┼──────────────────────────────────────────────┤
//!   │   0   │ Some { key: A, prev: 2, next: 1 }            │
//!   │   1   │ Some { key: B, prev: 0, next: 2 }            │
//!   │   2   │ Some { key: C, prev: 1, next: 0 }            │
//!   │   3   │ None  (free, on the FreeStack)               │
//!   └───────┴──────────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [1] ◄──► [2] ◄── tail
//!             ▲                 │
//!             └─────── ring ────┘   (tail.next == head)
//! ```
//!
//! Internally the live entries form a closed ring — the tail's successor is
//! the head — so front and back insertion share one splice path. Public
//! traversal is linear: `iter` walks head to tail exactly `len` steps.
//!
//! ## Handles
//!
//! Mutating operations return an [`EntryRef`]: the entry's slot index plus a
//! snapshot of its neighbor links. Handle-based operations (`remove`,
//! `move_to_front`, `move_to_back`, insert marks) reject a handle whose
//! snapshot no longer matches the slot's current links, so stale handles —
//! captured before an intervening mutation — fail with
//! [`ListError::InvalidNode`] instead of corrupting the ring. Re-fetch a
//! fresh handle with [`RingList::entry`] after mutating near it.
//!
//! ## Operations
//! - `push_front` / `push_back`: take a free slot, splice at an end
//! - `insert_before` / `insert_after`: splice next to a live mark
//! - `remove`: unlink + return the slot to the free stack
//! - `move_to_front` / `move_to_back`: re-splice, slot index unchanged
//!
//! ## Performance
//! - all mutations: O(1)
//! - `iter`: O(n)
//!
//! The list never evicts or grows on its own: insertion into a full list
//! fails with [`ListError::PoolExhausted`] and the caller decides what to
//! remove. `debug_validate_invariants()` is available in debug/test builds.
use parking_lot::RwLock;
use rustc_hash::FxHashSet;

use crate::ds::free_stack::FreeStack;
use crate::error::{ConfigError, InvariantError, ListError};

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    tag: u64,
    prev: usize,
    next: usize,
}

/// Handle to a live entry: slot index plus a snapshot of its links.
///
/// Returned by insertions and by [`RingList::entry`]. The snapshot is taken
/// at hand-out time; once any mutation touches the entry's neighborhood the
/// handle goes stale and handle-based operations reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryRef {
    index: usize,
    prev: usize,
    next: usize,
}

impl EntryRef {
    /// Returns the slot index this handle refers to.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
/// Fixed-capacity doubly linked list over an index arena.
///
/// Capacity is fixed at construction; exhaustion is reported, never resolved
/// by growth or eviction. Keys, values, and the numeric tag are opaque
/// payload — the list only maintains order.
///
/// # Example
///
/// ```
/// use ringlist::ds::RingList;
///
/// let mut list = RingList::new(3);
/// list.push_back("a", 1).unwrap();
/// list.push_back("b", 2).unwrap();
/// list.push_back("c", 3).unwrap();
///
/// let values: Vec<u32> = list.iter().copied().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub struct RingList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: FreeStack,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, V> RingList<K, V> {
    /// Creates a list with `capacity` slots.
    ///
    /// A capacity-0 list is permanently exhausted: every insertion fails
    /// with [`ListError::PoolExhausted`].
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            free: FreeStack::new(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a list with `capacity` slots, rejecting `capacity == 0`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than 0"));
        }
        Ok(Self::new(capacity))
    }

    /// Returns the fixed slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of currently free slots.
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` if `index` names a live entry.
    pub fn contains(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Returns the key and value at the front, or `None` if the list is empty.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.head.map(|idx| {
            let node = self.node(idx);
            (&node.key, &node.value)
        })
    }

    /// Returns the slot index at the front, or `None` if the list is empty.
    pub fn front_index(&self) -> Option<usize> {
        self.head
    }

    /// Returns the key and value at the back, or `None` if the list is empty.
    pub fn back(&self) -> Option<(&K, &V)> {
        self.tail.map(|idx| {
            let node = self.node(idx);
            (&node.key, &node.value)
        })
    }

    /// Returns the slot index at the back, or `None` if the list is empty.
    pub fn back_index(&self) -> Option<usize> {
        self.tail
    }

    /// Returns a fresh handle for the live entry at `index`.
    ///
    /// This is the re-fetch point after mutations: a handle captured earlier
    /// may be stale, a handle from `entry` reflects the current links.
    pub fn entry(&self, index: usize) -> Result<EntryRef, ListError> {
        let node = self.live_node(index)?;
        Ok(EntryRef {
            index,
            prev: node.prev,
            next: node.next,
        })
    }

    /// Returns the key and value of the live entry at `index`.
    pub fn get(&self, index: usize) -> Result<(&K, &V), ListError> {
        let node = self.live_node(index)?;
        Ok((&node.key, &node.value))
    }

    /// Returns a mutable reference to the value of the live entry at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut V, ListError> {
        let node = self.live_node_mut(index)?;
        Ok(&mut node.value)
    }

    /// Returns the tag of the live entry at `index`.
    pub fn tag(&self, index: usize) -> Result<u64, ListError> {
        Ok(self.live_node(index)?.tag)
    }

    /// Sets the tag of the live entry at `index`.
    ///
    /// The tag is passive storage (e.g. a secondary hash) and never affects
    /// ordering.
    pub fn set_tag(&mut self, index: usize, tag: u64) -> Result<(), ListError> {
        self.live_node_mut(index)?.tag = tag;
        Ok(())
    }

    /// Overwrites key, value, and tag of the live entry at `index` in place.
    ///
    /// Links and list position are untouched.
    pub fn update_entry(&mut self, index: usize, key: K, value: V, tag: u64) -> Result<(), ListError> {
        let node = self.live_node_mut(index)?;
        node.key = key;
        node.value = value;
        node.tag = tag;
        Ok(())
    }

    /// Inserts a new entry at the front.
    ///
    /// Fails with [`ListError::PoolExhausted`] when no slot is free.
    pub fn push_front(&mut self, key: K, value: V) -> Result<EntryRef, ListError> {
        let idx = self.free.acquire().ok_or(ListError::PoolExhausted)?;
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.slots[idx] = Some(Node {
                    key,
                    value,
                    tag: 0,
                    prev: tail,
                    next: head,
                });
                self.node_mut(head).prev = idx;
                self.node_mut(tail).next = idx;
                self.head = Some(idx);
            }
            _ => {
                // First entry: a self-referencing ring.
                self.slots[idx] = Some(Node {
                    key,
                    value,
                    tag: 0,
                    prev: idx,
                    next: idx,
                });
                self.head = Some(idx);
                self.tail = Some(idx);
            }
        }
        self.len += 1;
        Ok(self.handle(idx))
    }

    /// Inserts a new entry at the back.
    ///
    /// Fails with [`ListError::PoolExhausted`] when no slot is free.
    pub fn push_back(&mut self, key: K, value: V) -> Result<EntryRef, ListError> {
        let idx = self.free.acquire().ok_or(ListError::PoolExhausted)?;
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.slots[idx] = Some(Node {
                    key,
                    value,
                    tag: 0,
                    prev: tail,
                    next: head,
                });
                self.node_mut(tail).next = idx;
                self.node_mut(head).prev = idx;
                self.tail = Some(idx);
            }
            _ => {
                self.slots[idx] = Some(Node {
                    key,
                    value,
                    tag: 0,
                    prev: idx,
                    next: idx,
                });
                self.head = Some(idx);
                self.tail = Some(idx);
            }
        }
        self.len += 1;
        Ok(self.handle(idx))
    }

    /// Inserts a new entry immediately before `mark`.
    ///
    /// The mark is validated before a slot is taken, so a rejected mark
    /// allocates nothing. If `mark` is the head, the new entry becomes the
    /// head.
    pub fn insert_before(&mut self, key: K, value: V, mark: EntryRef) -> Result<EntryRef, ListError> {
        self.validate_handle(&mark)?;
        let idx = self.free.acquire().ok_or(ListError::PoolExhausted)?;
        let mark_prev = self.node(mark.index).prev;
        self.slots[idx] = Some(Node {
            key,
            value,
            tag: 0,
            prev: mark_prev,
            next: mark.index,
        });
        self.node_mut(mark_prev).next = idx;
        self.node_mut(mark.index).prev = idx;
        if self.head == Some(mark.index) {
            self.head = Some(idx);
        }
        self.len += 1;
        Ok(self.handle(idx))
    }

    /// Inserts a new entry immediately after `mark`.
    ///
    /// Same validation and allocation rules as [`insert_before`]. If `mark`
    /// is the tail, the new entry becomes the tail.
    ///
    /// [`insert_before`]: RingList::insert_before
    pub fn insert_after(&mut self, key: K, value: V, mark: EntryRef) -> Result<EntryRef, ListError> {
        self.validate_handle(&mark)?;
        let idx = self.free.acquire().ok_or(ListError::PoolExhausted)?;
        let mark_next = self.node(mark.index).next;
        self.slots[idx] = Some(Node {
            key,
            value,
            tag: 0,
            prev: mark.index,
            next: mark_next,
        });
        self.node_mut(mark_next).prev = idx;
        self.node_mut(mark.index).next = idx;
        if self.tail == Some(mark.index) {
            self.tail = Some(idx);
        }
        self.len += 1;
        Ok(self.handle(idx))
    }

    /// Removes the entry `entry` refers to and returns its value.
    ///
    /// The slot is cleared and returned to the free stack; any handle to it
    /// is stale from here on. Fails with [`ListError::InvalidNode`] on an
    /// out-of-range index, a free slot, or a stale link snapshot.
    pub fn remove(&mut self, entry: EntryRef) -> Result<V, ListError> {
        self.validate_handle(&entry)?;
        let idx = entry.index;
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;

        if self.head == Some(idx) {
            self.head = Some(next);
        }
        if self.tail == Some(idx) {
            self.tail = Some(prev);
        }

        let node = self.slots[idx].take().expect("live slot missing");
        self.free.release(idx);
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
            self.tail = None;
        }
        Ok(node.value)
    }

    /// Moves the entry to the front; no-op if it already is the front.
    ///
    /// The entry keeps its slot index, so index-based references stay valid
    /// across the move (unlike `remove` + `push_front`). The handle itself
    /// goes stale — re-fetch with [`entry`](RingList::entry).
    pub fn move_to_front(&mut self, entry: EntryRef) -> Result<(), ListError> {
        self.validate_handle(&entry)?;
        let idx = entry.index;
        if self.head == Some(idx) {
            return Ok(());
        }
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        if self.tail == Some(idx) {
            self.tail = Some(prev);
        }

        // At least two entries remain linked here, so head and tail are set.
        let head = self.head.expect("non-empty list missing head");
        let tail = self.tail.expect("non-empty list missing tail");
        self.node_mut(tail).next = idx;
        self.node_mut(head).prev = idx;
        {
            let node = self.node_mut(idx);
            node.prev = tail;
            node.next = head;
        }
        self.head = Some(idx);
        Ok(())
    }

    /// Moves the entry to the back; no-op if it already is the back.
    ///
    /// Same slot-index stability and validation as
    /// [`move_to_front`](RingList::move_to_front).
    pub fn move_to_back(&mut self, entry: EntryRef) -> Result<(), ListError> {
        self.validate_handle(&entry)?;
        let idx = entry.index;
        if self.tail == Some(idx) {
            return Ok(());
        }
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        if self.head == Some(idx) {
            self.head = Some(next);
        }

        let head = self.head.expect("non-empty list missing head");
        let tail = self.tail.expect("non-empty list missing tail");
        self.node_mut(tail).next = idx;
        self.node_mut(head).prev = idx;
        {
            let node = self.node_mut(idx);
            node.prev = tail;
            node.next = head;
        }
        self.tail = Some(idx);
        Ok(())
    }

    /// Returns an iterator over values from front to back.
    ///
    /// The walk is bounded by `len` steps and stops early if it comes back
    /// around to the head, so it terminates even on a corrupted ring.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Returns an iterator over `(index, &key, &value)` from front to back.
    pub fn iter_entries(&self) -> IterEntries<'_, K, V> {
        IterEntries {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Resets the list to empty. Capacity is kept; the list is immediately
    /// reusable.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free.reset();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Verifies the internal ring structure.
    ///
    /// Checks slot/free conservation, head/tail sentinels, link symmetry,
    /// and that forward and backward walks close after exactly `len` steps.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        if live != self.len {
            return Err(InvariantError::new(format!(
                "live slot count {live} does not match len {}",
                self.len
            )));
        }
        if self.len + self.free.len() != self.capacity() {
            return Err(InvariantError::new(format!(
                "len {} + free {} does not match capacity {}",
                self.len,
                self.free.len(),
                self.capacity()
            )));
        }

        let (head, tail) = match (self.head, self.tail) {
            (None, None) => {
                if self.len != 0 {
                    return Err(InvariantError::new("empty sentinels with live entries"));
                }
                return Ok(());
            }
            (Some(head), Some(tail)) => (head, tail),
            _ => return Err(InvariantError::new("head/tail sentinel mismatch")),
        };
        if self.len == 0 {
            return Err(InvariantError::new("len 0 with non-empty sentinels"));
        }

        let mut seen = FxHashSet::default();
        let mut current = head;
        for _ in 0..self.len {
            if !seen.insert(current) {
                return Err(InvariantError::new(format!(
                    "forward walk revisited slot {current} before closing"
                )));
            }
            let node = self
                .slots
                .get(current)
                .and_then(|slot| slot.as_ref())
                .ok_or_else(|| {
                    InvariantError::new(format!("forward walk reached free slot {current}"))
                })?;
            let next_node = self
                .slots
                .get(node.next)
                .and_then(|slot| slot.as_ref())
                .ok_or_else(|| {
                    InvariantError::new(format!("slot {current} links to free slot {}", node.next))
                })?;
            if next_node.prev != current {
                return Err(InvariantError::new(format!(
                    "link asymmetry: {}.prev != {current}",
                    node.next
                )));
            }
            current = node.next;
        }
        if current != head {
            return Err(InvariantError::new(
                "forward walk did not return to head after len steps",
            ));
        }
        if self.node(head).prev != tail {
            return Err(InvariantError::new("head.prev does not point at tail"));
        }

        let mut current = tail;
        for _ in 0..self.len {
            let node = self
                .slots
                .get(current)
                .and_then(|slot| slot.as_ref())
                .ok_or_else(|| {
                    InvariantError::new(format!("backward walk reached free slot {current}"))
                })?;
            current = node.prev;
        }
        if current != tail {
            return Err(InvariantError::new(
                "backward walk did not return to tail after len steps",
            ));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ring invariant violated: {err}");
        }
    }

    fn handle(&self, index: usize) -> EntryRef {
        let node = self.node(index);
        EntryRef {
            index,
            prev: node.prev,
            next: node.next,
        }
    }

    fn validate_handle(&self, entry: &EntryRef) -> Result<(), ListError> {
        let node = self.live_node(entry.index)?;
        if node.prev != entry.prev || node.next != entry.next {
            return Err(ListError::InvalidNode);
        }
        Ok(())
    }

    fn live_node(&self, index: usize) -> Result<&Node<K, V>, ListError> {
        self.slots
            .get(index)
            .and_then(|slot| slot.as_ref())
            .ok_or(ListError::InvalidNode)
    }

    fn live_node_mut(&mut self, index: usize) -> Result<&mut Node<K, V>, ListError> {
        self.slots
            .get_mut(index)
            .and_then(|slot| slot.as_mut())
            .ok_or(ListError::InvalidNode)
    }

    fn node(&self, index: usize) -> &Node<K, V> {
        self.slots[index].as_ref().expect("live slot missing")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<K, V> {
        self.slots[index].as_mut().expect("live slot missing")
    }
}

/// Iterator over values from front to back.
///
/// Created by [`RingList::iter`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    list: &'a RingList<K, V>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.current?;
        let node = self.list.slots.get(idx)?.as_ref()?;
        self.remaining -= 1;
        self.current = if Some(node.next) == self.list.head {
            None
        } else {
            Some(node.next)
        };
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over `(index, &key, &value)` from front to back.
///
/// Created by [`RingList::iter_entries`].
#[derive(Debug)]
pub struct IterEntries<'a, K, V> {
    list: &'a RingList<K, V>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterEntries<'a, K, V> {
    type Item = (usize, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.current?;
        let node = self.list.slots.get(idx)?.as_ref()?;
        self.remaining -= 1;
        self.current = if Some(node.next) == self.list.head {
            None
        } else {
            Some(node.next)
        };
        Some((idx, &node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterEntries<'_, K, V> {}

#[derive(Debug)]
/// Thread-safe wrapper around `RingList` using a `parking_lot::RwLock`.
///
/// The core list has no internal synchronization by contract; this wrapper
/// serializes every operation under one lock for callers that share the
/// list across threads.
pub struct ConcurrentRingList<K, V> {
    inner: RwLock<RingList<K, V>>,
}

impl<K, V> ConcurrentRingList<K, V> {
    /// Creates a list with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(RingList::new(capacity)),
        }
    }

    /// Creates a list with `capacity` slots, rejecting `capacity == 0`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: RwLock::new(RingList::try_new(capacity)?),
        })
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        let list = self.inner.read();
        list.len()
    }

    /// Returns `true` if there are no live entries.
    pub fn is_empty(&self) -> bool {
        let list = self.inner.read();
        list.is_empty()
    }

    /// Returns the fixed slot count.
    pub fn capacity(&self) -> usize {
        let list = self.inner.read();
        list.capacity()
    }

    /// Returns the number of currently free slots.
    pub fn free_slots(&self) -> usize {
        let list = self.inner.read();
        list.free_slots()
    }

    /// Returns `true` if `index` names a live entry.
    pub fn contains(&self, index: usize) -> bool {
        let list = self.inner.read();
        list.contains(index)
    }

    /// Inserts a new entry at the front.
    pub fn push_front(&self, key: K, value: V) -> Result<EntryRef, ListError> {
        let mut list = self.inner.write();
        list.push_front(key, value)
    }

    /// Tries to insert at the front without blocking.
    pub fn try_push_front(&self, key: K, value: V) -> Option<Result<EntryRef, ListError>> {
        let mut list = self.inner.try_write()?;
        Some(list.push_front(key, value))
    }

    /// Inserts a new entry at the back.
    pub fn push_back(&self, key: K, value: V) -> Result<EntryRef, ListError> {
        let mut list = self.inner.write();
        list.push_back(key, value)
    }

    /// Tries to insert at the back without blocking.
    pub fn try_push_back(&self, key: K, value: V) -> Option<Result<EntryRef, ListError>> {
        let mut list = self.inner.try_write()?;
        Some(list.push_back(key, value))
    }

    /// Removes the entry `entry` refers to and returns its value.
    pub fn remove(&self, entry: EntryRef) -> Result<V, ListError> {
        let mut list = self.inner.write();
        list.remove(entry)
    }

    /// Tries to remove without blocking.
    pub fn try_remove(&self, entry: EntryRef) -> Option<Result<V, ListError>> {
        let mut list = self.inner.try_write()?;
        Some(list.remove(entry))
    }

    /// Moves the entry to the front.
    pub fn move_to_front(&self, entry: EntryRef) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.move_to_front(entry)
    }

    /// Moves the entry to the back.
    pub fn move_to_back(&self, entry: EntryRef) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.move_to_back(entry)
    }

    /// Returns a fresh handle for the live entry at `index`.
    pub fn entry(&self, index: usize) -> Result<EntryRef, ListError> {
        let list = self.inner.read();
        list.entry(index)
    }

    /// Runs `f` on the key and value of the live entry at `index`.
    pub fn get_with<R>(&self, index: usize, f: impl FnOnce(&K, &V) -> R) -> Result<R, ListError> {
        let list = self.inner.read();
        let (key, value) = list.get(index)?;
        Ok(f(key, value))
    }

    /// Runs `f` on a mutable reference to the value at `index`.
    pub fn get_mut_with<R>(&self, index: usize, f: impl FnOnce(&mut V) -> R) -> Result<R, ListError> {
        let mut list = self.inner.write();
        let value = list.get_mut(index)?;
        Ok(f(value))
    }

    /// Runs `f` on the front entry, if any.
    pub fn front_with<R>(&self, f: impl FnOnce(&K, &V) -> R) -> Option<R> {
        let list = self.inner.read();
        list.front().map(|(key, value)| f(key, value))
    }

    /// Runs `f` on the back entry, if any.
    pub fn back_with<R>(&self, f: impl FnOnce(&K, &V) -> R) -> Option<R> {
        let list = self.inner.read();
        list.back().map(|(key, value)| f(key, value))
    }

    /// Returns the tag of the live entry at `index`.
    pub fn tag(&self, index: usize) -> Result<u64, ListError> {
        let list = self.inner.read();
        list.tag(index)
    }

    /// Sets the tag of the live entry at `index`.
    pub fn set_tag(&self, index: usize, tag: u64) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.set_tag(index, tag)
    }

    /// Overwrites key, value, and tag of the live entry at `index` in place.
    pub fn update_entry(&self, index: usize, key: K, value: V, tag: u64) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.update_entry(index, key, value, tag)
    }

    /// Resets the list to empty, keeping capacity.
    pub fn clear(&self) {
        let mut list = self.inner.write();
        list.clear();
    }
}
