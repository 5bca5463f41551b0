//! ringlist: fixed-capacity ordering primitives for eviction caches.
//!
//! The core type is [`ds::RingList`], an array-backed doubly linked list
//! with O(1) insertion, removal, and reordering and no per-operation heap
//! allocation. It pairs with an external key index (e.g. a hash map) to
//! build LRU/LFU-style caches; see `DESIGN.md` for internals and invariants.

pub mod ds;
pub mod error;
pub mod prelude;
