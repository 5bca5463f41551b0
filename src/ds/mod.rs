pub mod free_stack;
pub mod ring_list;

pub use free_stack::FreeStack;
#[cfg(feature = "concurrency")]
pub use ring_list::ConcurrentRingList;
pub use ring_list::{EntryRef, Iter, IterEntries, RingList};
