pub use crate::ds::{EntryRef, FreeStack, RingList};
pub use crate::error::{ConfigError, InvariantError, ListError};

#[cfg(feature = "concurrency")]
pub use crate::ds::ConcurrentRingList;
