//! Error types for the ringlist library.
//!
//! ## Key Components
//!
//! - [`ListError`]: Returned by mutating list operations — either the slot
//!   pool ran out ([`ListError::PoolExhausted`]) or a supplied handle no
//!   longer names a live entry ([`ListError::InvalidNode`]).
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity).
//! - [`InvariantError`]: Returned by [`check_invariants`] when the internal
//!   ring structure is inconsistent.
//!
//! Empty-list peeks (`front`/`back`) return `Option`, never an error: an
//! empty list is a normal state, not a fault.
//!
//! [`check_invariants`]: crate::ds::RingList::check_invariants
//!
//! ## Example Usage
//!
//! ```
//! use ringlist::ds::RingList;
//! use ringlist::error::ListError;
//!
//! let mut list: RingList<&str, u32> = RingList::new(1);
//! list.push_back("a", 1).unwrap();
//!
//! // The pool is exhausted; the caller decides whether to evict and retry.
//! assert_eq!(list.push_back("b", 2).unwrap_err(), ListError::PoolExhausted);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ListError
// ---------------------------------------------------------------------------

/// Error returned by mutating operations on [`RingList`](crate::ds::RingList).
///
/// Every failed operation leaves the list state untouched: a rejected
/// insertion has not allocated a slot and a rejected handle has not been
/// unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// No free slot is available for an insertion. Capacity is fixed at
    /// construction; the caller must remove an entry before retrying.
    PoolExhausted,
    /// A handle or slot index is out of bounds, names a free slot, or its
    /// cached neighbor links disagree with the slot's current links
    /// (stale handle use after an intervening mutation).
    InvalidNode,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::PoolExhausted => f.write_str("slot pool exhausted"),
            ListError::InvalidNode => f.write_str("invalid or stale node handle"),
        }
    }
}

impl std::error::Error for ListError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`RingList::try_new`](crate::ds::RingList::try_new). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use ringlist::ds::RingList;
///
/// let err = RingList::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal ring invariants are violated.
///
/// Produced by [`RingList::check_invariants`](crate::ds::RingList::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ListError --------------------------------------------------------

    #[test]
    fn list_error_display() {
        assert_eq!(ListError::PoolExhausted.to_string(), "slot pool exhausted");
        assert_eq!(
            ListError::InvalidNode.to_string(),
            "invalid or stale node handle"
        );
    }

    #[test]
    fn list_error_copy_and_eq() {
        let a = ListError::PoolExhausted;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(ListError::PoolExhausted, ListError::InvalidNode);
    }

    #[test]
    fn list_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ListError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("ring walk did not return to head");
        assert_eq!(err.to_string(), "ring walk did not return to head");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("bad link");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad link"));
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
