/// LIFO stack of reusable slot indices for a fixed-size arena.
///
/// Seeded with every index in `0..capacity`; `acquire` pops the most
/// recently freed index and `release` returns one for reuse. Reuse order
/// is last-freed-first; callers must not rely on anything stronger.
#[derive(Debug, Clone)]
pub struct FreeStack {
    free: Vec<usize>,
    capacity: usize,
}

impl FreeStack {
    /// Creates a stack with all indices in `0..capacity` free.
    pub fn new(capacity: usize) -> Self {
        Self {
            free: (0..capacity).collect(),
            capacity,
        }
    }

    /// Pops a free index, or `None` when the pool is exhausted.
    pub fn acquire(&mut self) -> Option<usize> {
        self.free.pop()
    }

    /// Returns `index` to the pool.
    ///
    /// The caller must have cleared the slot first; a released index may be
    /// handed out again by the very next `acquire`.
    pub fn release(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        debug_assert!(self.free.len() < self.capacity);
        self.free.push(index);
    }

    /// Returns the number of currently free indices.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` if no index is free.
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Returns the total number of indices managed.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Refills the stack to its freshly-constructed state (all indices free).
    pub fn reset(&mut self) {
        self.free.clear();
        self.free.extend(0..self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_stack_acquire_release_conservation() {
        let mut stack = FreeStack::new(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.capacity(), 3);

        let a = stack.acquire().unwrap();
        let b = stack.acquire().unwrap();
        assert_eq!(stack.len(), 1);
        assert_ne!(a, b);

        stack.release(a);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn free_stack_reuse_is_lifo() {
        let mut stack = FreeStack::new(4);
        let a = stack.acquire().unwrap();
        let b = stack.acquire().unwrap();

        stack.release(a);
        stack.release(b);

        // Most recently freed comes back first.
        assert_eq!(stack.acquire(), Some(b));
        assert_eq!(stack.acquire(), Some(a));
    }

    #[test]
    fn free_stack_exhaustion_returns_none() {
        let mut stack = FreeStack::new(2);
        assert!(stack.acquire().is_some());
        assert!(stack.acquire().is_some());
        assert!(stack.is_empty());
        assert_eq!(stack.acquire(), None);
    }

    #[test]
    fn free_stack_zero_capacity_always_exhausted() {
        let mut stack = FreeStack::new(0);
        assert!(stack.is_empty());
        assert_eq!(stack.acquire(), None);
    }

    #[test]
    fn free_stack_reset_refills() {
        let mut stack = FreeStack::new(3);
        stack.acquire();
        stack.acquire();
        stack.reset();
        assert_eq!(stack.len(), 3);

        let mut seen: Vec<usize> = Vec::new();
        while let Some(idx) = stack.acquire() {
            seen.push(idx);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
