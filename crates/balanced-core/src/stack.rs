//! Last-in-first-out container.

/// A growable LIFO stack backed by a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push `item` as the new top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Check if the stack holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Stack<char> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut stack: Stack<i32> = Stack::default();
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_returns_last_pushed() {
        let mut stack = Stack::new();
        stack.push('(');
        stack.push('[');
        stack.push('{');
        assert_eq!(stack.pop(), Some('{'));
        assert_eq!(stack.pop(), Some('['));
        assert_eq!(stack.pop(), Some('('));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_equal_pushes_and_pops_leave_empty() {
        let mut stack = Stack::new();
        for p in 0..32 {
            for i in 0..p {
                stack.push(i);
            }
            for _ in 0..p {
                assert!(stack.pop().is_some());
            }
            assert!(stack.is_empty(), "not empty after {p} pushes and pops");
        }
    }

    #[test]
    fn test_is_empty_does_not_mutate() {
        let mut stack = Stack::new();
        stack.push(1);
        assert!(!stack.is_empty());
        assert!(!stack.is_empty());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&1));
    }

    #[test]
    fn test_pop_after_drain_keeps_returning_none() {
        let mut stack = Stack::new();
        stack.push("a");
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }
}
