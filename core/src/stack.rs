use crate::Vec;
use core::fmt;
use thiserror::Error;

/// Default maximum depth of an evaluator stack.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Returned by [`Stack::push`] when the stack is already at its maximum depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack is full (maximum depth {max_size})")]
pub struct StackFull {
    pub max_size: usize,
}

/// A last-in-first-out stack with an enforced maximum depth.
///
/// Values can only be added or removed at the top. Every mutating operation
/// either succeeds completely or leaves the stack untouched, so callers never
/// observe a half-applied change.
///
/// # Examples
///
/// ```
/// use rpncalc_core::stack::Stack;
///
/// let mut stack = Stack::new(100);
/// stack.push(42).unwrap();
/// stack.push(17).unwrap();
/// assert_eq!(stack.pop(), Some(17));
/// assert_eq!(stack.peek(), Some(&42));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// The underlying storage, bottom first.
    items: Vec<T>,
    /// Maximum number of elements the stack will hold.
    max_size: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack that holds at most `max_size` elements.
    ///
    /// Pre-allocates a modest amount of space (at most 256 slots) so that
    /// typical sessions never reallocate.
    pub fn new(max_size: usize) -> Self {
        let initial_capacity = max_size.min(256);

        Self {
            items: Vec::with_capacity(initial_capacity),
            max_size,
        }
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// Fails without modifying the stack if it already holds `max_size`
    /// elements.
    ///
    /// ```
    /// use rpncalc_core::stack::{Stack, StackFull};
    ///
    /// let mut stack = Stack::new(1);
    /// assert_eq!(stack.push(1), Ok(()));
    /// assert_eq!(stack.push(2), Err(StackFull { max_size: 1 }));
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), StackFull> {
        if self.items.len() >= self.max_size {
            return Err(StackFull {
                max_size: self.max_size,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Replaces the top `n` values with a single `value`.
    ///
    /// Returns `false` and leaves the stack unchanged when `n` is zero or
    /// fewer than `n` values are present. Since at least one value is removed
    /// the depth limit can never be exceeded.
    ///
    /// ```
    /// use rpncalc_core::stack::Stack;
    ///
    /// let mut stack = Stack::new(10);
    /// stack.push(3).unwrap();
    /// assert!(!stack.replace_top(2, 0));
    /// assert_eq!(stack.as_slice(), &[3]);
    ///
    /// stack.push(4).unwrap();
    /// assert!(stack.replace_top(2, 7));
    /// assert_eq!(stack.as_slice(), &[7]);
    /// ```
    pub fn replace_top(&mut self, n: usize, value: T) -> bool {
        let len = self.items.len();
        if n == 0 || n > len {
            return false;
        }
        self.items.truncate(len - n);
        self.items.push(value);
        true
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the element `offset` positions below the top.
    ///
    /// `offset = 0` is the top element (same as [`peek`](Self::peek)).
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<&T> {
        let len = self.items.len();
        if offset >= len {
            None
        } else {
            Some(&self.items[len - 1 - offset])
        }
    }

    /// Returns the top `n` elements, ordered bottom to top (so `slice[n-1]`
    /// is the top of the stack).
    ///
    /// Returns `None` if there are fewer than `n` elements on the stack.
    #[inline]
    pub fn top_n(&self, n: usize) -> Option<&[T]> {
        let len = self.items.len();
        if n > len {
            None
        } else {
            Some(&self.items[len - n..])
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of elements the stack accepts.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Iterates from the bottom of the stack to the top.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// Iterates from the top of the stack (most recently pushed) to the bottom.
    #[inline]
    pub fn iter_top_first(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter().rev()
    }

    /// The stack contents as a slice, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}
