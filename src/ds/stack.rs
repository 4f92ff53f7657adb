//! Array-backed LIFO stack with explicit growth and trim control.
//!
//! Elements live in a `Vec` in push order; the top is the last element.
//! Growth doubles the backing capacity (minimum 4 slots) and stays
//! amortized O(1); `trim_excess` gives memory back once the stack drops
//! below 90% occupancy.
//!
//! ## Architecture
//!
//! ```text
//!   buf: Vec<T>
//!   ┌─────┬─────┬─────┬─────┬ ─ ─ ┐
//!   │  a  │  b  │  c  │  d  │     │   push/pop at the right end
//!   └─────┴─────┴─────┴─────┴ ─ ─ ┘
//!     bottom            top   spare capacity
//! ```
//!
//! ## Performance
//! - `push` / `pop` / `peek`: O(1) amortized
//! - `contains`: O(n) scan under the injected [`Equivalence`]
//! - `to_vec` / `copy_to` / iteration: O(n), top-to-bottom (pop order)
use crate::error::{Error, Result};
use crate::traits::{Equivalence, NaturalEq};

const MIN_CAPACITY: usize = 4;

#[derive(Debug, Clone)]
/// Resizable LIFO stack; equality for `contains` is injected via `E`.
pub struct Stack<T, E = NaturalEq> {
    buf: Vec<T>,
    eq: E,
}

impl<T> Stack<T> {
    /// Creates an empty stack with no allocated capacity.
    pub fn new() -> Self {
        Self::with_equivalence(NaturalEq)
    }

    /// Creates an empty stack with at least `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_equivalence(capacity, NaturalEq)
    }
}

impl<T, E> Stack<T, E> {
    /// Creates an empty stack using `eq` for `contains` scans.
    pub fn with_equivalence(eq: E) -> Self {
        Self {
            buf: Vec::new(),
            eq,
        }
    }

    /// Creates an empty stack with reserved capacity and a custom equivalence.
    pub fn with_capacity_and_equivalence(capacity: usize, eq: E) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            eq,
        }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current backing capacity.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Pushes `value` onto the top, doubling the backing storage when full.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.buf.capacity() {
            let target = (self.buf.capacity() * 2).max(MIN_CAPACITY);
            self.buf.reserve_exact(target - self.buf.len());
        }
        self.buf.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// Fails with [`Error::EmptyContainer`] when the stack is empty. The
    /// vacated slot releases its element; nothing stale is retained.
    pub fn pop(&mut self) -> Result<T> {
        self.buf.pop().ok_or(Error::EmptyContainer("pop"))
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.buf.last().ok_or(Error::EmptyContainer("peek"))
    }

    /// Removes and returns the top element, or `None` when empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Returns the top element without removing it, or `None` when empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Removes every element and releases their references. Capacity is
    /// retained.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Shrinks the backing storage to the current length, but only when
    /// occupancy has dropped below 90% of capacity.
    pub fn trim_excess(&mut self) {
        if self.buf.len() < self.buf.capacity() * 9 / 10 {
            self.buf.shrink_to_fit();
        }
    }

    /// Returns an iterator from top to bottom (pop order).
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.buf.iter().rev()
    }
}

impl<T, E: Equivalence<T>> Stack<T, E> {
    /// Returns `true` if any element equals `value` under the injected
    /// equivalence. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.buf.iter().any(|item| self.eq.eq(item, value))
    }
}

impl<T: Clone, E> Stack<T, E> {
    /// Collects the elements into a `Vec` in pop order (top first).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements in pop order into `dest` starting at `offset`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the slice past `offset`
    /// cannot hold every element.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<()> {
        let space = dest.len().saturating_sub(offset);
        if space < self.buf.len() {
            return Err(Error::invalid_argument(format!(
                "destination has {space} slots past offset {offset}, need {}",
                self.buf.len()
            )));
        }
        for (slot, value) in dest[offset..].iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the source elements in iteration order; the last source
    /// element becomes the top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T, E> Extend<T> for Stack<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Stack<T, E> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> IntoIterator for Stack<T, E> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    /// Consumes the stack, yielding elements in pop order.
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter().rev()
    }
}
