//! Circular-buffer FIFO queue.
//!
//! A fixed slot array reused through modular indexing: logical element `i`
//! lives at `(head + i) % capacity`, so enqueue and dequeue never shift
//! elements. Growth doubles the slot count (minimum 4) and re-linearizes
//! the live window with the head reset to slot 0.
//!
//! ## Architecture
//!
//! ```text
//!   buf: Vec<Option<T>>      head = 2, len = 3, capacity = 4
//!   ┌─────┬─────┬─────┬─────┐
//!   │ S(d)│ None│ S(b)│ S(c)│      logical order: b, c, d
//!   └─────┴─────┴─────┴─────┘
//!      ▲           ▲
//!      └ tail wraps └ head (front)
//!
//!   grow() re-linearizes:
//!   ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!   │ S(b)│ S(c)│ S(d)│ None│ None│ None│ None│ None│   head = 0
//!   └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! ## Performance
//! - `enqueue` / `dequeue` / `peek`: O(1) amortized
//! - `contains` / `to_vec` / `copy_to`: O(n), wrap-aware, front-to-back
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use crate::error::{Error, Result};
use crate::traits::{Equivalence, NaturalEq};

const MIN_CAPACITY: usize = 4;

#[derive(Debug, Clone)]
/// Circular-buffer FIFO queue; equality for `contains` is injected via `E`.
pub struct RingQueue<T, E = NaturalEq> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
    eq: E,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with no allocated slots.
    pub fn new() -> Self {
        Self::with_equivalence(NaturalEq)
    }

    /// Creates an empty queue with `capacity` pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_equivalence(capacity, NaturalEq)
    }
}

impl<T, E> RingQueue<T, E> {
    /// Creates an empty queue using `eq` for `contains` scans.
    pub fn with_equivalence(eq: E) -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            len: 0,
            eq,
        }
    }

    /// Creates an empty queue with pre-allocated slots and a custom
    /// equivalence.
    pub fn with_capacity_and_equivalence(capacity: usize, eq: E) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self {
            buf,
            head: 0,
            len: 0,
            eq,
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot count.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Slot index of logical element `i`.
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.buf.len()
    }

    /// Appends `value` at the logical tail, growing when full.
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow((self.buf.len() * 2).max(MIN_CAPACITY));
        }
        let tail = self.slot(self.len);
        self.buf[tail] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element.
    ///
    /// Fails with [`Error::EmptyContainer`] when the queue is empty. The
    /// vacated slot is cleared and the head advances with wraparound.
    pub fn dequeue(&mut self) -> Result<T> {
        self.try_dequeue().ok_or(Error::EmptyContainer("dequeue"))
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.try_peek().ok_or(Error::EmptyContainer("peek"))
    }

    /// Removes and returns the front element, or `None` when empty.
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    /// Returns the front element without removing it, or `None` when empty.
    pub fn try_peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Removes every element and clears all slots. Capacity is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.buf {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Re-linearizes into a buffer sized to the current length.
    pub fn trim_excess(&mut self) {
        if self.len < self.buf.len() {
            self.grow(self.len);
        }
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> Iter<'_, T, E> {
        Iter {
            queue: self,
            index: 0,
        }
    }

    /// Moves the live window into a fresh buffer of `capacity` slots with
    /// the head reset to 0. Caller guarantees `capacity >= len`.
    fn grow(&mut self, capacity: usize) {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        for i in 0..self.len {
            let slot = self.slot(i);
            buf[i] = self.buf[slot].take();
        }
        self.buf = buf;
        self.head = 0;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.len <= self.buf.len());
        if !self.buf.is_empty() {
            assert!(self.head < self.buf.len());
        }
        let live = (0..self.len)
            .filter(|&i| self.buf[self.slot(i)].is_some())
            .count();
        assert_eq!(live, self.len);
        let dead = (self.len..self.buf.len())
            .filter(|&i| self.buf[self.slot(i)].is_some())
            .count();
        assert_eq!(dead, 0);
    }
}

impl<T, E: Equivalence<T>> RingQueue<T, E> {
    /// Returns `true` if any queued element equals `value` under the
    /// injected equivalence. Scans in logical order across the wrap.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| self.eq.eq(item, value))
    }
}

impl<T: Clone, E> RingQueue<T, E> {
    /// Collects the elements into a `Vec` in front-to-back order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements in front-to-back order into `dest` starting at
    /// `offset`, tail segment first then the wrapped head segment.
    ///
    /// Fails with [`Error::InvalidArgument`] when the slice past `offset`
    /// cannot hold every element.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<()> {
        let space = dest.len().saturating_sub(offset);
        if space < self.len {
            return Err(Error::invalid_argument(format!(
                "destination has {space} slots past offset {offset}, need {}",
                self.len
            )));
        }
        for (slot, value) in dest[offset..].iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    /// Enqueues the source elements in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RingQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T, E> Extend<T> for RingQueue<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

/// Borrowed iterator over queued elements, front to back.
pub struct Iter<'a, T, E> {
    queue: &'a RingQueue<T, E>,
    index: usize,
}

impl<'a, T, E> Iterator for Iter<'a, T, E> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.queue.len {
            return None;
        }
        let slot = self.queue.slot(self.index);
        self.index += 1;
        self.queue.buf[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T, E> IntoIterator for &'a RingQueue<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
