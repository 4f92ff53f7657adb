//! Doubly linked list backed by a generational slot arena.
//!
//! Nodes live in an arena of indexed slots and link by index, so "no node"
//! and "single node" need no pointer special-casing. External code addresses
//! nodes through [`NodeId`] handles carrying the slot index, the slot's
//! generation, and the owning list's tag: a handle minted by another list,
//! or kept after its node was removed, fails every node-addressed operation
//! with [`Error::InvalidOperation`] instead of aliasing a reused slot.
//!
//! ## Architecture
//!
//! ```text
//!   slots: Vec<Slot<T>>                      free: [2]
//!   ┌───────┬──────────────────────────────────────────────┐
//!   │ index │ Slot { generation, node }                    │
//!   ├───────┼──────────────────────────────────────────────┤
//!   │   0   │ gen 0, { value: A, prev: -, next: 1 }        │
//!   │   1   │ gen 0, { value: B, prev: 0, next: - }        │
//!   │   2   │ gen 3, vacant (removal bumped generation)    │
//!   └───────┴──────────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [1] ◄── tail
//!
//!   NodeId = (index, generation, list tag)
//! ```
//!
//! ## Operations
//! - `push_front` / `push_back`: O(1), returns a [`NodeId`]
//! - `insert_before` / `insert_after`: O(1) splice at a validated anchor
//! - `remove(id)`: O(1) unlink; invalidates the handle
//! - `find` / `find_last` / `remove_value`: O(n) equivalence scan
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::traits::{Equivalence, NaturalEq};

static NEXT_LIST_TAG: AtomicU64 = AtomicU64::new(1);

/// Handle to a node of a specific [`LinkedList`].
///
/// Valid only while its node is linked in the list that minted it; removal
/// invalidates every copy of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
    list: u64,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

#[derive(Debug)]
/// Doubly linked list with stable, self-invalidating node handles.
pub struct LinkedList<T, E = NaturalEq> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    tag: u64,
    eq: E,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_equivalence(NaturalEq)
    }
}

impl<T, E> LinkedList<T, E> {
    /// Creates an empty list using `eq` for value scans.
    pub fn with_equivalence(eq: E) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            tag: NEXT_LIST_TAG.fetch_add(1, Ordering::Relaxed),
            eq,
        }
    }

    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` addresses a live node of this list.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.check(id).is_ok()
    }

    /// Returns the front value, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| self.value_at(idx))
    }

    /// Returns the back value, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| self.value_at(idx))
    }

    /// Returns the handle of the front node, if any.
    pub fn front_id(&self) -> Option<NodeId> {
        self.head.map(|idx| self.mint(idx))
    }

    /// Returns the handle of the back node, if any.
    pub fn back_id(&self) -> Option<NodeId> {
        self.tail.map(|idx| self.mint(idx))
    }

    /// Returns the value of a live node of this list.
    pub fn get(&self, id: NodeId) -> Result<&T> {
        let idx = self.check(id)?;
        Ok(self.value_at(idx))
    }

    /// Returns a mutable reference to the value of a live node of this list.
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut T> {
        let idx = self.check(id)?;
        Ok(&mut self.node_at_mut(idx).value)
    }

    /// Returns the handle of the node after `id`, or `None` at the back.
    ///
    /// The wraparound link is suppressed: stepping past the last node does
    /// not cycle back to the front.
    pub fn next(&self, id: NodeId) -> Result<Option<NodeId>> {
        let idx = self.check(id)?;
        Ok(self.node_at(idx).next.map(|n| self.mint(n)))
    }

    /// Returns the handle of the node before `id`, or `None` at the front.
    pub fn prev(&self, id: NodeId) -> Result<Option<NodeId>> {
        let idx = self.check(id)?;
        Ok(self.node_at(idx).prev.map(|p| self.mint(p)))
    }

    /// Links a new node holding `value` at the front.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value, None, self.head);
        if let Some(old_head) = self.head {
            self.node_at_mut(old_head).prev = Some(idx);
        } else {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.mint(idx)
    }

    /// Links a new node holding `value` at the back.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value, self.tail, None);
        if let Some(old_tail) = self.tail {
            self.node_at_mut(old_tail).next = Some(idx);
        } else {
            self.head = Some(idx);
        }
        self.tail = Some(idx);
        self.mint(idx)
    }

    /// Links a new node holding `value` immediately after `anchor`.
    ///
    /// Fails with [`Error::InvalidOperation`] when `anchor` is not a live
    /// node of this list.
    pub fn insert_after(&mut self, anchor: NodeId, value: T) -> Result<NodeId> {
        let anchor_idx = self.check(anchor)?;
        let next = self.node_at(anchor_idx).next;
        let idx = self.alloc(value, Some(anchor_idx), next);
        self.node_at_mut(anchor_idx).next = Some(idx);
        match next {
            Some(next_idx) => self.node_at_mut(next_idx).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        Ok(self.mint(idx))
    }

    /// Links a new node holding `value` immediately before `anchor`.
    ///
    /// Fails with [`Error::InvalidOperation`] when `anchor` is not a live
    /// node of this list.
    pub fn insert_before(&mut self, anchor: NodeId, value: T) -> Result<NodeId> {
        let anchor_idx = self.check(anchor)?;
        let prev = self.node_at(anchor_idx).prev;
        let idx = self.alloc(value, prev, Some(anchor_idx));
        self.node_at_mut(anchor_idx).prev = Some(idx);
        match prev {
            Some(prev_idx) => self.node_at_mut(prev_idx).next = Some(idx),
            None => self.head = Some(idx),
        }
        Ok(self.mint(idx))
    }

    /// Unlinks the node addressed by `id` and returns its value.
    ///
    /// Fails with [`Error::InvalidOperation`] when `id` is stale or belongs
    /// to a different list. Every copy of the handle is invalid afterwards.
    pub fn remove(&mut self, id: NodeId) -> Result<T> {
        let idx = self.check(id)?;
        self.detach(idx);
        Ok(self.release(idx))
    }

    /// Unlinks and returns the front value.
    ///
    /// Fails with [`Error::EmptyContainer`] on an empty list.
    pub fn pop_front(&mut self) -> Result<T> {
        let idx = self.head.ok_or(Error::EmptyContainer("pop_front"))?;
        self.detach(idx);
        Ok(self.release(idx))
    }

    /// Unlinks and returns the back value.
    ///
    /// Fails with [`Error::EmptyContainer`] on an empty list.
    pub fn pop_back(&mut self) -> Result<T> {
        let idx = self.tail.ok_or(Error::EmptyContainer("pop_back"))?;
        self.detach(idx);
        Ok(self.release(idx))
    }

    /// Unlinks every node in one pass and invalidates all handles.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.node.take().is_some() {
                slot.generation += 1;
            }
        }
        self.free.clear();
        self.free.extend(0..self.slots.len());
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T, E> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Validates that `id` addresses a live node of this list.
    fn check(&self, id: NodeId) -> Result<usize> {
        if id.list != self.tag {
            return Err(Error::invalid_operation(
                "node handle belongs to a different list",
            ));
        }
        let live = self
            .slots
            .get(id.index)
            .is_some_and(|slot| slot.generation == id.generation && slot.node.is_some());
        if !live {
            return Err(Error::invalid_operation(
                "node handle no longer addresses a linked node",
            ));
        }
        Ok(id.index)
    }

    fn mint(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
            list: self.tag,
        }
    }

    fn node_at(&self, index: usize) -> &Node<T> {
        self.slots[index].node.as_ref().unwrap()
    }

    fn node_at_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index].node.as_mut().unwrap()
    }

    fn value_at(&self, index: usize) -> &T {
        &self.node_at(index).value
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node { value, prev, next };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].node = Some(node);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        };
        self.len += 1;
        idx
    }

    /// Splices the node's neighbors together, reseating head/tail as needed.
    fn detach(&mut self, index: usize) {
        let (prev, next) = {
            let node = self.node_at(index);
            (node.prev, node.next)
        };
        match prev {
            Some(prev_idx) => self.node_at_mut(prev_idx).next = next,
            None => self.head = next,
        }
        match next {
            Some(next_idx) => self.node_at_mut(next_idx).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Frees the detached node's slot, bumping its generation so stale
    /// handles never alias the reused slot.
    fn release(&mut self, index: usize) -> T {
        let node = self.slots[index].node.take().unwrap();
        self.slots[index].generation += 1;
        self.free.push(index);
        self.len -= 1;
        node.value
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut count = 0usize;
        let mut cursor = self.head;
        let mut prev = None;
        while let Some(idx) = cursor {
            let node = self.node_at(idx);
            assert_eq!(node.prev, prev);
            prev = Some(idx);
            cursor = node.next;
            count += 1;
            assert!(count <= self.len);
        }
        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);

        let live = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        assert_eq!(live, self.len);
    }
}

impl<T, E: Equivalence<T>> LinkedList<T, E> {
    /// Unlinks the first node whose value matches under the injected
    /// equivalence. Returns `true` if a node was removed.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.find_index(value) {
            Some(idx) => {
                self.detach(idx);
                self.release(idx);
                true
            }
            None => false,
        }
    }

    /// Scans forward from the front for the first matching value.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        self.find_index(value).map(|idx| self.mint(idx))
    }

    /// Scans backward from the back for the first matching value.
    pub fn find_last(&self, value: &T) -> Option<NodeId> {
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            let node = self.node_at(idx);
            if self.eq.eq(&node.value, value) {
                return Some(self.mint(idx));
            }
            cursor = node.prev;
        }
        None
    }

    fn find_index(&self, value: &T) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node_at(idx);
            if self.eq.eq(&node.value, value) {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Links the source elements in iteration order, front to back.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Borrowed iterator over list values, front to back.
pub struct Iter<'a, T, E> {
    list: &'a LinkedList<T, E>,
    cursor: Option<usize>,
}

impl<'a, T, E> Iterator for Iter<'a, T, E> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.node_at(idx);
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T, E> IntoIterator for &'a LinkedList<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
