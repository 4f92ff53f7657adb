//! Binary search tree with a pluggable ordering and four traversal orders.
//!
//! Nodes are `Box`ed and linked through `Option<Box<Node<T>>>` child slots;
//! insert, lookup and removal walk child links iteratively, so a degenerate
//! near-linear tree costs time, not call-stack depth. Duplicates are
//! rejected, never overwritten.
//!
//! ## Architecture
//!
//! ```text
//!   insert order 5, 3, 7, 1, 4, 6, 9          in_order:    1 3 4 5 6 7 9
//!                                             pre_order:   5 3 1 4 7 6 9
//!              ┌─── 5 ───┐                    post_order:  1 4 3 6 9 7 5
//!              3         7                    level_order: 5 3 7 1 4 6 9
//!            ┌─┴─┐     ┌─┴─┐
//!            1   4     6   9
//! ```
//!
//! Two-child removal replaces the node's value with its in-order successor
//! (the minimum of the right subtree) and unlinks the successor; the node
//! itself is never relinked.
//!
//! ## Performance
//!
//! | Operation                  | Time         |
//! |----------------------------|--------------|
//! | `insert` / `contains` / `remove` | O(height) |
//! | `min` / `max`              | O(height)    |
//! | `height`                   | O(n)         |
//! | traversals                 | O(n) lazy    |
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::cmp::Ordering;

use crate::ds::ring_queue::RingQueue;
use crate::error::{Error, Result};
use crate::traits::{Comparator, NaturalOrder};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug)]
/// Ordered binary tree; the ordering is injected via `C`.
pub struct BinarySearchTree<T, C = NaturalOrder> {
    root: Option<Box<Node<T>>>,
    len: usize,
    cmp: C,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree ordered by `T`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Creates an empty tree ordered by `cmp` (e.g. a descending closure).
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value`, keeping the ordering invariant.
    ///
    /// Returns `false` without mutating when an equal value is already
    /// stored.
    pub fn insert(&mut self, value: T) -> bool {
        let cmp = &self.cmp;
        let mut link = &mut self.root;
        while let Some(node) = link {
            match cmp.cmp(&value, &node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *link = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    /// Returns `true` if an equal value is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the stored value equal to `value` under the comparator.
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match self.cmp.cmp(value, &node.value) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Removes the value equal to `value`, returning `true` on success.
    ///
    /// A leaf detaches; a one-child node is replaced by its child; a
    /// two-child node takes its in-order successor's value and the
    /// successor is unlinked from the right subtree.
    pub fn remove(&mut self, value: &T) -> bool {
        let cmp = &self.cmp;
        let mut link = &mut self.root;
        loop {
            let ordering = match link {
                None => return false,
                Some(node) => cmp.cmp(value, &node.value),
            };
            if ordering == Ordering::Equal {
                break;
            }
            match link {
                Some(node) => {
                    link = if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
                None => return false,
            }
        }
        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = detach_min(&mut right) {
                    node.value = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    /// Returns the smallest stored value.
    ///
    /// Fails with [`Error::EmptyContainer`] on an empty tree.
    pub fn min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyContainer("min"))?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest stored value.
    ///
    /// Fails with [`Error::EmptyContainer`] on an empty tree.
    pub fn max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyContainer("max"))?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Returns the tree height: -1 when empty, 0 for a sole root.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Drops every node iteratively (a degenerate chain would otherwise
    /// recurse in `Drop`).
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Lazy in-order traversal: ascending under the active comparator.
    pub fn in_order(&self) -> InOrderIter<'_, T> {
        InOrderIter {
            stack: Vec::new(),
            cursor: self.root.as_deref(),
        }
    }

    /// Lazy pre-order traversal: node, left subtree, right subtree.
    pub fn pre_order(&self) -> PreOrderIter<'_, T> {
        PreOrderIter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Lazy post-order traversal: left subtree, right subtree, node.
    pub fn post_order(&self) -> PostOrderIter<'_, T> {
        PostOrderIter {
            stack: self
                .root
                .as_deref()
                .map(|node| (node, false))
                .into_iter()
                .collect(),
        }
    }

    /// Lazy breadth-first traversal, level by level.
    pub fn level_order(&self) -> LevelOrderIter<'_, T> {
        let mut queue = RingQueue::new();
        if let Some(root) = self.root.as_deref() {
            queue.enqueue(root);
        }
        LevelOrderIter { queue }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut count = 0usize;
        let mut prev: Option<&T> = None;
        for value in self.in_order() {
            if let Some(prev) = prev {
                assert_eq!(self.cmp.cmp(prev, value), Ordering::Less);
            }
            prev = Some(value);
            count += 1;
        }
        assert_eq!(count, self.len);
    }
}

/// Unlinks the minimum node of the subtree at `link`, returning its value.
fn detach_min<T>(mut link: &mut Option<Box<Node<T>>>) -> Option<T> {
    loop {
        let has_left = link.as_deref().is_some_and(|node| node.left.is_some());
        if !has_left {
            let mut node = link.take()?;
            *link = node.right.take();
            return Some(node.value);
        }
        match link {
            Some(node) => link = &mut node.left,
            None => return None,
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Inserts the source values in iteration order; duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T, C> Drop for BinarySearchTree<T, C> {
    fn drop(&mut self) {
        // iterative teardown; Box's recursive drop would overflow on a
        // degenerate chain
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Default iteration is in-order.
impl<'a, T, C: Comparator<T>> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Lazy in-order iterator (ascending under the tree's comparator).
pub struct InOrderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.cursor = node.right.as_deref();
        Some(&node.value)
    }
}

/// Lazy pre-order iterator (node, left, right).
pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

/// Lazy post-order iterator (left, right, node).
pub struct PostOrderIter<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Lazy level-order iterator, fed by an internal [`RingQueue`].
pub struct LevelOrderIter<'a, T> {
    queue: RingQueue<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.try_dequeue()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.enqueue(right);
        }
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_tree() -> BinarySearchTree<i32> {
        [5, 3, 7, 1, 4, 6, 9].into_iter().collect()
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut tree = BinarySearchTree::new();
        assert!(tree.insert(5));
        assert!(tree.insert(3));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
        tree.debug_validate_invariants();
    }

    #[test]
    fn traversal_orders_match_reference_shape() {
        let tree = reference_tree();
        let in_order: Vec<_> = tree.in_order().copied().collect();
        let pre_order: Vec<_> = tree.pre_order().copied().collect();
        let post_order: Vec<_> = tree.post_order().copied().collect();
        let level_order: Vec<_> = tree.level_order().copied().collect();
        assert_eq!(in_order, vec![1, 3, 4, 5, 6, 7, 9]);
        assert_eq!(pre_order, vec![5, 3, 1, 4, 7, 6, 9]);
        assert_eq!(post_order, vec![1, 4, 3, 6, 9, 7, 5]);
        assert_eq!(level_order, vec![5, 3, 7, 1, 4, 6, 9]);
    }

    #[test]
    fn default_iteration_is_in_order() {
        let tree = reference_tree();
        let values: Vec<_> = (&tree).into_iter().copied().collect();
        assert_eq!(values, vec![1, 3, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn in_order_is_sorted_for_any_insert_sequence() {
        let tree: BinarySearchTree<i32> =
            [8, 12, 2, 42, 17, 1, 30, 25, 9].into_iter().collect();
        let values: Vec<_> = tree.in_order().copied().collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
        tree.debug_validate_invariants();
    }

    #[test]
    fn remove_leaf_and_one_child() {
        let mut tree = reference_tree();
        assert!(tree.remove(&1)); // leaf
        assert_eq!(tree.len(), 6);
        assert!(!tree.contains(&1));

        tree.insert(8); // gives 9 a single left child
        assert!(tree.remove(&9));
        assert!(tree.contains(&8));
        let values: Vec<_> = tree.in_order().copied().collect();
        assert_eq!(values, vec![3, 4, 5, 6, 7, 8]);
        tree.debug_validate_invariants();
    }

    #[test]
    fn remove_two_child_uses_in_order_successor() {
        let mut tree = reference_tree();
        assert!(tree.remove(&3));
        assert_eq!(tree.len(), 6);
        assert!(!tree.contains(&3));
        // 4 (the successor) moved up into 3's position
        let pre_order: Vec<_> = tree.pre_order().copied().collect();
        assert_eq!(pre_order[1], 4);
        let values: Vec<_> = tree.in_order().copied().collect();
        assert_eq!(values, vec![1, 4, 5, 6, 7, 9]);
        tree.debug_validate_invariants();
    }

    #[test]
    fn remove_root_with_two_children() {
        let mut tree = reference_tree();
        assert!(tree.remove(&5));
        let pre_order: Vec<_> = tree.pre_order().copied().collect();
        assert_eq!(pre_order[0], 6);
        let values: Vec<_> = tree.in_order().copied().collect();
        assert_eq!(values, vec![1, 3, 4, 6, 7, 9]);
        tree.debug_validate_invariants();
    }

    #[test]
    fn remove_missing_value_is_noop() {
        let mut tree = reference_tree();
        assert!(!tree.remove(&42));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn min_max_and_empty_failures() {
        let tree = reference_tree();
        assert_eq!(tree.min().unwrap(), &1);
        assert_eq!(tree.max().unwrap(), &9);

        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.min(), Err(Error::EmptyContainer("min")));
        assert_eq!(empty.max(), Err(Error::EmptyContainer("max")));
    }

    #[test]
    fn height_tracks_shape() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.height(), -1);
        tree.insert(5);
        assert_eq!(tree.height(), 0);
        tree.insert(3);
        tree.insert(7);
        assert_eq!(tree.height(), 1);
        tree.insert(1);
        assert_eq!(tree.height(), 2);

        let chain: BinarySearchTree<i32> = (0..10).collect();
        assert_eq!(chain.height(), 9);
    }

    #[test]
    fn custom_comparator_builds_descending_tree() {
        let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for v in [5, 3, 7, 1, 9] {
            tree.insert(v);
        }
        let values: Vec<_> = tree.in_order().copied().collect();
        assert_eq!(values, vec![9, 7, 5, 3, 1]);
        assert_eq!(tree.min().unwrap(), &9);
        tree.debug_validate_invariants();
    }

    #[test]
    fn clear_and_reuse() {
        let mut tree = reference_tree();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert!(tree.insert(1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn degenerate_chain_survives_drop_and_clear() {
        let mut tree: BinarySearchTree<i32> = (0..10_000).collect();
        assert_eq!(tree.len(), 10_000);
        tree.clear();
        let tree2: BinarySearchTree<i32> = (0..10_000).collect();
        drop(tree2);
    }

    #[test]
    fn find_returns_stored_value() {
        let tree = reference_tree();
        assert_eq!(tree.find(&6), Some(&6));
        assert_eq!(tree.find(&2), None);
    }

    #[test]
    fn traversals_are_restartable() {
        let tree = reference_tree();
        let a: Vec<_> = tree.in_order().copied().collect();
        let b: Vec<_> = tree.in_order().copied().collect();
        assert_eq!(a, b);
    }
}
