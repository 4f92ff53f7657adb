//! Adjacency-list graph with BFS/DFS traversal, path finding, and cycle
//! detection.
//!
//! Vertices key an `FxHashMap` of outgoing edge lists; edge lists keep
//! insertion order, so traversals visit neighbors deterministically. An
//! undirected graph mirrors every non-loop edge into the other endpoint's
//! list (self-loops are stored once).
//!
//! ## Architecture
//!
//! ```text
//!   adjacency: HashMap<T, Vec<Edge<T>>>        directed = false
//!   ┌─────┬──────────────────────────────┐
//!   │  A  │ [ (B, 1.0), (C, 4.0) ]       │     A ──── B
//!   │  B  │ [ (A, 1.0), (C, 2.0) ]       │      \    /
//!   │  C  │ [ (A, 4.0), (B, 2.0) ]       │       \  /
//!   └─────┴──────────────────────────────┘        C
//! ```
//!
//! ## Operations
//! - `add_vertex` / `remove_vertex`: removal strips every referencing edge
//! - `add_edge`: auto-creates endpoints, rejects duplicates, mirrors when
//!   undirected
//! - `breadth_first_search` / `depth_first_search` (+ iterative variant):
//!   visited-once traversal from a validated start vertex
//! - `find_path`: BFS with parent tracking
//! - `is_connected` / `has_cycle`
//!
//! Cycle detection is direction-aware: directed graphs use the
//! recursion-stack back-edge check; undirected graphs track the parent
//! vertex so the edge just traversed is not reported as a cycle.
use std::hash::{BuildHasher, Hash};

use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::ds::ring_queue::RingQueue;
use crate::ds::stack::Stack;
use crate::error::{Error, Result};

/// An outgoing edge: destination vertex plus weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    /// Destination vertex.
    pub to: T,
    /// Edge weight.
    pub weight: f64,
}

#[derive(Debug)]
/// Adjacency-list graph, directed or undirected.
pub struct Graph<T, S = FxBuildHasher> {
    adjacency: std::collections::HashMap<T, Vec<Edge<T>>, S>,
    directed: bool,
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::with_hasher(true, FxBuildHasher)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::with_hasher(false, FxBuildHasher)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher> Graph<T, S> {
    /// Creates an empty graph with an explicit hasher.
    pub fn with_hasher(directed: bool, hasher: S) -> Self {
        Self {
            adjacency: std::collections::HashMap::with_hasher(hasher),
            directed,
        }
    }

    /// Returns `true` if edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges. For undirected graphs the mirrored
    /// adjacency entries count as one edge; self-loops (stored once) still
    /// count.
    pub fn edge_count(&self) -> usize {
        let raw: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            return raw;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(vertex, edges)| edges.iter().any(|edge| edge.to == **vertex))
            .count();
        (raw + loops) / 2
    }

    /// Returns `true` if `vertex` is present.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if an edge `from → to` is present.
    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|edges| edges.iter().any(|edge| edge.to == *to))
    }

    /// Returns the outgoing edges of `vertex` in insertion order.
    ///
    /// Fails with [`Error::VertexNotFound`] for an absent vertex.
    pub fn neighbors(&self, vertex: &T) -> Result<&[Edge<T>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::VertexNotFound)
    }

    /// Returns an iterator over the vertices (unspecified order).
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Adds an isolated vertex. Returns `false` if it already exists.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Removes `vertex` and strips every edge referencing it from the
    /// other adjacency lists. Returns `false` if it was absent.
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.to != *vertex);
        }
        true
    }

    /// Adds an edge `from → to`, creating missing endpoints.
    ///
    /// Returns `false` if the edge already exists. Undirected graphs also
    /// insert the mirror edge, except for self-loops (stored once).
    pub fn add_edge(&mut self, from: T, to: T, weight: f64) -> bool {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if self.contains_edge(&from, &to) {
            return false;
        }
        if !self.directed && from != to {
            if let Some(edges) = self.adjacency.get_mut(&to) {
                edges.push(Edge {
                    to: from.clone(),
                    weight,
                });
            }
        }
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge { to, weight });
        }
        true
    }

    /// Removes the edge `from → to` (and its mirror when undirected).
    /// Returns `false` if the edge was absent.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        let removed = match self.adjacency.get_mut(from) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|edge| edge.to != *to);
                edges.len() < before
            }
            None => false,
        };
        if removed && !self.directed && from != to {
            if let Some(edges) = self.adjacency.get_mut(to) {
                edges.retain(|edge| edge.to != *from);
            }
        }
        removed
    }

    /// Visits every vertex reachable from `start` in breadth-first order.
    ///
    /// Fails with [`Error::VertexNotFound`] for an absent start vertex.
    pub fn breadth_first_search(&self, start: &T) -> Result<Vec<T>> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound);
        }
        let mut visited = FxHashSet::default();
        let mut queue = RingQueue::new();
        let mut order = Vec::new();
        visited.insert(start.clone());
        queue.enqueue(start.clone());
        while let Some(vertex) = queue.try_dequeue() {
            if let Some(edges) = self.adjacency.get(&vertex) {
                for edge in edges {
                    if visited.insert(edge.to.clone()) {
                        queue.enqueue(edge.to.clone());
                    }
                }
            }
            order.push(vertex);
        }
        Ok(order)
    }

    /// Visits every vertex reachable from `start` in depth-first
    /// (pre-order) order, descending recursively.
    pub fn depth_first_search(&self, start: &T) -> Result<Vec<T>> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound);
        }
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);
        Ok(order)
    }

    fn dfs_visit(&self, vertex: &T, visited: &mut FxHashSet<T>, order: &mut Vec<T>) {
        if !visited.insert(vertex.clone()) {
            return;
        }
        order.push(vertex.clone());
        if let Some(edges) = self.adjacency.get(vertex) {
            for edge in edges {
                self.dfs_visit(&edge.to, visited, order);
            }
        }
    }

    /// Depth-first traversal with an explicit stack; same visitation order
    /// as [`depth_first_search`](Self::depth_first_search) without the
    /// call-stack depth.
    pub fn depth_first_search_iterative(&self, start: &T) -> Result<Vec<T>> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound);
        }
        let mut visited = FxHashSet::default();
        let mut stack = Stack::new();
        let mut order = Vec::new();
        stack.push(start.clone());
        while let Some(vertex) = stack.try_pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            if let Some(edges) = self.adjacency.get(&vertex) {
                // reversed so the first-inserted neighbor is popped first
                for edge in edges.iter().rev() {
                    if !visited.contains(&edge.to) {
                        stack.push(edge.to.clone());
                    }
                }
            }
            order.push(vertex);
        }
        Ok(order)
    }

    /// Finds the shortest path (by hop count) from `start` to `end` via
    /// BFS parent tracking.
    ///
    /// Returns `Ok(None)` when `end` is unreachable, a single-element path
    /// when `start == end`, and fails with [`Error::VertexNotFound`] when
    /// either endpoint is absent.
    pub fn find_path(&self, start: &T, end: &T) -> Result<Option<Vec<T>>> {
        if !self.contains_vertex(start) || !self.contains_vertex(end) {
            return Err(Error::VertexNotFound);
        }
        if start == end {
            return Ok(Some(vec![start.clone()]));
        }
        let mut parent: std::collections::HashMap<T, T, FxBuildHasher> =
            std::collections::HashMap::default();
        let mut visited = FxHashSet::default();
        let mut queue = RingQueue::new();
        visited.insert(start.clone());
        queue.enqueue(start.clone());
        while let Some(vertex) = queue.try_dequeue() {
            let Some(edges) = self.adjacency.get(&vertex) else {
                continue;
            };
            for edge in edges {
                if !visited.insert(edge.to.clone()) {
                    continue;
                }
                parent.insert(edge.to.clone(), vertex.clone());
                if edge.to == *end {
                    let mut path = vec![end.clone()];
                    let mut cursor = end;
                    while let Some(prev) = parent.get(cursor) {
                        path.push(prev.clone());
                        cursor = prev;
                    }
                    path.reverse();
                    return Ok(Some(path));
                }
                queue.enqueue(edge.to.clone());
            }
        }
        Ok(None)
    }

    /// Returns `true` if a BFS from an arbitrary vertex reaches every
    /// vertex. The empty graph is connected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.adjacency.keys().next() else {
            return true;
        };
        match self.breadth_first_search(start) {
            Ok(order) => order.len() == self.adjacency.len(),
            Err(_) => false,
        }
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Directed graphs look for a back edge into the recursion stack;
    /// undirected graphs track the parent vertex so the edge just
    /// traversed does not count as a cycle. Every component is checked.
    pub fn has_cycle(&self) -> bool {
        if self.directed {
            let mut visited = FxHashSet::default();
            let mut in_stack = FxHashSet::default();
            for vertex in self.adjacency.keys() {
                if !visited.contains(vertex)
                    && self.directed_cycle_from(vertex, &mut visited, &mut in_stack)
                {
                    return true;
                }
            }
            false
        } else {
            let mut visited = FxHashSet::default();
            for vertex in self.adjacency.keys() {
                if !visited.contains(vertex) && self.undirected_cycle_from(vertex, &mut visited) {
                    return true;
                }
            }
            false
        }
    }

    fn directed_cycle_from(
        &self,
        vertex: &T,
        visited: &mut FxHashSet<T>,
        in_stack: &mut FxHashSet<T>,
    ) -> bool {
        visited.insert(vertex.clone());
        in_stack.insert(vertex.clone());
        if let Some(edges) = self.adjacency.get(vertex) {
            for edge in edges {
                if in_stack.contains(&edge.to) {
                    return true;
                }
                if !visited.contains(&edge.to)
                    && self.directed_cycle_from(&edge.to, visited, in_stack)
                {
                    return true;
                }
            }
        }
        in_stack.remove(vertex);
        false
    }

    fn undirected_cycle_from(&self, start: &T, visited: &mut FxHashSet<T>) -> bool {
        // explicit stack of (vertex, parent); a visited neighbor other
        // than the parent closes a cycle
        let mut stack = Stack::new();
        stack.push((start.clone(), None::<T>));
        while let Some((vertex, parent)) = stack.try_pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            if let Some(edges) = self.adjacency.get(&vertex) {
                for edge in edges {
                    if Some(&edge.to) == parent.as_ref() {
                        continue;
                    }
                    if visited.contains(&edge.to) {
                        return true;
                    }
                    stack.push((edge.to.clone(), Some(vertex.clone())));
                }
            }
        }
        false
    }
}
