// ==============================================
// CROSS-CONTAINER LAW TESTS (integration)
// ==============================================
//
// Tests that verify library-wide behavioral consistency across the
// containers. These span multiple modules and belong here rather than in
// any single source file.

use dskit::prelude::*;

// ==============================================
// Ordering Laws
// ==============================================
//
// Stack reverses insertion order, the queue preserves it, and the tree's
// in-order traversal sorts it. All three must agree with a sorted model.

mod ordering_laws {
    use super::*;

    #[test]
    fn stack_reverses_queue_preserves_tree_sorts() {
        let source = vec![42, 7, 99, 3, 56, 18];

        let mut stack = Stack::new();
        let mut queue = RingQueue::new();
        let mut tree = BinarySearchTree::new();
        for &v in &source {
            stack.push(v);
            queue.enqueue(v);
            tree.insert(v);
        }

        let mut reversed = source.clone();
        reversed.reverse();
        let popped: Vec<i32> = std::iter::from_fn(|| stack.try_pop()).collect();
        assert_eq!(popped, reversed);

        let dequeued: Vec<i32> = std::iter::from_fn(|| queue.try_dequeue()).collect();
        assert_eq!(dequeued, source);

        let mut sorted = source.clone();
        sorted.sort();
        let in_order: Vec<i32> = tree.in_order().copied().collect();
        assert_eq!(in_order, sorted);
    }

    #[test]
    fn tree_in_order_matches_library_sorts() {
        let source = vec![13, -4, 0, 77, 13, 2, -4, 100, 55];
        let tree: BinarySearchTree<i32> = source.iter().copied().collect();

        let mut deduped = source.clone();
        deduped.sort();
        deduped.dedup();

        let mut quick = {
            let mut d = deduped.clone();
            d.reverse();
            d
        };
        quick_sort(&mut quick);
        let mut merged = quick.clone();
        merge_sort(&mut merged);

        let in_order: Vec<i32> = tree.in_order().copied().collect();
        assert_eq!(in_order, quick);
        assert_eq!(in_order, merged);
    }
}

// ==============================================
// Ring Buffer Wraparound
// ==============================================
//
// The queue must survive head wrapping past the end of the backing buffer
// and re-linearize correctly on growth and trim.

mod ring_wraparound {
    use super::*;

    #[test]
    fn interleaved_churn_matches_model() {
        let mut queue = RingQueue::with_capacity(4);
        let mut model = std::collections::VecDeque::new();
        // long interleaved enqueue/dequeue run forces many wraps
        for round in 0u32..500 {
            queue.enqueue(round);
            model.push_back(round);
            if round % 3 == 0 {
                assert_eq!(queue.try_dequeue(), model.pop_front());
            }
            queue.debug_validate_invariants();
        }
        while let Some(expected) = model.pop_front() {
            assert_eq!(queue.try_dequeue(), Some(expected));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn trim_after_wrap_keeps_fifo_order() {
        let mut queue = RingQueue::with_capacity(8);
        for v in 0..8 {
            queue.enqueue(v);
        }
        for _ in 0..6 {
            queue.try_dequeue();
        }
        for v in 8..10 {
            queue.enqueue(v);
        }
        queue.trim_excess();
        queue.debug_validate_invariants();
        let drained: Vec<i32> = std::iter::from_fn(|| queue.try_dequeue()).collect();
        assert_eq!(drained, vec![6, 7, 8, 9]);
    }
}

// ==============================================
// Linked List Handle Safety
// ==============================================
//
// Node handles are tagged with their owning list and generation. A handle
// must never read another list's slot or a reused slot.

mod handle_safety {
    use super::*;

    #[test]
    fn handles_are_rejected_across_lists() {
        let mut first = LinkedList::new();
        let mut second = LinkedList::new();
        let id = first.push_back("one");
        second.push_back("two");

        assert!(second.get(id).is_err());
        assert!(second.remove(id).is_err());
        assert!(second.insert_after(id, "three").is_err());
        // the rejected calls must leave the target list untouched
        assert_eq!(second.len(), 1);
        second.debug_validate_invariants();
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut list = LinkedList::new();
        let stale = list.push_back(1);
        list.remove(stale).unwrap();
        let fresh = list.push_back(2);

        assert!(list.get(stale).is_err());
        assert_eq!(list.get(fresh).unwrap(), &2);
        list.debug_validate_invariants();
    }

    #[test]
    fn splicing_around_handles_preserves_sequence() {
        let mut list = LinkedList::new();
        let b = list.push_back("b");
        list.push_back("d");
        list.push_front("a");
        let c = list.insert_after(b, "c").unwrap();
        list.insert_before(c, "b2").unwrap();

        let seq: Vec<&str> = list.iter().copied().collect();
        assert_eq!(seq, vec!["a", "b", "b2", "c", "d"]);
        list.debug_validate_invariants();
    }
}

// ==============================================
// Hash Table Resize Membership
// ==============================================
//
// Random churn across several resizes; the table must agree with a std
// HashMap model at every step.

mod resize_membership {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn random_churn_matches_std_model() {
        let mut rng = StdRng::seed_from_u64(0xD5C1);
        let mut table = HashTable::new();
        let mut model = std::collections::HashMap::new();

        for _ in 0..4_000 {
            let key: u16 = rng.gen_range(0..512);
            if rng.gen_bool(0.7) {
                let value: u32 = rng.gen();
                assert_eq!(table.put(key, value), model.insert(key, value));
            } else {
                assert_eq!(table.remove(&key), model.remove(&key));
            }
        }
        table.debug_validate_invariants();

        assert_eq!(table.len(), model.len());
        for (key, value) in &model {
            assert_eq!(table.try_get(key), Some(value));
        }
        for key in 0u16..512 {
            assert_eq!(table.contains_key(&key), model.contains_key(&key));
        }

        let stats = table.diagnostics();
        assert_eq!(stats.entries, model.len());
        assert!(stats.load_factor() < 0.75 + f64::EPSILON);
    }
}

// ==============================================
// Traversal Agreement
// ==============================================
//
// The four tree traversals visit the same multiset of values, and the
// level-order walk (which rides the crate's own queue) must agree with a
// breadth-first reconstruction.

mod traversal_agreement {
    use super::*;

    #[test]
    fn all_traversals_cover_the_same_values() {
        let tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80, 10].into_iter().collect();

        let in_order: Vec<i32> = tree.in_order().copied().collect();
        let mut pre: Vec<i32> = tree.pre_order().copied().collect();
        let mut post: Vec<i32> = tree.post_order().copied().collect();
        let mut level: Vec<i32> = tree.level_order().copied().collect();

        assert!(in_order.windows(2).all(|w| w[0] < w[1]));
        pre.sort();
        post.sort();
        level.sort();
        assert_eq!(pre, in_order);
        assert_eq!(post, in_order);
        assert_eq!(level, in_order);
        assert_eq!(in_order.len(), tree.len());
    }

    #[test]
    fn binary_search_over_in_order_snapshot() {
        let tree: BinarySearchTree<i32> = [15, 3, 99, 42, 7].into_iter().collect();
        let snapshot: Vec<i32> = tree.in_order().copied().collect();
        for v in &snapshot {
            let idx = binary_search(&snapshot, v);
            assert_eq!(idx.map(|i| snapshot[i]), Some(*v));
            assert!(tree.contains(v));
        }
        assert_eq!(binary_search(&snapshot, &1000), None);
    }
}

// ==============================================
// Graph Reachability
// ==============================================

mod graph_reachability {
    use super::*;

    #[test]
    fn path_exists_iff_bfs_reaches() {
        let mut graph = Graph::directed();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 1.0);
        graph.add_edge("c", "d", 1.0);
        graph.add_edge("x", "a", 1.0);

        let reachable = graph.breadth_first_search(&"a").unwrap();
        for vertex in ["a", "b", "c", "d", "x"] {
            let path = graph.find_path(&"a", &vertex).unwrap();
            assert_eq!(path.is_some(), reachable.contains(&vertex));
            if let Some(path) = path {
                assert_eq!(path.first(), Some(&"a"));
                assert_eq!(path.last(), Some(&vertex));
            }
        }
    }

    #[test]
    fn removing_a_bridge_disconnects() {
        let mut graph = Graph::undirected();
        graph.add_edge("left1", "left2", 1.0);
        graph.add_edge("right1", "right2", 1.0);
        graph.add_edge("left2", "right1", 1.0);
        assert!(graph.is_connected());
        assert!(graph.remove_edge(&"left2", &"right1"));
        assert!(!graph.is_connected());
        assert_eq!(graph.find_path(&"left1", &"right2").unwrap(), None);
    }
}
