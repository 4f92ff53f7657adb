//! In-place comparison sorts.
//!
//! Each algorithm comes in two flavors: a plain function over `T: Ord` and
//! a `_by` variant taking a [`Comparator`]. The plain functions delegate to
//! `_by` with [`NaturalOrder`].
//!
//! ## Performance
//! - `bubble_sort` / `insertion_sort` / `selection_sort`: O(n²), O(1) space
//! - `merge_sort`: O(n log n), O(n) scratch space, stable
//! - `quick_sort`: O(n log n) average, in place, not stable
use std::cmp::Ordering;

use crate::traits::{Comparator, NaturalOrder};

/// Bubble sort with the adjacent-swap early exit: a pass without swaps
/// ends the sort.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    bubble_sort_by(items, &NaturalOrder);
}

/// Bubble sort under a custom ordering.
pub fn bubble_sort_by<T, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    let len = items.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 1..len - pass {
            if cmp.cmp(&items[i - 1], &items[i]) == Ordering::Greater {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
    }
}

/// Insertion sort; near-sorted input approaches O(n).
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    insertion_sort_by(items, &NaturalOrder);
}

/// Insertion sort under a custom ordering.
pub fn insertion_sort_by<T, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp.cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Selection sort; minimizes writes (at most n - 1 swaps).
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    selection_sort_by(items, &NaturalOrder);
}

/// Selection sort under a custom ordering.
pub fn selection_sort_by<T, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    let len = items.len();
    for i in 0..len {
        let mut min = i;
        for j in i + 1..len {
            if cmp.cmp(&items[j], &items[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

/// Stable merge sort over clonable elements.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    merge_sort_by(items, &NaturalOrder);
}

/// Stable merge sort under a custom ordering.
pub fn merge_sort_by<T: Clone, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort_by(&mut items[..mid], cmp);
    merge_sort_by(&mut items[mid..], cmp);
    merge(items, mid, cmp);
}

/// Merges the two sorted halves `items[..mid]` and `items[mid..]` through
/// a scratch buffer. Ties take from the left half, which keeps the sort
/// stable.
fn merge<T: Clone, C: Comparator<T>>(items: &mut [T], mid: usize, cmp: &C) {
    let merged: Vec<T> = {
        let (left, right) = items.split_at(mid);
        let mut merged = Vec::with_capacity(items.len());
        let (mut l, mut r) = (0, 0);
        while l < left.len() && r < right.len() {
            if cmp.cmp(&right[r], &left[l]) == Ordering::Less {
                merged.push(right[r].clone());
                r += 1;
            } else {
                merged.push(left[l].clone());
                l += 1;
            }
        }
        merged.extend_from_slice(&left[l..]);
        merged.extend_from_slice(&right[r..]);
        merged
    };
    items.clone_from_slice(&merged);
}

/// In-place quicksort with Lomuto partitioning, last element as pivot.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    quick_sort_by(items, &NaturalOrder);
}

/// Quicksort under a custom ordering.
pub fn quick_sort_by<T, C: Comparator<T>>(items: &mut [T], cmp: &C) {
    if items.len() < 2 {
        return;
    }
    let pivot = partition(items, cmp);
    quick_sort_by(&mut items[..pivot], cmp);
    quick_sort_by(&mut items[pivot + 1..], cmp);
}

fn partition<T, C: Comparator<T>>(items: &mut [T], cmp: &C) -> usize {
    let last = items.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if cmp.cmp(&items[i], &items[last]) != Ordering::Greater {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases() -> Vec<Vec<i32>> {
        vec![
            vec![],
            vec![1],
            vec![2, 1],
            vec![5, 2, 9, 1, 5, 6],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![7, 7, 7, 7],
            vec![3, -1, 0, -7, 12, 3],
        ]
    }

    fn check(sort: fn(&mut [i32])) {
        for case in cases() {
            let mut sorted = case.clone();
            sort(&mut sorted);
            let mut expected = case;
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn bubble_sorts_all_cases() {
        check(bubble_sort);
    }

    #[test]
    fn insertion_sorts_all_cases() {
        check(insertion_sort);
    }

    #[test]
    fn selection_sorts_all_cases() {
        check(selection_sort);
    }

    #[test]
    fn merge_sorts_all_cases() {
        check(merge_sort);
    }

    #[test]
    fn quick_sorts_all_cases() {
        check(quick_sort);
    }

    #[test]
    fn by_variants_honor_the_comparator() {
        let descending = |a: &i32, b: &i32| b.cmp(a);
        let mut items = vec![3, 1, 4, 1, 5];
        quick_sort_by(&mut items, &descending);
        assert_eq!(items, vec![5, 4, 3, 1, 1]);

        let mut items = vec![3, 1, 4, 1, 5];
        merge_sort_by(&mut items, &descending);
        assert_eq!(items, vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn merge_sort_is_stable() {
        // sort by the key only; payload order within a key must survive
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        merge_sort_by(&mut pairs, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }
}
