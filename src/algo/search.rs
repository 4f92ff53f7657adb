//! Slice search routines.
use std::cmp::Ordering;

use crate::traits::{Comparator, Equivalence, NaturalEq, NaturalOrder};

/// Returns the index of the first element equal to `target`. O(n).
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    linear_search_by(items, target, &NaturalEq)
}

/// Linear search under a custom equivalence.
pub fn linear_search_by<T, E: Equivalence<T>>(items: &[T], target: &T, eq: &E) -> Option<usize> {
    items.iter().position(|item| eq.eq(item, target))
}

/// Binary search over a slice sorted in ascending `Ord` order.
///
/// Returns the index of a matching element (any one of them when
/// duplicates are present), or `None`. The slice must be sorted; on an
/// unsorted slice the result is meaningless.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    binary_search_by(items, target, &NaturalOrder)
}

/// Binary search over a slice sorted under `cmp`.
pub fn binary_search_by<T, C: Comparator<T>>(items: &[T], target: &T, cmp: &C) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match cmp.cmp(&items[mid], target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
