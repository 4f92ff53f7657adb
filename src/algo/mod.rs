pub mod dp;
pub mod search;
pub mod sort;

pub use dp::{coin_change_min, fibonacci, knapsack_01, longest_common_subsequence};
pub use search::{binary_search, binary_search_by, linear_search, linear_search_by};
pub use sort::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, merge_sort, merge_sort_by,
    quick_sort, quick_sort_by, selection_sort, selection_sort_by,
};
