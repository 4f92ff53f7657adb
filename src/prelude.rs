pub use crate::ds::{
    BinarySearchTree, Edge, Graph, HashTable, LinkedList, NodeId, RingQueue, Stack,
    TableDiagnostics,
};

pub use crate::algo::{
    binary_search, bubble_sort, coin_change_min, fibonacci, insertion_sort, knapsack_01,
    linear_search, longest_common_subsequence, merge_sort, quick_sort, selection_sort,
};
pub use crate::error::{Error, Result};
pub use crate::traits::{Comparator, Equivalence, NaturalEq, NaturalOrder};
