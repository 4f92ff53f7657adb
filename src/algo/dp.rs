//! Dynamic programming routines: tabulated, no recursion.
use crate::error::{Error, Result};

/// Returns the n-th Fibonacci number (`fibonacci(0) == 0`).
///
/// Iterative with two accumulators; `u128` holds every value up to
/// `fibonacci(186)`, past which this wraps in release builds.
pub fn fibonacci(n: usize) -> u128 {
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 0..n {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    prev
}

/// Returns a longest common subsequence of `a` and `b`.
///
/// Full (m+1) x (n+1) length table, then a backtrack from the corner.
/// When several subsequences tie, the one the backtrack reaches first
/// wins.
pub fn longest_common_subsequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let (m, n) = (a.len(), b.len());
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    let mut out = Vec::with_capacity(table[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.reverse();
    out
}

/// 0/1 knapsack: the maximum total value packable within `capacity`.
///
/// One-dimensional table swept from high weight to low, so each item is
/// taken at most once. Fails with [`Error::InvalidArgument`] when
/// `weights` and `values` differ in length.
pub fn knapsack_01(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64> {
    if weights.len() != values.len() {
        return Err(Error::invalid_argument(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    let mut best = vec![0u64; capacity + 1];
    for (&weight, &value) in weights.iter().zip(values) {
        if weight > capacity {
            continue;
        }
        for cap in (weight..=capacity).rev() {
            best[cap] = best[cap].max(best[cap - weight] + value);
        }
    }
    Ok(best[capacity])
}

/// Fewest coins summing to `amount`, or `None` when no combination
/// exists. `amount == 0` needs zero coins. Zero-valued coins are ignored.
pub fn coin_change_min(coins: &[usize], amount: usize) -> Option<usize> {
    let mut fewest = vec![usize::MAX; amount + 1];
    fewest[0] = 0;
    for target in 1..=amount {
        for &coin in coins {
            if coin == 0 || coin > target {
                continue;
            }
            if fewest[target - coin] != usize::MAX {
                fewest[target] = fewest[target].min(fewest[target - coin] + 1);
            }
        }
    }
    match fewest[amount] {
        usize::MAX => None,
        count => Some(count),
    }
}
