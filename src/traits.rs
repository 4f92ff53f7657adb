//! # Comparison Trait Seam
//!
//! This module defines the two pluggable comparison capabilities every
//! generic container threads through its construction: total ordering
//! ([`Comparator`]) and equality ([`Equivalence`]). No container hard-codes
//! comparison logic; each takes one of these as a generic parameter with a
//! natural default.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────┐      ┌─────────────────────────────┐
//!   │       Comparator<T>         │      │       Equivalence<T>        │
//!   │                             │      │                             │
//!   │  cmp(&self, &T, &T)         │      │  eq(&self, &T, &T) → bool   │
//!   │      → Ordering             │      │                             │
//!   └──────────────┬──────────────┘      └──────────────┬──────────────┘
//!                  │                                    │
//!        ┌─────────┴─────────┐                ┌─────────┴─────────┐
//!        ▼                   ▼                ▼                   ▼
//!   NaturalOrder      F: Fn(&T,&T)      NaturalEq          F: Fn(&T,&T)
//!   (T: Ord)            → Ordering      (T: PartialEq)       → bool
//! ```
//!
//! Closures implement both traits directly, so a descending tree is just
//! `BinarySearchTree::with_comparator(|a: &i32, b: &i32| b.cmp(a))`.
//!
//! Keyed containers (`HashTable`, `Graph`) inject equality the hashed way
//! instead: `K: Eq + Hash` plus a pluggable `S: BuildHasher`, so the hash
//! function and the equality it must agree with travel together.

use std::cmp::Ordering;

/// A pluggable total ordering over `T`.
pub trait Comparator<T> {
    /// Compares two values, returning their relative ordering.
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

/// A pluggable equality relation over `T`.
pub trait Equivalence<T> {
    /// Returns `true` if the two values are considered equal.
    fn eq(&self, a: &T, b: &T) -> bool;
}

/// The element type's own `Ord` ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The element type's own `PartialEq` equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<T: PartialEq> Equivalence<T> for NaturalEq {
    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

impl<T, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
