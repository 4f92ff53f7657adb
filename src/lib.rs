//! dskit: classic data structures and algorithms with pluggable comparison.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod algo;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod traits;
