//! Crate-level search tests.
//!
//! - `search.rs` - Backtracking, leaf counting, terminal scores, pruning
//! - `proptest.rs` - Property-based tests over random games

mod proptest;
mod search;
