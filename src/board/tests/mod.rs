//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Apply/undo correctness for every mutator
//! - `edge_cases.rs` - Move generation at the edges of the board
//! - `proptest.rs` - Property-based tests

mod proptest;
