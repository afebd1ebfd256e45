//! Test utilities for dynarray development.
//!
//! Provides proptest [`strategies`] for arrays and configurations, plus
//! small [`fixtures`] (predicates, folds, pre-filled arrays) shared by the
//! integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{add, filled, is_even};
pub use strategies::{arb_array, arb_config, arb_sparse_array};
