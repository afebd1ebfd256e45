//! Benchmark inputs for the dynarray container.
//!
//! Provides pre-built arrays for benchmarking:
//!
//! - [`sequential`]: `0..n` as `i64`
//! - [`sparse`]: `0..n` with every third element absent

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::ops::from_list;
use dynarray::DynamicArray;

/// Element count for the small profile.
pub const SMALL: usize = 1_000;

/// Element count for the large profile.
pub const LARGE: usize = 100_000;

/// Array holding `0..n`.
pub fn sequential(n: usize) -> DynamicArray<i64> {
    from_list(0..n as i64)
}

/// Array holding `0..n` where every index divisible by three is `None`.
pub fn sparse(n: usize) -> DynamicArray<Option<i64>> {
    from_list((0..n as i64).map(|i| if i % 3 == 0 { None } else { Some(i) }))
}
