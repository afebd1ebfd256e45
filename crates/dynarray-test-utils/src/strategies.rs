//! Proptest strategies for arrays and array configurations.

use dynarray::ops::from_list;
use dynarray::{ArrayConfig, DynamicArray};
use proptest::prelude::*;

/// Valid configurations: small initial capacities (zero included) so that
/// growth events happen within short test inputs.
pub fn arb_config() -> impl Strategy<Value = ArrayConfig> {
    (0usize..16, 2usize..5).prop_map(|(initial_capacity, growth_factor)| {
        ArrayConfig::new(initial_capacity).with_growth_factor(growth_factor)
    })
}

/// Arrays of up to `max_len` integers.
pub fn arb_array(max_len: usize) -> impl Strategy<Value = DynamicArray<i32>> {
    prop::collection::vec(any::<i32>(), 0..=max_len).prop_map(from_list)
}

/// Arrays whose elements may themselves be absent.
pub fn arb_sparse_array(max_len: usize) -> impl Strategy<Value = DynamicArray<Option<i8>>> {
    prop::collection::vec(prop::option::of(any::<i8>()), 0..=max_len).prop_map(from_list)
}
