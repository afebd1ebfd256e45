//! Reusable predicates, folds, and pre-built arrays.

use dynarray::{ArrayConfig, DynamicArray};

/// Predicate used by the filter scenarios.
pub fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

/// Fold step used by the reduce scenarios.
pub fn add(acc: i32, x: &i32) -> i32 {
    acc + x
}

/// Array built from `config` holding `0..n`, appended one by one.
///
/// # Panics
///
/// Panics if `config` fails validation.
pub fn filled(config: ArrayConfig, n: usize) -> DynamicArray<usize> {
    let mut array = DynamicArray::with_config(config).expect("fixture config must be valid");
    for i in 0..n {
        array.append(i);
    }
    array
}
