//! Persistent list operations over [`DynamicArray`].
//!
//! Every function here leaves its inputs untouched and returns a fresh
//! array, a scalar, or a borrow into the input. Array arguments accept
//! either `&array` or `None`; an absent array behaves as an empty one
//! everywhere except [`iterator`], which refuses to start.
//!
//! New arrays are built with the default [`ArrayConfig`](crate::ArrayConfig)
//! regardless of the configuration of their inputs.
//!
//! ```
//! use dynarray::ops::{filter, from_list, reduce, reverse, to_list};
//!
//! let xs = from_list([1, 2, 3, 4]);
//! assert_eq!(to_list(&reverse(&xs)), vec![4, 3, 2, 1]);
//! assert_eq!(to_list(&filter(&xs, |x| x % 2 == 0)), vec![2, 4]);
//! assert_eq!(reduce(&xs, |acc, x| acc + x, 0), 10);
//! ```

use crate::array::DynamicArray;
use crate::cursor::Cursor;
use crate::error::ArrayError;

/// Elements of a possibly-absent array, in order.
fn elements<'a, T: 'a>(
    array: Option<&'a DynamicArray<T>>,
) -> impl DoubleEndedIterator<Item = &'a T> + 'a {
    array.into_iter().flat_map(DynamicArray::iter)
}

/// New empty array.
pub fn empty<T>() -> DynamicArray<T> {
    DynamicArray::new()
}

/// Element count; zero for an absent array.
pub fn size<'a, T: 'a>(array: impl Into<Option<&'a DynamicArray<T>>>) -> usize {
    array.into().map_or(0, DynamicArray::len)
}

/// New array with `value` in front of the elements of `array`.
pub fn cons<'a, T: Clone + 'a>(
    value: T,
    array: impl Into<Option<&'a DynamicArray<T>>>,
) -> DynamicArray<T> {
    let mut result = DynamicArray::new();
    result.append(value);
    result.extend(elements(array.into()).cloned());
    result
}

/// New array without the first element equal to `value`.
///
/// When nothing matches, the result is an element-for-element copy.
pub fn remove<'a, T: Clone + PartialEq + 'a>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
    value: &T,
) -> DynamicArray<T> {
    let mut result = DynamicArray::new();
    let mut removed = false;
    for item in elements(array.into()) {
        if !removed && item == value {
            removed = true;
            continue;
        }
        result.append(item.clone());
    }
    result
}

/// True if any element equals `value`.
pub fn is_member<'a, T: PartialEq + 'a>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
    value: &T,
) -> bool {
    elements(array.into()).any(|item| item == value)
}

/// New array with the elements in reverse order.
pub fn reverse<'a, T: Clone + 'a>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
) -> DynamicArray<T> {
    elements(array.into()).rev().cloned().collect()
}

/// True if `a` and `b` share at least one element.
///
/// Despite the name this answers a yes/no question rather than building
/// the set of shared elements.
pub fn intersection<'a, T: PartialEq + 'a>(
    a: impl Into<Option<&'a DynamicArray<T>>>,
    b: impl Into<Option<&'a DynamicArray<T>>>,
) -> bool {
    let b = b.into();
    elements(a.into()).any(|item| is_member(b, item))
}

/// Copy the elements into a `Vec`, preserving order.
pub fn to_list<'a, T: Clone + 'a>(array: impl Into<Option<&'a DynamicArray<T>>>) -> Vec<T> {
    elements(array.into()).cloned().collect()
}

/// New array holding exactly the elements of `seq`, in order.
pub fn from_list<T>(seq: impl IntoIterator<Item = T>) -> DynamicArray<T> {
    seq.into_iter().collect()
}

/// First element satisfying `predicate`.
pub fn find<'a, T: 'a>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<&'a T> {
    elements(array.into()).find(|item| predicate(item))
}

/// New array of the elements satisfying `predicate`, order preserved.
pub fn filter<'a, T: Clone + 'a>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
    mut predicate: impl FnMut(&T) -> bool,
) -> DynamicArray<T> {
    elements(array.into())
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

/// New array of `f(element)` for every element, order and length preserved.
pub fn map<'a, T: 'a, U>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
    f: impl FnMut(&T) -> U,
) -> DynamicArray<U> {
    elements(array.into()).map(f).collect()
}

/// Left fold: `f(f(f(initial, e0), e1), e2)...`.
///
/// Returns `initial` untouched when the array is empty or absent.
pub fn reduce<'a, T: 'a, A>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
    f: impl FnMut(A, &T) -> A,
    initial: A,
) -> A {
    elements(array.into()).fold(initial, f)
}

/// Cursor producing the elements of `array` one call at a time.
///
/// Returns `Err(ArrayError::Exhausted)` straight away if `array` is
/// absent.
pub fn iterator<'a, T: 'a>(
    array: impl Into<Option<&'a DynamicArray<T>>>,
) -> Result<Cursor<'a, T>, ArrayError> {
    array
        .into()
        .map(Cursor::new)
        .ok_or(ArrayError::Exhausted)
}

/// New array holding the elements of `a` followed by those of `b`.
pub fn concat<'a, T: Clone + 'a>(
    a: impl Into<Option<&'a DynamicArray<T>>>,
    b: impl Into<Option<&'a DynamicArray<T>>>,
) -> DynamicArray<T> {
    elements(a.into())
        .chain(elements(b.into()))
        .cloned()
        .collect()
}
