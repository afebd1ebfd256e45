//! The growable array container.
//!
//! A [`DynamicArray`] owns a boxed slice of `Option<T>` slots. Slots below
//! `len` are populated; slots at or past `len` are spare capacity and hold
//! `None`. Occupancy is decided by position only, so an element type that
//! is itself optional (`DynamicArray<Option<U>>`) can store `None` as a
//! real element without it being mistaken for a spare slot.

use std::fmt;

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// A growable, indexable sequence with a configurable growth policy.
///
/// Growth is amortized: when an append finds every slot occupied, the
/// backing storage is reallocated at `capacity * growth_factor` and the
/// existing elements are moved across in order. Capacity never shrinks.
#[derive(Clone)]
pub struct DynamicArray<T> {
    /// Backing slots. `data.len()` is the capacity.
    data: Box<[Option<T>]>,
    /// Number of populated slots, always `<= data.len()`.
    len: usize,
    config: ArrayConfig,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(ArrayConfig::default())
    }

    /// Create an empty array with the given configuration.
    ///
    /// Returns `Err(ArrayError::InvalidConfig)` if the growth factor is
    /// below 2.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ArrayConfig) -> Self {
        Self {
            data: alloc_slots(config.initial_capacity),
            len: 0,
            config,
        }
    }

    /// Number of populated elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Multiplier applied to the capacity on growth.
    pub fn growth_factor(&self) -> usize {
        self.config.growth_factor
    }

    /// Append `value` at the logical end, growing the storage if full.
    pub fn append(&mut self, value: T) {
        if self.len == self.data.len() {
            self.grow();
        }
        self.data[self.len] = Some(value);
        self.len += 1;
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.data[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Overwrite the element at `index`.
    ///
    /// Only populated positions can be written; this never extends the
    /// array.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.len;
        match self.data[..len].get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(ArrayError::IndexOutOfRange { index, len }),
        }
    }

    /// Iterate over the populated elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.data[..self.len].iter(),
        }
    }

    /// Reallocate at the next capacity step and move the live elements.
    fn grow(&mut self) {
        let mut data = alloc_slots(self.config.grown_capacity(self.data.len()));
        for (dst, src) in data.iter_mut().zip(self.data[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.data = data;
    }
}

fn alloc_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Element-wise equality over the populated prefix. Capacity and
    /// growth factor do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator over a [`DynamicArray`], created by
/// [`DynamicArray::iter`].
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`DynamicArray`].
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.data.into_vec().into_iter(),
            remaining: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(config: ArrayConfig, n: usize) -> DynamicArray<usize> {
        let mut array = DynamicArray::with_config(config).unwrap();
        for i in 0..n {
            array.append(i);
        }
        array
    }

    #[test]
    fn new_array_is_empty_with_default_capacity() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), ArrayConfig::DEFAULT_INITIAL_CAPACITY);
        assert_eq!(array.growth_factor(), ArrayConfig::DEFAULT_GROWTH_FACTOR);
    }

    #[test]
    fn with_config_rejects_small_growth_factor() {
        let result = DynamicArray::<i32>::with_config(ArrayConfig::new(4).with_growth_factor(0));
        assert!(matches!(result, Err(ArrayError::InvalidConfig { .. })));
    }

    #[test]
    fn append_within_capacity_does_not_grow() {
        let array = filled(ArrayConfig::new(4), 4);
        assert_eq!(array.len(), 4);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn append_past_capacity_multiplies_by_factor() {
        let array = filled(ArrayConfig::new(4), 5);
        assert_eq!(array.capacity(), 8);

        let array = filled(ArrayConfig::new(2).with_growth_factor(3), 7);
        assert_eq!(array.capacity(), 18);
    }

    #[test]
    fn growth_preserves_order() {
        let array = filled(ArrayConfig::new(1), 33);
        let collected: Vec<usize> = array.iter().copied().collect();
        assert_eq!(collected, (0..33).collect::<Vec<_>>());
    }

    #[test]
    fn zero_initial_capacity_still_appends() {
        let array = filled(ArrayConfig::new(0), 3);
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn get_and_set_within_bounds() {
        let mut array = filled(ArrayConfig::default(), 3);
        assert_eq!(array.get(1), Ok(&1));
        array.set(1, 42).unwrap();
        assert_eq!(array.get(1), Ok(&42));
    }

    #[test]
    fn get_past_len_is_out_of_range_even_within_capacity() {
        let array = filled(ArrayConfig::new(8), 2);
        assert_eq!(
            array.get(2),
            Err(ArrayError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn set_past_len_does_not_extend() {
        let mut array = filled(ArrayConfig::new(8), 2);
        assert_eq!(
            array.set(5, 9),
            Err(ArrayError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn stored_none_is_an_element() {
        let mut array: DynamicArray<Option<i32>> = DynamicArray::new();
        array.append(None);
        array.append(Some(1));
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(0), Ok(&None));
        assert_eq!(array.iter().count(), 2);
    }

    #[test]
    fn equality_ignores_capacity() {
        let small = filled(ArrayConfig::new(1), 3);
        let large = filled(ArrayConfig::new(64), 3);
        assert_ne!(small.capacity(), large.capacity());
        assert_eq!(small, large);
    }

    #[test]
    fn equality_requires_same_len() {
        let a = filled(ArrayConfig::default(), 3);
        let b = filled(ArrayConfig::default(), 4);
        assert_ne!(a, b);
    }

    #[test]
    fn iter_runs_both_ends() {
        let array = filled(ArrayConfig::new(2), 5);
        let back: Vec<usize> = array.iter().rev().copied().collect();
        assert_eq!(back, vec![4, 3, 2, 1, 0]);
        assert_eq!(array.iter().len(), 5);
    }

    #[test]
    fn owned_iteration_yields_only_populated_slots() {
        let array = filled(ArrayConfig::new(16), 3);
        let owned: Vec<usize> = array.into_iter().collect();
        assert_eq!(owned, vec![0, 1, 2]);
    }

    #[test]
    fn from_iterator_and_extend() {
        let mut array: DynamicArray<i32> = (1..=3).collect();
        array.extend([4, 5]);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn debug_renders_raw_elements() {
        let array: DynamicArray<Option<i32>> = [None, Some(1)].into_iter().collect();
        assert_eq!(format!("{array:?}"), "[None, Some(1)]");
    }
}
