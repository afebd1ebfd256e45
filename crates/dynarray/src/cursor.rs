//! Stateful cursor over an array.
//!
//! A [`Cursor`] borrows its source array and hands out one element per
//! call to [`Cursor::next_value`]. Once the elements observed at creation
//! are spent it reports [`ArrayError::Exhausted`] on every further call.

use crate::array::DynamicArray;
use crate::error::ArrayError;

/// Position-tracking reader over a [`DynamicArray`].
///
/// Created by [`ops::iterator`](crate::ops::iterator). Each call to
/// `iterator` yields a fresh cursor starting at index 0.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    source: &'a DynamicArray<T>,
    position: usize,
    len: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(source: &'a DynamicArray<T>) -> Self {
        Self {
            source,
            position: 0,
            len: source.len(),
        }
    }

    /// Produce the next element, or `Err(ArrayError::Exhausted)` once
    /// every element has been produced.
    pub fn next_value(&mut self) -> Result<&'a T, ArrayError> {
        if self.position >= self.len {
            return Err(ArrayError::Exhausted);
        }
        let value = self.source.get(self.position)?;
        self.position += 1;
        Ok(value)
    }

    /// Number of elements already produced.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of elements still to come.
    pub fn remaining(&self) -> usize {
        self.len - self.position
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
