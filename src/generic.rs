//! The caller-facing heap
//!
//! [`GenericHeap`] holds one array-backed engine and forwards to it. It is what
//! [`HeapBuilder::bind`](crate::binding::HeapBuilder::bind) returns, and it
//! can also be built directly with [`GenericHeap::new`] (natural order) or
//! [`GenericHeap::with_less`].
//!
//! # Example
//!
//! ```rust
//! use generic_heap::GenericHeap;
//!
//! let mut heap = GenericHeap::new();
//! for x in [5, 3, 8, 1, 4] {
//!     heap.push(x);
//! }
//! assert_eq!(heap.len(), 5);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 5, 8]);
//! ```

use std::fmt;

use crate::engine::HeapEngine;
use crate::traits::{HeapError, Less, MinHeap, NaturalOrder};
use log::trace;

/// A binary min-heap over `T`, ordered by `L`
///
/// Not synchronised: share it across threads only behind a lock that covers
/// every operation.
#[derive(Clone)]
pub struct GenericHeap<T, L = NaturalOrder> {
    engine: HeapEngine<T, L>,
}

impl<T: Ord> GenericHeap<T, NaturalOrder> {
    /// Creates an empty heap ordered by `T`'s `Ord` implementation
    pub fn new() -> Self {
        Self::with_less(NaturalOrder)
    }
}

impl<T: Ord> Default for GenericHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L: Less<T>> GenericHeap<T, L> {
    /// Creates an empty heap with the given ordering
    pub fn with_less(less: L) -> Self {
        Self::from_engine(HeapEngine::new(less))
    }

    pub(crate) fn from_engine(engine: HeapEngine<T, L>) -> Self {
        Self { engine }
    }

    /// Returns the number of elements in the heap
    ///
    /// # Time Complexity
    /// O(1)
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.engine.capacity()
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.engine.peek()
    }

    /// Returns the ordering this heap was bound with
    pub fn ordering(&self) -> &L {
        self.engine.ordering()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.engine.push(item);
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.engine.pop_min().map_err(|err| {
            trace!("pop failed: {}", err);
            err
        })
    }

    /// Removes and returns the element at array position `index`
    ///
    /// Positions are those of the underlying heap array; index 0 is always the
    /// minimum, so `remove(0)` behaves like [`pop`](Self::pop).
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        self.engine.remove_at(index).map_err(|err| {
            trace!("remove failed: {}", err);
            err
        })
    }

    /// Drops every element, keeping the ordering
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Returns true if the min-heap property holds at every position
    pub fn is_valid(&self) -> bool {
        self.engine.is_valid()
    }

    /// Drains the heap into a vector in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.engine.pop_min() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T, L: Less<T>> MinHeap<T> for GenericHeap<T, L> {
    fn len(&self) -> usize {
        GenericHeap::len(self)
    }

    fn peek(&self) -> Option<&T> {
        GenericHeap::peek(self)
    }

    fn push(&mut self, item: T) {
        GenericHeap::push(self, item)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        GenericHeap::pop(self)
    }

    fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        GenericHeap::remove(self, index)
    }
}

impl<T, L: Less<T>> Extend<T> for GenericHeap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.engine.reserve(iter.size_hint().0);
        for item in iter {
            self.engine.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for GenericHeap<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_engine(HeapEngine::from_vec(iter.into_iter().collect(), NaturalOrder))
    }
}

impl<T, L: Less<T>> fmt::Debug for GenericHeap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericHeap")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = GenericHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }

    #[test]
    fn test_remove_root_matches_pop() {
        let mut heap: GenericHeap<i32> = [4, 2, 6, 1].into_iter().collect();
        assert_eq!(heap.remove(0), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_extend() {
        let mut heap: GenericHeap<i32, _> = GenericHeap::with_less(|a: &i32, b: &i32| a > b);
        heap.extend(vec![1, 7, 3]);
        assert_eq!(heap.pop(), Ok(7));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_trait_object_usage() {
        fn drain(heap: &mut dyn MinHeap<u32>) -> Vec<u32> {
            let mut out = Vec::new();
            while !heap.is_empty() {
                out.push(heap.pop().unwrap());
            }
            out
        }

        let mut heap = GenericHeap::new();
        for v in [9u32, 2, 5] {
            MinHeap::push(&mut heap, v);
        }
        assert_eq!(drain(&mut heap), vec![2, 5, 9]);
    }

    #[test]
    fn test_debug_shows_len() {
        let heap: GenericHeap<i32> = (0..4).collect();
        assert_eq!(format!("{:?}", heap), "GenericHeap { len: 4, .. }");
    }

    #[test]
    fn test_clear() {
        let mut heap: GenericHeap<i32> = (0..10).collect();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }
}
