//! Array-backed heap engine
//!
//! [`HeapEngine`] owns the backing `Vec<T>` and the ordering, and implements
//! the classic sift-up / sift-down restoration routines. It never inspects
//! elements itself: every decision goes through [`Less::less`], so one engine
//! serves every element type the caller binds.
//!
//! Positions are computed arithmetically: the parent of `i` is `(i - 1) / 2`,
//! its children are `2i + 1` and `2i + 2`. There are no node objects and no
//! back-pointers.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `push`      | O(log n)   |
//! | `pop_min`   | O(log n)   |
//! | `remove_at` | O(log n)   |
//! | `peek`      | O(1)       |
//! | `heapify`   | O(n)       |

use crate::traits::{HeapError, Less};

/// The heap engine: a `Vec<T>` kept in min-heap order under `L`
#[derive(Clone)]
pub struct HeapEngine<T, L> {
    /// Heap-ordered elements; index 0 is the root
    data: Vec<T>,
    less: L,
}

impl<T, L: Less<T>> HeapEngine<T, L> {
    /// Creates an empty engine with the given ordering
    pub fn new(less: L) -> Self {
        Self {
            data: Vec::new(),
            less,
        }
    }

    /// Wraps an arbitrary sequence, reordering it into a valid heap
    pub fn from_vec(data: Vec<T>, less: L) -> Self {
        let mut engine = Self { data, less };
        engine.heapify();
        engine
    }

    /// Wraps a sequence that is already heap-ordered, without touching it
    ///
    /// The caller is responsible for the invariant; see
    /// [`HeapBuilder::bind_heap_ordered`](crate::binding::HeapBuilder::bind_heap_ordered)
    /// for the checked form.
    pub(crate) fn from_heap_ordered(data: Vec<T>, less: L) -> Self {
        Self { data, less }
    }

    /// Returns the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the engine holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the backing sequence holds without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns the root, which is a minimum under the ordering
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the ordering the engine compares with
    pub fn ordering(&self) -> &L {
        &self.less
    }

    /// Drops every element, keeping the ordering
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Appends `item` and sifts it up into place
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root
    ///
    /// The root is swapped with the last slot and taken off the tail, then the
    /// sift-down runs over the reduced range.
    pub fn pop_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // Non-empty, so `swap_remove(0)` cannot panic.
        let out = self.data.swap_remove(0);
        self.sift_down(0, self.data.len());
        Ok(out)
    }

    /// Removes and returns the element at array position `index`
    ///
    /// The last element is moved into the hole and may be too large or too
    /// small for its new position, so both sifts run. At most one of them
    /// moves anything. Removing the last slot needs no restoration.
    pub fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if index >= len {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }

        // `index < len`, so `swap_remove` cannot panic.
        let out = self.data.swap_remove(index);
        let limit = self.data.len();
        if index < limit {
            self.sift_down(index, limit);
            self.sift_up(index);
        }
        Ok(out)
    }

    /// Reorders the whole sequence into a valid heap, bottom-up
    pub fn heapify(&mut self) {
        let len = self.data.len();
        for i in (0..len / 2).rev() {
            self.sift_down(i, len);
        }
    }

    /// Returns the first index whose element sorts strictly before its parent
    pub fn first_violation(&self) -> Option<usize> {
        (1..self.data.len()).find(|&child| {
            let parent = (child - 1) / 2;
            self.less.less(&self.data[child], &self.data[parent])
        })
    }

    /// Returns true if every parent is not greater than its children
    pub fn is_valid(&self) -> bool {
        self.first_violation().is_none()
    }

    /// Consumes the engine, returning the raw sequence
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn is_less(&self, i: usize, j: usize) -> bool {
        self.less.less(&self.data[i], &self.data[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    /// Moves the element at `index` toward the root while it sorts before its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.is_less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` toward the leaves, looking only at `[0, limit)`
    fn sift_down(&mut self, mut index: usize, limit: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= limit {
                break;
            }
            // Right wins ties: it is taken whenever left is not strictly less.
            let right = left + 1;
            let child = if right < limit && !self.is_less(left, right) {
                right
            } else {
                left
            };
            if !self.is_less(child, index) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }
}
