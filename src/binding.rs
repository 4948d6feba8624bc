//! Binding an element type and ordering to the heap engine
//!
//! [`HeapBuilder`] is the one-time binding step. It collects the ordering
//! (and optionally a capacity and initial elements) and produces a
//! [`GenericHeap`] whose `push` / `pop` / `remove` are specialised for the
//! element type at compile time.
//!
//! The builder is typestate: until an ordering is supplied its second type
//! parameter is [`Unordered`], and `bind` does not exist. Forgetting the
//! ordering is therefore a compile error rather than a setup-time failure:
//!
//! ```compile_fail
//! use generic_heap::HeapBuilder;
//!
//! let heap = HeapBuilder::<i32>::new().bind();
//! ```
//!
//! Likewise, asking for the natural order on a type without `Ord` is rejected:
//!
//! ```compile_fail
//! use generic_heap::HeapBuilder;
//!
//! struct Opaque;
//! let heap = HeapBuilder::<Opaque>::new().natural().bind();
//! ```
//!
//! # Example
//!
//! ```rust
//! use generic_heap::{HeapBuilder, MinHeap};
//!
//! #[derive(Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! let mut jobs = HeapBuilder::new()
//!     .less(|a: &Job, b: &Job| a.deadline < b.deadline)
//!     .with_capacity(8)
//!     .bind();
//!
//! jobs.push(Job { name: "deploy", deadline: 30 });
//! jobs.push(Job { name: "review", deadline: 10 });
//! assert_eq!(jobs.pop().map(|j| j.name), Ok("review"));
//! assert_eq!(jobs.len(), 1);
//! ```

use crate::engine::HeapEngine;
use crate::generic::GenericHeap;
use crate::traits::{HeapError, Less, NaturalOrder, RejectedHeap};
use log::debug;

/// Marker for a builder that has no ordering yet
#[derive(Debug, Clone, Copy, Default)]
pub struct Unordered;

/// Builder that binds an element type and ordering to a heap
#[derive(Debug)]
pub struct HeapBuilder<T, L = Unordered> {
    less: L,
    capacity: usize,
    elements: Vec<T>,
}

impl<T> HeapBuilder<T, Unordered> {
    /// Starts a binding with no ordering, capacity or elements
    pub fn new() -> Self {
        Self {
            less: Unordered,
            capacity: 0,
            elements: Vec::new(),
        }
    }
}

impl<T> Default for HeapBuilder<T, Unordered> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L> HeapBuilder<T, L> {
    /// Supplies the ordering, replacing any previous one
    ///
    /// Closures need their parameter types spelled out, e.g.
    /// `|a: &u32, b: &u32| a < b`.
    pub fn less<M: Less<T>>(self, less: M) -> HeapBuilder<T, M> {
        HeapBuilder {
            less,
            capacity: self.capacity,
            elements: self.elements,
        }
    }

    /// Orders elements by their `Ord` implementation
    pub fn natural(self) -> HeapBuilder<T, NaturalOrder>
    where
        T: Ord,
    {
        self.less(NaturalOrder)
    }

    /// Reserves room for at least `capacity` elements
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seeds the heap with initial elements, heap-ordered at bind time
    pub fn elements<I: IntoIterator<Item = T>>(mut self, elements: I) -> Self {
        self.elements.extend(elements);
        self
    }
}

impl<T, L: Less<T>> HeapBuilder<T, L> {
    /// Binds the ordering and produces the heap
    ///
    /// Seeded elements are heapified in O(n).
    pub fn bind(self) -> GenericHeap<T, L> {
        let HeapBuilder {
            less,
            capacity,
            mut elements,
        } = self;

        elements.reserve(capacity.saturating_sub(elements.len()));
        debug!(
            "binding heap of {} with {} seeded elements, capacity {}",
            std::any::type_name::<T>(),
            elements.len(),
            elements.capacity()
        );
        GenericHeap::from_engine(HeapEngine::from_vec(elements, less))
    }

    /// Binds the ordering to a sequence that is already a valid heap array
    ///
    /// The sequence is adopted as-is, so index positions the caller computed
    /// remain meaningful for [`GenericHeap::remove`].
    ///
    /// # Errors
    /// Returns a [`RejectedHeap`] carrying [`HeapError::Configuration`] if
    /// elements were also seeded with [`elements`](Self::elements), or if some
    /// element sorts strictly before its parent under the ordering. Nothing is
    /// built in either case, and the rejected sequence is handed back unchanged.
    ///
    /// ```rust
    /// use generic_heap::{HeapBuilder, HeapError};
    ///
    /// let heap = HeapBuilder::new().natural().bind_heap_ordered(vec![1, 3, 2, 7, 5]);
    /// assert!(heap.is_ok());
    ///
    /// let rejected = HeapBuilder::new()
    ///     .natural()
    ///     .bind_heap_ordered(vec![4, 3])
    ///     .unwrap_err();
    /// assert!(matches!(rejected.error(), HeapError::Configuration(_)));
    /// assert_eq!(rejected.into_elements(), vec![4, 3]);
    /// ```
    pub fn bind_heap_ordered(
        self,
        elements: Vec<T>,
    ) -> Result<GenericHeap<T, L>, RejectedHeap<T>> {
        if !self.elements.is_empty() {
            let error = HeapError::Configuration(format!(
                "{} elements were already seeded; a heap-ordered sequence must be the only contents",
                self.elements.len()
            ));
            return Err(RejectedHeap::new(error, elements));
        }

        let mut engine = HeapEngine::from_heap_ordered(elements, self.less);
        if let Some(index) = engine.first_violation() {
            debug!("rejecting heap-ordered binding: violation at index {}", index);
            let error = HeapError::Configuration(format!(
                "element at index {} sorts before its parent at index {}",
                index,
                (index - 1) / 2
            ));
            return Err(RejectedHeap::new(error, engine.into_vec()));
        }

        engine.reserve(self.capacity.saturating_sub(engine.len()));
        debug!(
            "adopted heap-ordered sequence of {} elements of {}",
            engine.len(),
            std::any::type_name::<T>()
        );
        Ok(GenericHeap::from_engine(engine))
    }
}
