//! Common traits for the generic heap
//!
//! This module holds the two seams the heap is built around:
//!
//! - [`Less`]: the caller's ordering relation, invoked by the engine once per comparison
//! - [`MinHeap`]: the bound operations (`push`, `pop`, `remove`) plus size queries
//!
//! and the [`HeapError`] type shared by every fallible operation.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Extract-minimum was called on an empty heap
    Empty,
    /// The index passed to `remove` is outside `[0, len)`
    IndexOutOfBounds {
        /// The index that was requested
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
    /// The heap could not be bound with the supplied configuration
    Configuration(String),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "cannot extract the minimum of an empty heap"),
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for heap of length {}", index, len)
            }
            HeapError::Configuration(reason) => {
                write!(f, "invalid heap configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A sequence that could not be bound, returned together with the reason
///
/// Binding consumes the caller's `Vec<T>`; on rejection it comes back here
/// untouched, so nothing the caller owned is lost or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedHeap<T> {
    error: HeapError,
    elements: Vec<T>,
}

impl<T> RejectedHeap<T> {
    pub(crate) fn new(error: HeapError, elements: Vec<T>) -> Self {
        Self { error, elements }
    }

    /// Returns why the sequence was rejected
    pub fn error(&self) -> &HeapError {
        &self.error
    }

    /// Returns the rejected sequence, in its original order
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Splits into the reason and the rejected sequence
    pub fn into_parts(self) -> (HeapError, Vec<T>) {
        (self.error, self.elements)
    }
}

impl<T> From<RejectedHeap<T>> for HeapError {
    fn from(rejected: RejectedHeap<T>) -> Self {
        rejected.error
    }
}

impl<T> fmt::Display for RejectedHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} elements returned)", self.error, self.elements.len())
    }
}

impl<T: fmt::Debug> std::error::Error for RejectedHeap<T> {}

/// An ordering relation over `T`
///
/// `less(a, b)` returns true when `a` must sort before `b`. The engine calls it
/// exactly once per comparison during sift-up and sift-down, so it must be a
/// pure function of its two arguments; an ordering with side effects or one
/// that is not a strict weak order voids the heap invariant.
///
/// # Panics
///
/// A panic inside `less` unwinds out of the heap operation that called it,
/// payload unchanged. The operation does not complete: an element being popped
/// or removed is dropped, and the heap's contents and order are unspecified
/// afterwards. Clear or discard a heap whose ordering has panicked.
///
/// Any `Fn(&T, &T) -> bool` closure is an ordering:
///
/// ```rust
/// use generic_heap::Less;
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// ```
pub trait Less<T> {
    /// Returns true if `a` sorts strictly before `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The ordering given by `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Less<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Flips an ordering, turning the min-heap into a max-heap
///
/// ```rust
/// use generic_heap::{GenericHeap, MinHeap, NaturalOrder, Reversed};
///
/// let mut heap = GenericHeap::with_less(Reversed(NaturalOrder));
/// heap.push(1);
/// heap.push(9);
/// heap.push(4);
/// assert_eq!(heap.pop(), Ok(9));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<L>(pub L);

impl<T, L: Less<T>> Less<T> for Reversed<L> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

/// The bound operations of a min-heap
///
/// A bound heap exposes exactly three mutating operations: `push`, `pop`
/// (extract-minimum) and `remove` (by array index), plus size queries.
/// Because the operations are trait methods, a type that lacks one of them
/// cannot be used as a `MinHeap` at all; the check happens at compile time.
pub trait MinHeap<T> {
    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the minimum element without removing it
    fn peek(&self) -> Option<&T>;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the element stored at array position `index`
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, index: usize) -> Result<T, HeapError>;
}
