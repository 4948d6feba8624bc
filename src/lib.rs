//! Generic Binary Min-Heap for Rust
//!
//! This crate provides one array-backed binary min-heap engine that works for
//! any element type and any caller-supplied ordering. The ordering is bound
//! once, at construction, and every comparison afterwards is a statically
//! dispatched call into it; there is no per-comparison type inspection.
//!
//! # Features
//!
//! - **Any ordering**: closures, [`NaturalOrder`] for `T: Ord`, or [`Reversed`] for max-heaps
//! - **Arbitrary removal**: `remove(index)` restores the invariant in both directions
//! - **Checked adoption**: bind an existing heap array without reordering it
//! - **Compile-time binding checks**: a heap without an ordering does not compile
//!
//! # Modules
//!
//! - `engine` (internal): the sift-up / sift-down engine over a `Vec<T>`
//! - [`binding`]: [`HeapBuilder`], the one-time binding of element type and ordering
//! - [`generic`]: [`GenericHeap`], the heap callers hold
//! - [`traits`]: [`Less`], [`MinHeap`], [`HeapError`] and [`RejectedHeap`]
//!
//! # Example
//!
//! ```rust
//! use generic_heap::{HeapBuilder, HeapError};
//!
//! let mut heap = HeapBuilder::new()
//!     .less(|a: &(u8, char), b: &(u8, char)| a.0 < b.0)
//!     .bind();
//!
//! heap.push((2, 'b'));
//! heap.push((1, 'a'));
//! heap.push((3, 'c'));
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.pop(), Ok((1, 'a')));
//! assert_eq!(heap.remove(7), Err(HeapError::IndexOutOfBounds { index: 7, len: 2 }));
//! ```
//!
//! # Concurrency
//!
//! Heaps are plain owned values with no interior locking. Share one across
//! threads only behind a lock that covers every operation.

pub mod binding;
mod engine;
pub mod generic;
pub mod traits;

// Re-export the main types for convenience
pub use binding::HeapBuilder;
pub use generic::GenericHeap;
pub use traits::{HeapError, Less, MinHeap, NaturalOrder, RejectedHeap, Reversed};
