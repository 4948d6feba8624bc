//! Bounded proofs for the heap engine
//!
//! Each harness pushes a small symbolic sequence, so every sift path for
//! heaps of up to four elements is covered.

use generic_heap::{GenericHeap, HeapError};

const MAX_LEN: usize = 4;

fn symbolic_heap() -> (GenericHeap<u8>, usize) {
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);

    let mut heap = GenericHeap::new();
    for _ in 0..len {
        heap.push(kani::any::<u8>());
    }
    (heap, len)
}

/// Proof that push increments the length and keeps the invariant
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_keeps_invariant() {
    let (mut heap, len) = symbolic_heap();
    heap.push(kani::any());

    assert!(heap.len() == len + 1);
    assert!(heap.is_valid());
}

/// Proof that pop returns a minimum and keeps the invariant
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_minimum() {
    let (mut heap, len) = symbolic_heap();
    let before = heap.peek().copied();

    match heap.pop() {
        Ok(v) => {
            assert!(len > 0);
            assert!(Some(v) == before);
            assert!(heap.len() == len - 1);
            if let Some(next) = heap.peek() {
                assert!(v <= *next);
            }
        }
        Err(err) => {
            assert!(len == 0);
            assert!(err == HeapError::Empty);
        }
    }
    assert!(heap.is_valid());
}

/// Proof that remove at any index either succeeds in range or fails out of range
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_any_index() {
    let (mut heap, len) = symbolic_heap();
    let index: usize = kani::any();
    kani::assume(index <= MAX_LEN);

    match heap.remove(index) {
        Ok(_) => {
            assert!(index < len);
            assert!(heap.len() == len - 1);
        }
        Err(err) => {
            assert!(index >= len);
            assert!(err == HeapError::IndexOutOfBounds { index, len });
            assert!(heap.len() == len);
        }
    }
    assert!(heap.is_valid());
}
