//! Kani proof harnesses
//!
//! - `heap_proofs.rs`: bounded proofs of the engine's push / pop / remove contracts

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
