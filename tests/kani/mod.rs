//! Kani proof harnesses
//!
//! - `index_proofs.rs`: parent/children arithmetic for arbitrary factors
//! - `heap_proofs.rs`: push/pop/heapify keep the heap-order invariant
//! - `bounded_proofs.rs`: admission decisions of the bounded queues

#[cfg(kani)]
#[path = "bounded_proofs.rs"]
mod bounded_proofs;
#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
#[cfg(kani)]
#[path = "index_proofs.rs"]
mod index_proofs;
