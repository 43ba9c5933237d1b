//! d-ary Heaps and Bounded Priority Queues for Rust
//!
//! This crate provides array-backed heaps with a configurable branching factor
//! and size-bounded "top-K" priority queues, all built on one generic core.
//!
//! # Features
//!
//! - **d-ary heap** ([`DaryHeap`]): any branching factor `d >= 2`; O(log_d n) push,
//!   O(d log_d n) pop, O(1) peek, O(n) bulk heapify
//! - **Min/Max heaps** ([`MinHeap`], [`MaxHeap`]): unbounded heaps ordered by `PartialOrd`
//! - **Bounded queues** ([`MinPQ`], [`MaxPQ`]): retain only the `capacity` best
//!   elements ever offered, evicting the current worst on each improvement
//! - **Pluggable ordering** ([`ordering`]): use the element's own order, or a
//!   [`Less`] capability for types that do not implement `PartialOrd`
//!   ([`LessMinHeap`], [`LessMaxHeap`], [`LessMinPQ`], [`LessMaxPQ`])
//!
//! The containers are single-threaded; wrap them in a lock to share them.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::{MaxPQ, MinHeap};
//!
//! let mut heap = MinHeap::new(3).unwrap();
//! heap.heapify(vec![3, 4, 10, -1, 22]);
//! assert_eq!(heap.pop(), Some(-1));
//!
//! let mut top = MaxPQ::new(3).unwrap();
//! top.extend([4, 2, 9, 1, 7]);
//! assert_eq!(top.ordered_slice(), vec![9, 7, 4]);
//! ```

pub mod bounded;
pub mod dary;
pub mod heap;
pub mod ordering;
pub mod traits;

pub use bounded::{BoundedPQ, LessMaxPQ, LessMinPQ, MaxPQ, MinPQ};
pub use dary::DaryHeap;
pub use heap::{LessMaxHeap, LessMinHeap, MaxHeap, MinHeap};
pub use ordering::Less;
pub use traits::{Heap, HeapError};
