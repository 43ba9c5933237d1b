//! Unbounded min and max heaps
//!
//! Thin aliases of [`DaryHeap`] that fix the ordering direction. The branching
//! factor is still chosen at construction.
//!
//! | Alias          | Root holds                           |
//! |----------------|--------------------------------------|
//! | [`MinHeap`]    | smallest element (`PartialOrd`)      |
//! | [`MaxHeap`]    | largest element (`PartialOrd`)       |
//! | [`LessMinHeap`]| smallest element ([`Less`](crate::ordering::Less)) |
//! | [`LessMaxHeap`]| largest element ([`Less`](crate::ordering::Less))  |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::MinHeap;
//!
//! let mut heap = MinHeap::new(3).unwrap();
//! for value in [3, 4, 10, -1, 22] {
//!     heap.push(value);
//! }
//! assert_eq!(heap.slice(), vec![-1, 3, 4, 10, 22]);
//! ```

use crate::dary::DaryHeap;
use crate::ordering::{ByLess, Max, Min, Natural};

/// Heap returning the smallest element first
pub type MinHeap<T> = DaryHeap<T, Min<Natural>>;

/// Heap returning the largest element first
pub type MaxHeap<T> = DaryHeap<T, Max<Natural>>;

/// Heap returning the smallest element first, compared through [`Less`](crate::ordering::Less)
pub type LessMinHeap<T> = DaryHeap<T, Min<ByLess>>;

/// Heap returning the largest element first, compared through [`Less`](crate::ordering::Less)
pub type LessMaxHeap<T> = DaryHeap<T, Max<ByLess>>;
