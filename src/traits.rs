//! Common traits and errors for the heap containers
//!
//! [`Heap`] is the shared surface of the unbounded heaps
//! ([`DaryHeap`](crate::dary::DaryHeap) and its aliases) and the bounded
//! queues ([`BoundedPQ`](crate::bounded::BoundedPQ) and its aliases). It lets
//! callers and tests drive any container generically.
//!
//! # Empty containers
//!
//! `peek` and `pop` return `None` on an empty container rather than panicking.
//! Callers that treat an empty pop as a bug can `expect` the result.

use std::fmt;

/// Error type for heap construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The branching factor is below [`MIN_FACTOR`](crate::dary::MIN_FACTOR)
    InvalidFactor {
        /// The rejected factor
        factor: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidFactor { factor } => {
                write!(
                    f,
                    "wrong value for factor: {}. Cannot be less than {}",
                    factor,
                    crate::dary::MIN_FACTOR
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for the heap and bounded queue containers
///
/// The "top" element is the one `peek` and `pop` act on: the most preceding
/// element for a heap, and the weakest survivor for a bounded queue.
///
/// # Example
///
/// ```rust
/// use rust_dary_heaps::{Heap, MinHeap};
///
/// fn drain_all<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Some(item) = heap.pop() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap = MinHeap::new(3).unwrap();
/// heap.heapify(vec![3, 4, 10, -1, 22]);
/// assert_eq!(drain_all(&mut heap), vec![-1, 3, 4, 10, 22]);
/// ```
pub trait Heap<T> {
    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of stored elements
    fn len(&self) -> usize;

    /// Offers an element to the container
    ///
    /// Heaps always store it. Bounded queues may discard it; the return value
    /// reports whether the element was stored.
    fn push(&mut self, item: T) -> bool;

    /// Returns the top element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element
    ///
    /// # Time Complexity
    /// O(d log_d n) for branching factor d
    fn pop(&mut self) -> Option<T>;

    /// Replaces the contents with `items` and restores the heap invariant
    ///
    /// # Time Complexity
    /// O(n) for the bottom-up rebuild
    fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I);
}
