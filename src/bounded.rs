//! Bounded top-K priority queues
//!
//! A [`BoundedPQ`] keeps only the `capacity` best elements it has been offered
//! and never stores more than that. "Best" is defined by the strategy `P`:
//! a [`MaxPQ`] keeps the largest elements, a [`MinPQ`] the smallest.
//!
//! # Admission
//!
//! Survivors are stored in a binary [`DaryHeap`] ordered by [`WorstFirst<P>`],
//! so its root is always the weakest survivor. Once the queue is full, an
//! incoming element is compared against that root only:
//!
//! - strictly better: it overwrites the root, which is sifted down (the old
//!   worst is evicted)
//! - equal or worse: it is discarded and the queue is left untouched
//!
//! Ties therefore keep the element that arrived first.
//!
//! `pop` and `peek` act on the weakest survivor. Use
//! [`ordered_slice`](BoundedPQ::ordered_slice) to get the survivors best-first.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::MaxPQ;
//!
//! let mut top = MaxPQ::new(5).unwrap();
//! for value in [4, 2, 3, 1, 6, 5, 7, 9, 8, 10] {
//!     top.push(value);
//! }
//! assert_eq!(top.len(), 5);
//! assert_eq!(top.ordered_slice(), vec![10, 9, 8, 7, 6]);
//! ```

use std::fmt;

use log::trace;

use crate::dary::{DaryHeap, Drain};
use crate::ordering::{ByLess, Max, Min, Natural, Precedence, WorstFirst};
use crate::traits::{Heap, HeapError};

/// Branching factor of the admission heap
pub const BOUNDED_FACTOR: usize = 2;

/// Priority queue retaining the `capacity` best elements under `P`
pub struct BoundedPQ<T, P = Max> {
    /// Survivors, weakest at the root
    admitted: DaryHeap<T, WorstFirst<P>>,
    capacity: usize,
}

/// Keeps the `capacity` smallest elements
pub type MinPQ<T> = BoundedPQ<T, Min<Natural>>;

/// Keeps the `capacity` largest elements
pub type MaxPQ<T> = BoundedPQ<T, Max<Natural>>;

/// Keeps the `capacity` smallest elements, compared through [`Less`](crate::ordering::Less)
pub type LessMinPQ<T> = BoundedPQ<T, Min<ByLess>>;

/// Keeps the `capacity` largest elements, compared through [`Less`](crate::ordering::Less)
pub type LessMaxPQ<T> = BoundedPQ<T, Max<ByLess>>;

impl<T, P: Precedence<T>> BoundedPQ<T, P> {
    /// Creates an empty queue holding at most `capacity` elements
    ///
    /// The admission heap is always binary; `capacity` only bounds its size.
    /// A capacity of zero yields a queue that discards everything.
    ///
    /// # Errors
    /// Propagates [`HeapError::InvalidFactor`] from the admission heap.
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        let admitted = DaryHeap::new(BOUNDED_FACTOR)?;
        Ok(Self { admitted, capacity })
    }

    /// Maximum number of retained elements
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained elements
    #[inline]
    pub fn len(&self) -> usize {
        self.admitted.len()
    }

    /// Returns true if nothing is retained
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.admitted.is_empty()
    }

    /// Returns true once the queue holds `capacity` elements
    #[inline]
    pub fn is_full(&self) -> bool {
        self.admitted.len() >= self.capacity
    }

    /// Offers an element, returning whether it was stored
    ///
    /// Below capacity the element is always stored. At capacity it replaces the
    /// weakest survivor only if it is strictly better.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) -> bool {
        if self.admitted.len() < self.capacity {
            self.admitted.push(item);
            return true;
        }
        self.admit(item)
    }

    /// Admission decision for a full queue
    fn admit(&mut self, item: T) -> bool {
        let better = match self.admitted.peek() {
            Some(worst) => P::precedes(&item, worst),
            None => false,
        };
        if !better {
            trace!("rejected element at capacity {}", self.capacity);
            return false;
        }
        self.admitted.replace_top(item);
        trace!("evicted weakest element at capacity {}", self.capacity);
        true
    }

    /// Replaces the contents with the best `capacity` elements of `items`
    ///
    /// The first `capacity` items are heapified in one pass; every remaining
    /// item then goes through the same admission check as [`push`](Self::push).
    /// Fewer than `capacity` items simply leave the queue under capacity.
    pub fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let mut items = items.into_iter();
        self.admitted.heapify(items.by_ref().take(self.capacity));
        for item in items {
            self.admit(item);
        }
    }

    /// Returns the weakest retained element
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.admitted.peek()
    }

    /// Removes and returns the weakest retained element
    pub fn pop(&mut self) -> Option<T> {
        self.admitted.pop()
    }

    /// Removes all elements; the capacity is unchanged
    pub fn clear(&mut self) {
        self.admitted.clear();
    }

    /// Pops elements weakest-first until the queue is empty
    pub fn drain(&mut self) -> Drain<'_, T, WorstFirst<P>> {
        self.admitted.drain()
    }

    /// Empties the queue into a vector, weakest first
    pub fn slice(&mut self) -> Vec<T> {
        self.admitted.slice()
    }

    /// Empties the queue into a vector, best first
    pub fn ordered_slice(&mut self) -> Vec<T> {
        let mut ordered = self.admitted.slice();
        ordered.reverse();
        ordered
    }

    /// Returns the survivors in internal heap order (weakest first)
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.admitted.as_slice()
    }

    /// Returns true if the admission heap invariant holds
    pub fn is_valid(&self) -> bool {
        self.admitted.len() <= self.capacity && self.admitted.is_valid()
    }
}

impl<T, P: Precedence<T>> Heap<T> for BoundedPQ<T, P> {
    fn is_empty(&self) -> bool {
        BoundedPQ::is_empty(self)
    }

    fn len(&self) -> usize {
        BoundedPQ::len(self)
    }

    fn push(&mut self, item: T) -> bool {
        BoundedPQ::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BoundedPQ::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BoundedPQ::pop(self)
    }

    fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        BoundedPQ::heapify(self, items)
    }
}

impl<T, P: Precedence<T>> Extend<T> for BoundedPQ<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Clone, P> Clone for BoundedPQ<T, P> {
    fn clone(&self) -> Self {
        Self {
            admitted: self.admitted.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for BoundedPQ<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedPQ")
            .field("capacity", &self.capacity)
            .field("admitted", &self.admitted)
            .finish()
    }
}
