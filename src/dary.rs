//! Array-backed d-ary heap
//!
//! [`DaryHeap`] generalizes the binary heap to an arbitrary branching factor
//! `d >= 2`. Elements live in one contiguous `Vec`; the children of index `i`
//! are `i*d + 1 ..= i*d + d` and its parent is `(i - 1) / d`.
//!
//! Which element counts as "best" is decided by the [`Precedence`] strategy
//! `P`. [`MinHeap`](crate::MinHeap) and [`MaxHeap`](crate::MaxHeap) are aliases
//! of this type with the two natural directions.
//!
//! A wider factor makes the tree shallower, so `push` does fewer comparisons,
//! while `pop` compares up to `d` children per level.
//!
//! # Time Complexity
//!
//! | Operation | Complexity       |
//! |-----------|------------------|
//! | `push`    | O(log_d n)       |
//! | `pop`     | O(d log_d n)     |
//! | `peek`    | O(1)             |
//! | `heapify` | O(n)             |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::dary::DaryHeap;
//! use rust_dary_heaps::ordering::Max;
//!
//! let mut heap: DaryHeap<i32, Max> = DaryHeap::new(4).unwrap();
//! heap.push(3);
//! heap.push(17);
//! heap.push(5);
//!
//! assert_eq!(heap.peek(), Some(&17));
//! assert_eq!(heap.slice(), vec![17, 5, 3]);
//! assert!(heap.is_empty());
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;

use log::{debug, trace};

use crate::ordering::{Min, Precedence};
use crate::traits::{Heap, HeapError};

/// Smallest accepted branching factor
pub const MIN_FACTOR: usize = 2;

/// Branching factor used by [`Default`] and [`FromIterator`]
pub const DEFAULT_FACTOR: usize = 2;

/// A d-ary heap ordered by the strategy `P`
///
/// The root is always an element that no other element precedes.
pub struct DaryHeap<T, P = Min> {
    items: Vec<T>,
    factor: usize,
    _order: PhantomData<P>,
}

impl<T, P: Precedence<T>> DaryHeap<T, P> {
    /// Creates an empty heap with the given branching factor
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidFactor`] if `factor < 2`.
    pub fn new(factor: usize) -> Result<Self, HeapError> {
        Self::with_capacity(factor, 0)
    }

    /// Creates an empty heap that can hold `capacity` elements without reallocating
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidFactor`] if `factor < 2`.
    pub fn with_capacity(factor: usize, capacity: usize) -> Result<Self, HeapError> {
        Self::check_factor(factor)?;
        Ok(Self {
            items: Vec::with_capacity(capacity),
            factor,
            _order: PhantomData,
        })
    }

    /// Builds a heap from an existing vector, reusing its allocation
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidFactor`] if `factor < 2`.
    pub fn from_vec(factor: usize, items: Vec<T>) -> Result<Self, HeapError> {
        Self::check_factor(factor)?;
        let mut heap = Self {
            items,
            factor,
            _order: PhantomData,
        };
        heap.rebuild();
        Ok(heap)
    }

    /// Creates an empty binary heap
    pub fn binary() -> Self {
        Self {
            items: Vec::new(),
            factor: DEFAULT_FACTOR,
            _order: PhantomData,
        }
    }

    fn check_factor(factor: usize) -> Result<(), HeapError> {
        if factor < MIN_FACTOR {
            debug!("rejecting heap factor {}", factor);
            return Err(HeapError::InvalidFactor { factor });
        }
        Ok(())
    }

    /// Returns the branching factor
    #[inline]
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the backing array in heap order (root first)
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Candidate child indices of `index`
    ///
    /// Yields `factor` indices, some possibly past the end of the heap. The
    /// range saturates at `usize::MAX` instead of overflowing.
    #[inline]
    pub fn children(&self, index: usize) -> Range<usize> {
        let first = index.saturating_mul(self.factor).saturating_add(1);
        first..first.saturating_add(self.factor)
    }

    /// Children of `index` that are inside the heap
    #[inline]
    fn children_in_bounds(&self, index: usize) -> Range<usize> {
        let len = self.items.len();
        let children = self.children(index);
        children.start.min(len)..children.end.min(len)
    }

    /// Parent index of `index`; the root is its own parent
    #[inline]
    pub fn parent(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            (index - 1) / self.factor
        }
    }

    /// Returns the in-bounds candidate holding the most preceding element
    ///
    /// Out-of-bounds candidates are skipped. On ties the earliest candidate wins.
    /// Returns `None` if no candidate is in bounds.
    pub fn best_child<I>(&self, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<usize> = None;
        for index in candidates {
            if index >= self.items.len() {
                continue;
            }
            match best {
                Some(current) if !P::precedes(&self.items[index], &self.items[current]) => {}
                _ => best = Some(index),
            }
        }
        best
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if P::precedes(&self.items[index], &self.items[parent]) {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.best_child(self.children_in_bounds(index)) {
            if P::precedes(&self.items[child], &self.items[index]) {
                self.items.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Bottom-up rebuild, starting from the last internal node
    fn rebuild(&mut self) {
        if self.items.len() < 2 {
            return;
        }
        let last_parent = self.parent(self.items.len() - 1);
        for index in (0..=last_parent).rev() {
            self.sift_down(index);
        }
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_d n)
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns the top element without removing it
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the top element
    ///
    /// # Time Complexity
    /// O(d log_d n)
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Some(top)
    }

    /// Overwrites the top element with `item` and restores the heap
    ///
    /// Returns the previous top, or `None` (after storing `item`) if the heap
    /// was empty. Cheaper than a `pop` followed by a `push`.
    pub fn replace_top(&mut self, item: T) -> Option<T> {
        match self.items.first_mut() {
            Some(top) => {
                let previous = std::mem::replace(top, item);
                self.sift_down(0);
                Some(previous)
            }
            None => {
                self.items.push(item);
                None
            }
        }
    }

    /// Replaces the contents with `items` and rebuilds the heap bottom-up
    ///
    /// # Time Complexity
    /// O(n)
    pub fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.clear();
        self.items.extend(items);
        trace!(
            "heapify {} items with factor {}",
            self.items.len(),
            self.factor
        );
        self.rebuild();
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pops elements in heap order until the heap is empty
    ///
    /// Elements not consumed by the iterator are dropped with it.
    pub fn drain(&mut self) -> Drain<'_, T, P> {
        Drain { heap: self }
    }

    /// Empties the heap into a vector in pop order
    pub fn slice(&mut self) -> Vec<T> {
        self.drain().collect()
    }

    /// Returns true if no element precedes its parent
    pub fn is_valid(&self) -> bool {
        (1..self.items.len())
            .all(|child| !P::precedes(&self.items[child], &self.items[self.parent(child)]))
    }
}

impl<T, P: Precedence<T>> Heap<T> for DaryHeap<T, P> {
    fn is_empty(&self) -> bool {
        DaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        DaryHeap::len(self)
    }

    fn push(&mut self, item: T) -> bool {
        DaryHeap::push(self, item);
        true
    }

    fn peek(&self) -> Option<&T> {
        DaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        DaryHeap::pop(self)
    }

    fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        DaryHeap::heapify(self, items)
    }
}

impl<T, P: Precedence<T>> Default for DaryHeap<T, P> {
    fn default() -> Self {
        Self::binary()
    }
}

impl<T: Clone, P> Clone for DaryHeap<T, P> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            factor: self.factor,
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for DaryHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaryHeap")
            .field("factor", &self.factor)
            .field("items", &self.items)
            .finish()
    }
}

impl<T, P: Precedence<T>> Extend<T> for DaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, P: Precedence<T>> FromIterator<T> for DaryHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::binary();
        heap.heapify(iter);
        heap
    }
}

/// Draining iterator returned by [`DaryHeap::drain`]
pub struct Drain<'a, T, P: Precedence<T>> {
    heap: &'a mut DaryHeap<T, P>,
}

impl<T, P: Precedence<T>> Iterator for Drain<'_, T, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, P: Precedence<T>> ExactSizeIterator for Drain<'_, T, P> {}

impl<T, P: Precedence<T>> FusedIterator for Drain<'_, T, P> {}

impl<T, P: Precedence<T>> Drop for Drain<'_, T, P> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
