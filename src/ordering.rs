//! Ordering strategies
//!
//! Every container in this crate is generic over a [`Precedence`] strategy that
//! decides which of two elements belongs closer to the root. Strategies are
//! zero-sized marker types, so choosing one costs nothing at runtime.
//!
//! A strategy is assembled from two pieces:
//!
//! - a [`Compare`] source answering "is `a` less than `b`?":
//!   - [`Natural`] uses the element's own `PartialOrd` (numbers, strings, ...)
//!   - [`ByLess`] uses the element's [`Less`] capability
//! - a direction, [`Min`] or [`Max`], which derives `precedes` from the source
//!   by choosing the operand order
//!
//! [`WorstFirst`] flips any strategy. Bounded queues use it so that the root of
//! their internal heap is always the weakest surviving element.
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heaps::ordering::{ByLess, Less, Max, Min, Natural, Precedence};
//!
//! assert!(<Min<Natural> as Precedence<i32>>::precedes(&1, &2));
//! assert!(<Max<Natural> as Precedence<i32>>::precedes(&2, &1));
//!
//! struct Version(u32, u32);
//!
//! impl Less for Version {
//!     fn less(&self, other: &Self) -> bool {
//!         (self.0, self.1) < (other.0, other.1)
//!     }
//! }
//!
//! assert!(<Min<ByLess> as Precedence<Version>>::precedes(&Version(1, 2), &Version(1, 3)));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Decides which of two elements should sit closer to the root.
///
/// Implementations must be deterministic and behave like a strict order
/// (irreflexive, asymmetric, transitive). The heaps do not defend against a
/// comparator that breaks these rules; the result is then an arbitrary but
/// memory-safe arrangement.
pub trait Precedence<T: ?Sized> {
    /// Returns true if `a` should float above `b`
    fn precedes(a: &T, b: &T) -> bool;
}

/// A source of "is-less-than" answers for `T`
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is strictly less than `b`
    fn less(a: &T, b: &T) -> bool;
}

/// Capability trait for element types that know how to compare themselves
/// without implementing `PartialOrd`.
pub trait Less {
    /// Returns true if `self` is strictly less than `other`
    fn less(&self, other: &Self) -> bool;
}

/// Compares elements through their built-in `PartialOrd` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(a: &T, b: &T) -> bool {
        a < b
    }
}

/// Compares elements through their [`Less`] capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByLess;

impl<T: Less + ?Sized> Compare<T> for ByLess {
    #[inline]
    fn less(a: &T, b: &T) -> bool {
        a.less(b)
    }
}

/// Smallest element first
pub struct Min<C = Natural>(PhantomData<C>);

/// Largest element first
pub struct Max<C = Natural>(PhantomData<C>);

impl<T: ?Sized, C: Compare<T>> Precedence<T> for Min<C> {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        C::less(a, b)
    }
}

impl<T: ?Sized, C: Compare<T>> Precedence<T> for Max<C> {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        C::less(b, a)
    }
}

/// Reverses a strategy so that the least desirable element under `P` is on top.
///
/// A bounded queue keeps its survivors in a heap ordered by ascending
/// desirability: the root is always the next element to evict, which turns the
/// admission decision into a single comparison against the root.
pub struct WorstFirst<P>(PhantomData<P>);

impl<T: ?Sized, P: Precedence<T>> Precedence<T> for WorstFirst<P> {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        P::precedes(b, a)
    }
}

// Manual impls: derives would put bounds on the phantom parameter.
macro_rules! marker_impls {
    ($($name:ident),*) => {$(
        impl<C> fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<C> Clone for $name<C> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<C> Copy for $name<C> {}

        impl<C> Default for $name<C> {
            fn default() -> Self {
                $name(PhantomData)
            }
        }
    )*};
}

marker_impls!(Min, Max, WorstFirst);
