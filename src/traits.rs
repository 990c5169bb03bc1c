//! Error type and ordering capability shared by the heap engine
//!
//! The engine never compares elements with `Ord` directly. Every structural
//! comparison goes through a [`TotalOrder`] value supplied at construction:
//!
//! - [`MinOrder`]: ascending order, index 0 holds the minimum (the default)
//! - [`MaxOrder`]: descending order, index 0 holds the maximum
//! - [`ByPriority`]: orders [`Entry`](crate::entry::Entry) pairs by priority alone
//! - any `Fn(&T, &T) -> bool` closure

use std::fmt;

use crate::entry::Entry;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Extraction or peek on a heap with no elements
    EmptyHeap,
    /// Insertion into a heap whose size already equals its capacity
    HeapFull,
    /// The new value is not more extreme than the current one
    InvalidDecrease,
    /// A decrease-key index outside the occupied prefix
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of occupied slots at the time of the call
        len: usize,
    },
    /// Checked identity lookup found no matching element
    IdentityNotFound,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "the heap is empty"),
            HeapError::HeapFull => write!(f, "the heap is full"),
            HeapError::InvalidDecrease => {
                write!(f, "new value is not more extreme than the current value")
            }
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for heap of size {len}")
            }
            HeapError::IdentityNotFound => {
                write!(f, "no element with the given identity is in the heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// The heap-order predicate
///
/// `le(a, b)` returns true when `a` may sit above `b` in the heap, i.e. `a`
/// is at least as extreme as `b`. Implementations must be deterministic and
/// describe a total preorder (transitive and total); ties are allowed and are
/// broken by traversal order.
pub trait TotalOrder<T> {
    /// Returns true if `a` is at least as extreme as `b`
    fn le(&self, a: &T, b: &T) -> bool;
}

/// Ascending order: `a <= b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: PartialOrd> TotalOrder<T> for MinOrder {
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Descending order: `a >= b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: PartialOrd> TotalOrder<T> for MaxOrder {
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Orders [`Entry`] pairs by their priority under the wrapped order, ignoring ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPriority<O = MinOrder>(pub O);

impl<K, P, O: TotalOrder<P>> TotalOrder<Entry<K, P>> for ByPriority<O> {
    #[inline]
    fn le(&self, a: &Entry<K, P>, b: &Entry<K, P>) -> bool {
        self.0.le(&a.priority, &b.priority)
    }
}

impl<T, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
