//! Fixed-capacity binary heap
//!
//! An array-backed binary heap over the implicit tree `left(i) = 2i + 1`,
//! `right(i) = 2i + 2`, `parent(i) = (i - 1) / 2`. The heap order is a
//! [`TotalOrder`] value fixed at construction, so the same engine serves as a
//! min-heap ([`MinOrder`], the default), a max-heap ([`MaxOrder`]) or anything
//! a closure can express.
//!
//! Capacity is fixed when the heap is created; [`BinHeap::insert`] fails with
//! [`HeapError::HeapFull`] instead of growing.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity |
//! |----------------------------|------------|
//! | `insert`                   | O(log n)   |
//! | `pop`                      | O(log n)   |
//! | `peek`                     | O(1)       |
//! | `decrease_key`             | O(log n)   |
//! | `decrease_key_by_identity` | O(n)       |
//! | `from_vec`                 | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use fixed_binheap::BinHeap;
//!
//! let mut heap = BinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.len(), 4);
//! ```

use std::fmt;

use crate::entry::Entry;
use crate::traits::{HeapError, MinOrder, TotalOrder};

/// Which child of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Index of the parent of `node`, or `None` for the root
#[inline]
pub fn parent(node: usize) -> Option<usize> {
    if node == 0 {
        None
    } else {
        Some((node - 1) / 2)
    }
}

/// Index of the left child of `node`
#[inline]
pub fn left(node: usize) -> usize {
    2 * node + 1
}

/// Index of the right child of `node`
#[inline]
pub fn right(node: usize) -> usize {
    2 * node + 2
}

/// Index of the child of `node` on the given side
#[inline]
pub fn child(node: usize, side: Side) -> usize {
    match side {
        Side::Left => left(node),
        Side::Right => right(node),
    }
}

/// A fixed-capacity binary heap ordered by `O`
///
/// The occupied prefix of the backing buffer always satisfies
/// `order.le(data[parent(i)], data[i])` for every non-root index, so the root
/// is the extreme element under the order.
#[derive(Debug, Clone)]
pub struct BinHeap<T, O = MinOrder> {
    /// Occupied slots in heap layout; `data.len()` is the heap size
    data: Vec<T>,
    /// Fixed upper bound on `data.len()`
    capacity: usize,
    order: O,
}

impl<T: PartialOrd> BinHeap<T, MinOrder> {
    /// Creates an empty min-heap that can hold `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MinOrder)
    }

    /// Builds a min-heap from `elements` in O(n)
    ///
    /// The capacity equals `elements.len()`.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_and_order(elements, MinOrder)
    }
}

impl<T, O: TotalOrder<T>> BinHeap<T, O> {
    /// Creates an empty heap of the given capacity ordered by `order`
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        BinHeap {
            data: Vec::with_capacity(capacity),
            capacity,
            order,
        }
    }

    /// Builds a heap from `elements` ordered by `order`
    ///
    /// Takes ownership of the vector; no element is cloned. The capacity
    /// equals `elements.len()`.
    pub fn from_vec_and_order(elements: Vec<T>, order: O) -> Self {
        let capacity = elements.len();
        Self::from_vec_with_capacity(elements, capacity, order)
    }

    /// Builds a heap from `elements` with room for `capacity` elements in total
    ///
    /// A `capacity` smaller than `elements.len()` is raised to it.
    pub fn from_vec_with_capacity(mut elements: Vec<T>, capacity: usize, order: O) -> Self {
        let capacity = capacity.max(elements.len());
        elements.reserve_exact(capacity - elements.len());

        let mut heap = BinHeap {
            data: elements,
            capacity,
            order,
        };
        heap.build_heap();
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the fixed number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no further insertion can succeed
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// The occupied slots in heap layout
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The order this heap was built with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the extreme element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// Inserts `value`, restoring heap order by sifting it up
    ///
    /// # Errors
    /// Returns [`HeapError::HeapFull`] if the heap already holds `capacity`
    /// elements; the heap is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::HeapFull);
        }

        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes and returns the extreme element
    ///
    /// The root is swapped with the last occupied slot, the size shrinks by
    /// one and the new root is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let Some(last) = self.data.pop() else {
            return Err(HeapError::EmptyHeap);
        };

        match self.data.first_mut() {
            Some(root) => {
                let extreme = std::mem::replace(root, last);
                self.sift_down(0);
                Ok(extreme)
            }
            None => Ok(last),
        }
    }

    /// Replaces the element at `index` with a more extreme `new_value`
    ///
    /// The new value then moves toward the root until its parent is at least
    /// as extreme.
    ///
    /// # Errors
    /// - [`HeapError::IndexOutOfBounds`] if `index >= len()`
    /// - [`HeapError::InvalidDecrease`] if the current value is already at
    ///   least as extreme as `new_value` (equal values are rejected too)
    ///
    /// The heap is unchanged on error.
    pub fn decrease_key(&mut self, index: usize, new_value: T) -> Result<(), HeapError> {
        let len = self.data.len();
        let current = self
            .data
            .get(index)
            .ok_or(HeapError::IndexOutOfBounds { index, len })?;
        if self.order.le(current, &new_value) {
            return Err(HeapError::InvalidDecrease);
        }

        self.data[index] = new_value;
        self.sift_up(index);
        Ok(())
    }

    /// Drains the heap in order, extreme element first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Restores heap order over the whole occupied prefix
    ///
    /// Leaves are trivially valid, so every index processed in reverse order
    /// has valid subtrees below it.
    fn build_heap(&mut self) {
        log::trace!("Building heap over {} elements.", self.data.len());
        for node in (0..self.data.len()).rev() {
            self.sift_down(node);
        }
    }

    /// Move element at `node` down until no child is more extreme
    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let mut best = node;
            for child in [left(node), right(node)] {
                if child < len && self.order.le(&self.data[child], &self.data[best]) {
                    best = child;
                }
            }

            if best == node {
                break;
            }
            self.data.swap(node, best);
            node = best;
        }
    }

    /// Move element at `node` up while its parent is not at least as extreme
    fn sift_up(&mut self, mut node: usize) {
        while let Some(up) = parent(node) {
            if self.order.le(&self.data[up], &self.data[node]) {
                break;
            }
            self.data.swap(node, up);
            node = up;
        }
    }
}

impl<K, P, O> BinHeap<Entry<K, P>, O>
where
    K: PartialEq + Clone,
    P: Clone,
    O: TotalOrder<Entry<K, P>>,
{
    /// Lowers the priority of every entry whose id equals `id`
    ///
    /// Scans the occupied prefix in index order and applies
    /// [`decrease_key`](Self::decrease_key) with `Entry::new(id, new_priority)`
    /// at each match. Returns the number of entries updated; zero means no
    /// entry matched and the heap is untouched. Ids are compared with
    /// `PartialEq`, so callers should keep them unique.
    ///
    /// # Errors
    /// [`HeapError::InvalidDecrease`] from the first match whose priority is
    /// already at least as extreme as `new_priority`. Matches updated before
    /// it keep their new priority; matches after it are skipped and keep
    /// their old one.
    pub fn decrease_key_by_identity(&mut self, id: &K, new_priority: P) -> Result<usize, HeapError> {
        let mut updated = 0;
        for index in 0..self.data.len() {
            if self.data[index].id == *id {
                self.decrease_key(index, Entry::new(id.clone(), new_priority.clone()))?;
                updated += 1;
            }
        }

        match updated {
            0 => log::debug!("Decrease by identity matched no entry."),
            1 => {}
            n => log::debug!("Decrease by identity matched {} entries.", n),
        }
        Ok(updated)
    }

    /// Like [`decrease_key_by_identity`](Self::decrease_key_by_identity), but a
    /// miss is an error
    ///
    /// # Errors
    /// [`HeapError::IdentityNotFound`] if no entry has the given id, otherwise
    /// as for `decrease_key_by_identity`.
    pub fn try_decrease_key_by_identity(
        &mut self,
        id: &K,
        new_priority: P,
    ) -> Result<usize, HeapError> {
        match self.decrease_key_by_identity(id, new_priority)? {
            0 => Err(HeapError::IdentityNotFound),
            updated => Ok(updated),
        }
    }
}

/// Prints one tab-separated line per tree level, root first
impl<T: fmt::Display, O> fmt::Display for BinHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut start = 0;
        let mut width = 1;
        while start < self.data.len() {
            let end = (start + width).min(self.data.len());
            if start > 0 {
                writeln!(f)?;
            }
            for (offset, value) in self.data[start..end].iter().enumerate() {
                if offset > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{value}")?;
            }
            start = end;
            width *= 2;
        }
        Ok(())
    }
}
