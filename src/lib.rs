//! Fixed-Capacity Binary Heap for Rust
//!
//! This crate provides an array-backed binary heap whose order is a pluggable
//! predicate rather than `Ord`, together with the in-place `decrease_key`
//! operation that shortest-path and greedy algorithms rely on.
//!
//! # Features
//!
//! - **Fixed capacity**: storage is allocated once; insertion into a full heap
//!   fails with [`HeapError::HeapFull`] instead of reallocating
//! - **Pluggable order**: [`MinOrder`], [`MaxOrder`], [`ByPriority`] or any
//!   `Fn(&T, &T) -> bool`
//! - **O(n) bulk build** from an owned `Vec`
//! - **Decrease-key** by index in O(log n), or by element identity in O(n)
//! - **Dijkstra**: a shortest-path consumer in [`pathfinding`]
//!
//! # Example
//!
//! ```rust
//! use fixed_binheap::{BinHeap, ByPriority, Entry, MinOrder};
//!
//! let entries = vec![Entry::new("A", 5), Entry::new("B", 2)];
//! let mut heap = BinHeap::from_vec_and_order(entries, ByPriority(MinOrder));
//! assert_eq!(heap.peek().unwrap().id, "B");
//!
//! heap.decrease_key_by_identity(&"A", 1).unwrap();
//! assert_eq!(heap.peek(), Ok(&Entry::new("A", 1)));
//! ```

pub mod binheap;
pub mod entry;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use binheap::BinHeap;
pub use entry::Entry;
pub use traits::{ByPriority, HeapError, MaxOrder, MinOrder, TotalOrder};
