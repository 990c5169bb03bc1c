//! Identity/priority pairs for identity-based decrease-key

use std::fmt;

/// An element tracked by an external identity rather than by heap position
///
/// Heaps of entries are usually ordered with
/// [`ByPriority`](crate::traits::ByPriority) so the id never takes part in
/// comparisons. Identity matching in
/// [`BinHeap::decrease_key_by_identity`](crate::binheap::BinHeap::decrease_key_by_identity)
/// uses `K: PartialEq`; wrap the id if pointer identity is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<K, P> {
    /// Caller-side identity of the element
    pub id: K,
    /// Priority the heap is ordered by
    pub priority: P,
}

impl<K, P> Entry<K, P> {
    /// Creates a new entry
    pub fn new(id: K, priority: P) -> Self {
        Entry { id, priority }
    }

    /// Splits the entry into its id and priority
    pub fn into_parts(self) -> (K, P) {
        (self.id, self.priority)
    }
}

impl<K, P> From<(K, P)> for Entry<K, P> {
    fn from((id, priority): (K, P)) -> Self {
        Entry { id, priority }
    }
}

impl<K: fmt::Display, P: fmt::Display> fmt::Display for Entry<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.priority)
    }
}
