//! Dijkstra's shortest paths driven by identity-based decrease-key
//!
//! Every node of the graph is loaded into a fixed-capacity [`BinHeap`] up
//! front with priority [`Distance::Infinite`] (the source at zero). Relaxing
//! an edge lowers the neighbor's priority in place through
//! [`BinHeap::decrease_key_by_identity`], so the heap never grows past the
//! node count.
//!
//! # Design
//!
//! Only lightweight indices are stored in the heap rather than full node data.
//! A fast hash map (using FxHash) maps node states to their dense index.
//!
//! # Example
//!
//! ```rust
//! use fixed_binheap::pathfinding::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("a", "b", 4u32);
//! graph.add_edge("a", "c", 1);
//! graph.add_edge("c", "b", 2);
//!
//! let paths = graph.shortest_paths(&"a").unwrap();
//! assert_eq!(paths.distance_to(&"b"), Some(3));
//! assert_eq!(paths.path_to(&"b"), Some(vec!["a", "c", "b"]));
//! ```

use std::hash::Hash;
use std::ops::Add;

use rustc_hash::FxHashMap;

use crate::binheap::BinHeap;
use crate::entry::Entry;
use crate::traits::{ByPriority, MinOrder};

/// Trait for types that can be used as edge costs.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` supplies the zero distance of the source. Costs must not be
/// negative, and path sums must fit the type: integer overflow panics in
/// debug builds and wraps in release. Use a saturating cost type when sums
/// may reach the limit.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Tentative distance of a node; `Finite` values sort before `Infinite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance<C> {
    Finite(C),
    Infinite,
}

impl<C: Copy> Distance<C> {
    /// The finite value, if any
    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(cost) => Some(cost),
            Distance::Infinite => None,
        }
    }
}

/// Dense index assigned to each node on first sight.
type NodeIndex = usize;

/// A directed graph with non-negative edge costs.
#[derive(Debug, Clone)]
pub struct Graph<N, C> {
    /// Node states by index
    nodes: Vec<N>,
    /// Maps node state to its index (for fast lookups)
    state_to_index: FxHashMap<N, NodeIndex>,
    /// Outgoing `(target, cost)` edges by source index
    edges: Vec<Vec<(NodeIndex, C)>>,
}

impl<N, C> Graph<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            state_to_index: FxHashMap::default(),
            edges: Vec::new(),
        }
    }

    /// Adds `node` if unseen and returns its index.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&index) = self.state_to_index.get(&node) {
            return index;
        }

        let index = self.nodes.len();
        self.state_to_index.insert(node.clone(), index);
        self.nodes.push(node);
        self.edges.push(Vec::new());
        index
    }

    /// Adds a directed edge, creating either endpoint as needed.
    pub fn add_edge(&mut self, from: N, to: N, cost: C) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.edges[from].push((to, cost));
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Runs Dijkstra's algorithm from `source` over the whole graph.
    ///
    /// Returns `None` if `source` is not a node of the graph.
    pub fn shortest_paths(&self, source: &N) -> Option<ShortestPaths<'_, N, C>> {
        let source = *self.state_to_index.get(source)?;
        let count = self.nodes.len();

        let mut distances = vec![Distance::Infinite; count];
        distances[source] = Distance::Finite(C::default());
        let mut came_from: Vec<Option<NodeIndex>> = vec![None; count];
        let mut settled = vec![false; count];

        let entries: Vec<_> = distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| Entry::new(index, distance))
            .collect();
        let mut heap = BinHeap::from_vec_and_order(entries, ByPriority(MinOrder));

        while let Ok(Entry { id: current, priority }) = heap.pop() {
            settled[current] = true;
            // Everything left in the heap is unreachable
            let Distance::Finite(current_cost) = priority else {
                break;
            };

            for &(neighbor, edge_cost) in &self.edges[current] {
                if settled[neighbor] {
                    continue;
                }

                let tentative = Distance::Finite(current_cost + edge_cost);
                if tentative < distances[neighbor]
                    && heap.decrease_key_by_identity(&neighbor, tentative) == Ok(1)
                {
                    distances[neighbor] = tentative;
                    came_from[neighbor] = Some(current);
                }
            }
        }

        Some(ShortestPaths {
            graph: self,
            distances,
            came_from,
        })
    }
}

impl<N, C> Default for Graph<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Distances and predecessor links from a single source.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, N, C> {
    graph: &'g Graph<N, C>,
    distances: Vec<Distance<C>>,
    came_from: Vec<Option<NodeIndex>>,
}

impl<N, C> ShortestPaths<'_, N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    /// Cost of the cheapest path to `target`, or `None` if unreachable or unknown.
    pub fn distance_to(&self, target: &N) -> Option<C> {
        let index = *self.graph.state_to_index.get(target)?;
        self.distances[index].finite()
    }

    /// Reconstructs the path from the source to `target` (inclusive).
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        let mut current = *self.graph.state_to_index.get(target)?;
        self.distances[current].finite()?;

        let mut path = vec![self.graph.nodes[current].clone()];
        while let Some(prev) = self.came_from[current] {
            path.push(self.graph.nodes[prev].clone());
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(len: u32) -> Graph<u32, u32> {
        let mut graph = Graph::new();
        for i in 0..len {
            graph.add_edge(i, i + 1, 1);
        }
        graph
    }

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(u32::MAX) < Distance::Infinite);
        assert!(Distance::Finite(1) < Distance::Finite(2));
        assert_eq!(Distance::<u32>::Infinite.finite(), None);
    }

    #[test]
    fn test_linear_path() {
        let graph = line(5);
        let paths = graph.shortest_paths(&0).unwrap();
        assert_eq!(paths.distance_to(&5), Some(5));
        assert_eq!(paths.path_to(&5), Some(vec![0, 1, 2, 3, 4, 5]));
        assert_eq!(paths.path_to(&0), Some(vec![0]));
    }

    #[test]
    fn test_shortcut_wins() {
        let mut graph = line(4);
        graph.add_edge(0, 4, 3);
        let paths = graph.shortest_paths(&0).unwrap();
        assert_eq!(paths.distance_to(&4), Some(3));
        assert_eq!(paths.path_to(&4), Some(vec![0, 4]));
    }

    #[test]
    fn test_unreachable_and_unknown() {
        let mut graph = line(2);
        graph.add_node(42);
        let paths = graph.shortest_paths(&1).unwrap();
        assert_eq!(paths.distance_to(&0), None);
        assert_eq!(paths.path_to(&42), None);
        assert_eq!(paths.distance_to(&7), None);
        assert!(graph.shortest_paths(&7).is_none());
    }

    /// Adds like `u8` but clamps at the maximum
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
    struct Saturating(u8);

    impl Add for Saturating {
        type Output = Saturating;

        fn add(self, rhs: Saturating) -> Saturating {
            Saturating(self.0.saturating_add(rhs.0))
        }
    }

    #[test]
    fn test_saturating_cost_near_limit() {
        let mut graph = Graph::new();
        graph.add_edge('a', 'b', Saturating(200));
        graph.add_edge('b', 'c', Saturating(200));
        graph.add_edge('a', 'c', Saturating(254));

        let paths = graph.shortest_paths(&'a').unwrap();
        assert_eq!(paths.distance_to(&'b'), Some(Saturating(200)));
        assert_eq!(paths.distance_to(&'c'), Some(Saturating(254)));
        assert_eq!(paths.path_to(&'c'), Some(vec!['a', 'c']));
    }

    #[test]
    fn test_counts() {
        let mut graph = line(3);
        graph.add_edge(0, 1, 5);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
    }
}
