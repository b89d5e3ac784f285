use num_traits::{CheckedAdd, PrimInt};
use std::fmt::Debug;
use std::hash::Hash;

/// A directed edge stored in the adjacency list of its source vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<K, W> {
    /// Destination vertex label
    pub to: K,

    /// Non-negative edge weight
    pub weight: W,
}

impl<K, W> Edge<K, W> {
    /// Creates a new edge to the given destination
    pub fn new(to: K, weight: W) -> Self {
        Edge { to, weight }
    }
}

/// Trait representing a weighted directed graph keyed by vertex labels
pub trait Graph<K, W>: Debug
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertex labels
    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Returns an iterator over the outgoing edges of a vertex,
    /// empty if the label is not a vertex of the graph
    fn neighbors(&self, label: &K) -> Box<dyn Iterator<Item = &Edge<K, W>> + '_>;

    /// Returns true if the label is a vertex of the graph
    fn has_vertex(&self, label: &K) -> bool;
}
