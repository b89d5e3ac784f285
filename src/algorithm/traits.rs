use crate::graph::Graph;
use crate::Result;
use num_traits::{CheckedAdd, PrimInt};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<K, W>
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
{
    /// Shortest distance from the source to each vertex, with `None` marking
    /// an unreachable vertex. Every key of the queried graph has an entry;
    /// a vertex that appears only as an edge destination has one exactly
    /// when the search reached it.
    pub distances: HashMap<K, Option<W>>,

    /// Predecessor of each reached vertex on a shortest path from the
    /// source. The source itself has no entry.
    pub predecessors: HashMap<K, K>,

    /// Source vertex label
    pub source: K,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
    G: Graph<K, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
