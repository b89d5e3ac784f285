use crate::graph::traits::{Edge, Graph};
use crate::{Error, Result};
use num_traits::{CheckedAdd, PrimInt};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph keyed by vertex labels, using adjacency lists
#[derive(Debug, Clone)]
pub struct KeyedGraph<K, W>
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
{
    /// Outgoing edges for each vertex: label -> [edge]
    adjacency: HashMap<K, Vec<Edge<K, W>>>,
}

impl<K, W> KeyedGraph<K, W>
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        KeyedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        KeyedGraph {
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Associates a vertex label with its outgoing edges.
    ///
    /// Adding a label that already exists replaces its previous edge list.
    /// Destinations that are not keys of the graph are allowed; they behave
    /// as vertices with no outgoing edges. Fails without modifying the graph
    /// if any supplied weight is negative.
    pub fn add_vertex(&mut self, label: K, edges: Vec<Edge<K, W>>) -> Result<()> {
        for edge in &edges {
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", label),
                    to: format!("{:?}", edge.to),
                    weight: format!("{:?}", edge.weight),
                });
            }
        }

        self.adjacency.insert(label, edges);
        Ok(())
    }
}

impl<K, W> Graph<K, W> for KeyedGraph<K, W>
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, label: &K) -> Box<dyn Iterator<Item = &Edge<K, W>> + '_> {
        if let Some(edges) = self.adjacency.get(label) {
            Box::new(edges.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, label: &K) -> bool {
        self.adjacency.contains_key(label)
    }
}
