use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{CheckedAdd, PrimInt};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: Eq + Hash + Ord + Clone + Debug,
    W: PrimInt + CheckedAdd + Debug,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathResult<K, W>> {
        // Check for negative weights; Graph implementations other than
        // KeyedGraph may not have validated at insertion
        for v in graph.vertices() {
            for edge in graph.neighbors(v) {
                if edge.weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", v),
                        to: format!("{:?}", edge.to),
                        weight: format!("{:?}", edge.weight),
                    });
                }
            }
        }

        log::debug!(
            "Computing shortest paths for graph with {} vertices from source {:?}",
            graph.vertex_count(),
            source
        );

        // Initialize distances: every declared vertex is unreachable until
        // the search proves otherwise. A source that is not a key of the
        // graph still gets distance zero.
        let mut distances: HashMap<K, Option<W>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();
        distances.insert(source.clone(), Some(W::zero()));

        let mut predecessors: HashMap<K, K> = HashMap::new();

        // Initialize priority queue
        let mut queue = MinQueue::new();
        queue.push(source.clone(), W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if let Some(Some(current_dist)) = distances.get(&u) {
                if *current_dist < dist_u {
                    continue;
                }
            }

            // Relax all outgoing edges
            for edge in graph.neighbors(&u) {
                // A sum that overflows W cannot improve any recorded distance
                let new_dist = match dist_u.checked_add(&edge.weight) {
                    Some(sum) => sum,
                    None => continue,
                };

                let should_update = match distances.get(&edge.to) {
                    Some(Some(current_dist)) => new_dist < *current_dist,
                    _ => true,
                };

                if should_update {
                    distances.insert(edge.to.clone(), Some(new_dist));
                    predecessors.insert(edge.to.clone(), u.clone());
                    queue.push(edge.to.clone(), new_dist);
                }
            }
        }

        log::debug!(
            "Reached {} of {} vertices",
            distances.values().filter(|d| d.is_some()).count(),
            distances.len()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
