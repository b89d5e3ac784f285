//! Keyed SSSP - Single-Source Shortest Paths over label-keyed graphs
//!
//! This library computes, from a chosen source vertex, the shortest distance
//! to every other vertex of a directed graph with non-negative integer edge
//! weights, together with a predecessor map describing one shortest path
//! tree. Vertices are identified by caller-supplied labels (strings,
//! numbers, tuples), not by dense indices.
//!
//! The solver is classic Dijkstra with lazy deletion: the priority queue may
//! hold several entries for the same vertex, and stale entries are discarded
//! when popped.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, KeyedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
