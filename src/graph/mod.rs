pub mod traits;
pub mod keyed;
pub mod generators;

pub use traits::{Edge, Graph};
pub use keyed::KeyedGraph;
