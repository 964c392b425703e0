pub use adjacency_graph::AdjacencyGraph;
pub use base_graph::{BaseGraph, Vertex};
pub use edge::Edge;
pub use extended_graph::ExtendedGraph;
pub use mutable_graph::MutableGraph;

mod adjacency_graph;
mod base_graph;
mod edge;
mod extended_graph;
mod mutable_graph;
