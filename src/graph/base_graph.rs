use crate::error::GraphError;
use crate::graph::edge::Edge;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as a vertex identifier.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

pub trait BaseGraph: Clone + Debug {
    type Vertex: Vertex;

    fn order(&self) -> usize;
    fn has_vertex(&self, u: &Self::Vertex) -> bool;
    /// Vertices in insertion order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;
    fn neighborhood(&self, u: &Self::Vertex) -> Result<&[Self::Vertex], GraphError>;
    /// Each undirected edge once, in order of discovery over the adjacency lists.
    fn edges(&self) -> Vec<Edge<Self::Vertex>>;

    fn size(&self) -> usize {
        self.edges().len()
    }

    /// True if `v` is stored in the list of `u` or `u` in the list of `v`.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        let forward = self
            .neighborhood(u)
            .map(|nb| nb.contains(v))
            .unwrap_or(false);
        forward
            || self
                .neighborhood(v)
                .map(|nb| nb.contains(u))
                .unwrap_or(false)
    }
}
