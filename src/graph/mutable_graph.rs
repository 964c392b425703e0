use crate::graph::base_graph::BaseGraph;
use crate::graph::edge::Edge;

pub trait MutableGraph: BaseGraph {
    fn add_vertex(&mut self, u: Self::Vertex);
    /// Appends the second endpoint to the list of the first one only.
    fn add_edge(&mut self, edge: Edge<Self::Vertex>);
    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;
    fn add_path(&mut self, vertices: &[Self::Vertex]) {
        for pair in vertices.windows(2) {
            self.add_edge(Edge(pair[0].clone(), pair[1].clone()));
        }
    }
}
