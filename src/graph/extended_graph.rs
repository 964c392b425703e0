use crate::error::GraphError;
use crate::graph::base_graph::BaseGraph;
use crate::graph::edge::Edge;
use fxhash::FxHashSet;

#[cfg(feature = "log")]
use log::debug;

/// Structural queries that only need the [`BaseGraph`] interface. Implemented for every
/// graph.
pub trait ExtendedGraph: BaseGraph {
    fn is_complete(&self) -> bool {
        let n = self.order();
        2 * self.size() == n * n.saturating_sub(1)
    }

    /// True if every vertex and every edge of `self` is also in `other`.
    fn is_subgraph<G: BaseGraph<Vertex = Self::Vertex>>(&self, other: &G) -> bool {
        if !self.vertices().all(|u| other.has_vertex(u)) {
            return false;
        }
        let edges: FxHashSet<Edge<Self::Vertex>> = other.edges().into_iter().collect();
        self.edges().iter().all(|e| edges.contains(e))
    }

    /// Edges between `x_vertices` and the remaining vertices. Adjacency is checked in
    /// both lists, so edges stored on either side are found.
    fn edge_cut(
        &self,
        x_vertices: &[Self::Vertex],
    ) -> Result<Vec<Edge<Self::Vertex>>, GraphError> {
        let x_set: FxHashSet<&Self::Vertex> = x_vertices.iter().collect();
        let y_vertices: Vec<&Self::Vertex> =
            self.vertices().filter(|v| !x_set.contains(v)).collect();

        let mut cut = Vec::new();
        for x in x_vertices {
            let x_neighbors = self.neighborhood(x)?;
            for y in y_vertices.iter().copied() {
                let y_neighbors = self.neighborhood(y)?;
                if y_neighbors.contains(x) || x_neighbors.contains(y) {
                    cut.push(Edge(x.clone(), y.clone()));
                }
            }
        }
        #[cfg(feature = "log")]
        debug!("edge cut of {} vertices has {} edges", x_vertices.len(), cut.len());
        Ok(cut)
    }

    /// A walk is a sequence of ordered steps `(u, v)`. It is a trail if every step is an
    /// edge of the graph, starts where the previous one ended and uses a new edge.
    fn is_trail(&self, walk: &[(Self::Vertex, Self::Vertex)]) -> bool {
        valid_trail_prefix(self, walk) == walk.len()
    }

    fn is_euler_trail(&self, walk: &[(Self::Vertex, Self::Vertex)]) -> bool {
        let trail = valid_trail_prefix(self, walk);
        trail == walk.len() && trail == self.size()
    }

    /// Edges of the graph that are not part of `spanning_tree`.
    fn co_tree(
        &self,
        spanning_tree: &[(Self::Vertex, Self::Vertex)],
    ) -> Vec<Edge<Self::Vertex>> {
        let tree: FxHashSet<Edge<&Self::Vertex>> =
            spanning_tree.iter().map(|(u, v)| Edge(u, v)).collect();
        self.edges()
            .into_iter()
            .filter(|Edge(u, v)| !tree.contains(&Edge(u, v)))
            .collect()
    }
}

impl<G: BaseGraph> ExtendedGraph for G {}

/// Number of leading steps of `walk` that form a trail.
fn valid_trail_prefix<G: BaseGraph + ?Sized>(
    graph: &G,
    walk: &[(G::Vertex, G::Vertex)],
) -> usize {
    let edges: FxHashSet<Edge<G::Vertex>> = graph.edges().into_iter().collect();
    let mut used: FxHashSet<Edge<&G::Vertex>> = FxHashSet::default();
    let mut previous: Option<&G::Vertex> = None;

    for (u, v) in walk {
        let continues = previous.map_or(true, |p| p == u);
        if !continues
            || !edges.contains(&Edge(u.clone(), v.clone()))
            || !used.insert(Edge(u, v))
        {
            #[cfg(feature = "log")]
            debug!("walk stops being a trail at step ({:?}, {:?})", u, v);
            break;
        }
        previous = Some(v);
    }
    used.len()
}

#[cfg(test)]
mod tests {
    use crate::error::GraphErrorKind;
    use crate::graph::adjacency_graph::AdjacencyGraph;
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::edge::Edge;
    use crate::graph::extended_graph::ExtendedGraph;
    use crate::graph::mutable_graph::MutableGraph;
    use fxhash::FxHashSet;
    use rand::prelude::{SliceRandom, StdRng};
    use rand::{Rng, SeedableRng};

    fn numbered() -> AdjacencyGraph<u32> {
        AdjacencyGraph::from(vec![
            (1, vec![2, 3]),
            (2, vec![1, 3]),
            (3, vec![1, 4]),
            (4, vec![3]),
        ])
    }

    fn seven() -> AdjacencyGraph<char> {
        AdjacencyGraph::from(vec![
            ('a', vec!['b', 'c']),
            ('b', vec!['a', 'e']),
            ('c', vec!['a', 'f']),
            ('d', vec!['e', 'f']),
            ('e', vec!['b', 'd', 'g']),
            ('f', vec!['c', 'd', 'g']),
            ('g', vec!['e', 'f']),
        ])
    }

    fn bipartite() -> AdjacencyGraph<char> {
        AdjacencyGraph::from(vec![
            ('A', vec!['B']),
            ('B', vec!['A', 'C']),
            ('C', vec!['B', 'D']),
            ('D', vec!['C', 'E']),
            ('E', vec!['D']),
        ])
    }

    fn random_graph(n: u32, p: f64, seed: u64) -> AdjacencyGraph<u32> {
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
        let mut graph = AdjacencyGraph::with_capacity(n as usize);
        for u in 0..n {
            graph.add_vertex(u);
        }
        // a spine keeps the graph connected
        for u in 1..n {
            graph.add_edge(Edge(u - 1, u));
            graph.add_edge(Edge(u, u - 1));
        }
        for u in 0..n {
            for v in (u + 2)..n {
                if rng.gen_bool(p) {
                    // stored on one side only, like a single `add_edge`
                    if rng.gen_bool(0.5) {
                        graph.add_edge(Edge(u, v));
                    } else {
                        graph.add_edge(Edge(v, u));
                    }
                }
            }
        }
        graph
    }

    #[test]
    fn test_is_complete() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        assert!(graph.is_complete());
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_vertex(3);
        assert!(!graph.is_complete());
        graph.add_edge(Edge(1, 2));
        graph.add_edge(Edge(1, 3));
        assert!(!graph.is_complete());
        graph.add_edge(Edge(2, 3));
        assert!(graph.is_complete());
        assert!(!numbered().is_complete());
    }

    #[test]
    fn test_is_subgraph() {
        let graph = numbered();
        let mut part: AdjacencyGraph<u32> = AdjacencyGraph::new();
        part.add_edge(Edge(3, 1));
        part.add_edge(Edge(4, 3));
        assert!(part.is_subgraph(&graph));
        assert!(!graph.is_subgraph(&part));
        assert!(graph.is_subgraph(&graph));

        part.add_edge(Edge(4, 1));
        assert!(!part.is_subgraph(&graph));
    }

    #[test]
    fn test_edge_cut() {
        let graph = numbered();
        assert_eq!(graph.edge_cut(&[1, 2]).unwrap(), vec![Edge(1, 3), Edge(2, 3)]);
        assert_eq!(graph.edge_cut(&[3, 4]).unwrap(), vec![Edge(1, 3), Edge(2, 3)]);
        assert!(graph.edge_cut(&[1, 2, 3, 4]).unwrap().is_empty());
        assert_eq!(
            graph.edge_cut(&[2, 3]).unwrap(),
            vec![Edge(1, 2), Edge(1, 3), Edge(3, 4)]
        );

        assert_eq!(
            bipartite().edge_cut(&['A', 'C', 'E']).unwrap(),
            vec![Edge('B', 'A'), Edge('B', 'C'), Edge('D', 'C'), Edge('D', 'E')]
        );

        assert_eq!(
            graph.edge_cut(&[1, 9]).unwrap_err().kind(),
            GraphErrorKind::MissingVertexError
        );
    }

    #[test]
    fn edge_cut_sees_one_sided_edges() {
        let mut graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(Edge(2, 1));
        assert_eq!(graph.edge_cut(&[1]).unwrap(), vec![Edge(1, 2)]);
        assert_eq!(graph.edge_cut(&[2]).unwrap(), vec![Edge(2, 1)]);
    }

    #[test]
    fn edge_cut_is_symmetric() {
        for seed in 0..20 {
            let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
            let graph = random_graph(12, 0.3, seed);
            let mut vertices: Vec<u32> = graph.vertices().copied().collect();
            vertices.shuffle(&mut rng);
            let split = rng.gen_range(0..=vertices.len());
            let (x, y) = vertices.split_at(split);

            let a: FxHashSet<_> = graph.edge_cut(x).unwrap().into_iter().collect();
            let b: FxHashSet<_> = graph.edge_cut(y).unwrap().into_iter().collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_is_trail() {
        let graph = seven();
        assert!(graph.is_trail(&[('a', 'c'), ('c', 'f'), ('f', 'd')]));
        assert!(graph.is_trail(&[]));
        assert!(!graph.is_trail(&[
            ('e', 'd'),
            ('d', 'f'),
            ('f', 'g'),
            ('g', 'e'),
            ('e', 'd'),
            ('d', 'f')
        ]));
        assert!(graph.is_trail(&[
            ('e', 'd'),
            ('d', 'f'),
            ('f', 'g'),
            ('g', 'e'),
            ('e', 'b'),
            ('b', 'a')
        ]));
        assert!(graph.is_trail(&[
            ('e', 'd'),
            ('d', 'f'),
            ('f', 'g'),
            ('g', 'e'),
            ('e', 'b'),
            ('b', 'a'),
            ('a', 'c'),
            ('c', 'f')
        ]));
        // does not continue from d
        assert!(!graph.is_trail(&[('a', 'c'), ('c', 'f'), ('f', 'd'), ('f', 'g')]));
        // not an edge
        assert!(!graph.is_trail(&[('a', 'g')]));
        // same edge walked back
        assert!(!graph.is_trail(&[('a', 'b'), ('b', 'a')]));
    }

    #[test]
    fn test_is_euler_trail() {
        let graph = seven();
        assert!(!graph.is_euler_trail(&[('a', 'c'), ('c', 'f'), ('f', 'd')]));
        assert!(!graph.is_euler_trail(&[]));
        assert!(!graph.is_euler_trail(&[
            ('e', 'd'),
            ('d', 'f'),
            ('f', 'g'),
            ('g', 'e'),
            ('e', 'd'),
            ('d', 'f')
        ]));
        assert!(!graph.is_euler_trail(&[
            ('e', 'd'),
            ('d', 'f'),
            ('f', 'g'),
            ('g', 'e'),
            ('e', 'b'),
            ('b', 'a')
        ]));
        assert!(graph.is_euler_trail(&[
            ('e', 'd'),
            ('d', 'f'),
            ('f', 'g'),
            ('g', 'e'),
            ('e', 'b'),
            ('b', 'a'),
            ('a', 'c'),
            ('c', 'f')
        ]));
    }

    fn euler_search(
        graph: &AdjacencyGraph<char>,
        remaining: &mut Vec<Edge<char>>,
        walk: &mut Vec<(char, char)>,
    ) -> bool {
        if remaining.is_empty() {
            return true;
        }
        let tip = walk.last().map(|(_, v)| *v);
        for i in 0..remaining.len() {
            let Edge(a, b) = remaining[i];
            let steps = [(a, b), (b, a)];
            for (u, v) in steps.iter().copied() {
                if tip.map_or(false, |t| t != u) {
                    continue;
                }
                let edge = remaining.remove(i);
                walk.push((u, v));
                if euler_search(graph, remaining, walk) {
                    return true;
                }
                walk.pop();
                remaining.insert(i, edge);
            }
        }
        false
    }

    #[test]
    fn searched_euler_trail_validates() {
        let graph = seven();
        let mut remaining = graph.edges();
        let mut walk = Vec::new();
        assert!(euler_search(&graph, &mut remaining, &mut walk));
        assert_eq!(walk.len(), graph.size());
        assert!(graph.is_trail(&walk));
        assert!(graph.is_euler_trail(&walk));
    }

    #[test]
    fn test_co_tree() {
        let graph = seven();
        let tree = [
            ('a', 'b'),
            ('a', 'c'),
            ('c', 'f'),
            ('f', 'g'),
            ('b', 'e'),
            ('e', 'd'),
        ];
        let co_tree = graph.co_tree(&tree);
        assert_eq!(co_tree.len(), 2);
        assert!(co_tree.contains(&Edge('d', 'f')) && co_tree.contains(&Edge('e', 'g')));

        let tree = [
            ('a', 'b'),
            ('a', 'c'),
            ('c', 'f'),
            ('b', 'e'),
            ('e', 'd'),
            ('e', 'g'),
        ];
        let co_tree = graph.co_tree(&tree);
        assert_eq!(co_tree.len(), 2);
        assert!(co_tree.contains(&Edge('d', 'f')) && co_tree.contains(&Edge('f', 'g')));
    }

    #[test]
    fn co_tree_complements_spanning_tree() {
        for seed in 0..20 {
            let graph = random_graph(10, 0.4, seed);
            // depth-first spanning tree over both stored directions
            let mut tree = Vec::new();
            let mut visited = FxHashSet::default();
            let mut stack = vec![0u32];
            visited.insert(0u32);
            while let Some(u) = stack.pop() {
                for v in graph.vertices().copied() {
                    if !visited.contains(&v) && graph.has_edge(&u, &v) {
                        visited.insert(v);
                        tree.push((u, v));
                        stack.push(v);
                    }
                }
            }
            assert_eq!(tree.len(), graph.order() - 1);

            let co_tree: FxHashSet<_> = graph.co_tree(&tree).into_iter().collect();
            let tree: FxHashSet<_> = tree.into_iter().map(Edge::from).collect();
            let edges: FxHashSet<_> = graph.edges().into_iter().collect();
            assert!(co_tree.is_disjoint(&tree));
            let union: FxHashSet<_> = co_tree.union(&tree).cloned().collect();
            assert_eq!(union, edges);
        }
    }
}
