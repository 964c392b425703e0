use crate::error::{GraphError, GraphErrorKind};
use crate::graph::base_graph::{BaseGraph, Vertex};
use crate::graph::edge::Edge;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use fxhash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "log")]
use log::{debug, trace};

/// Adjacency-list graph. Vertices keep their insertion order, neighbor lists keep
/// duplicates (parallel edges) and may reference vertices that were never added.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V: Vertex> {
    keys: Vec<V>,
    data: FxHashMap<V, Vec<V>>,
}

impl<V: Vertex> AdjacencyGraph<V> {
    /// Builds a graph from `(vertex, neighbors)` pairs. A repeated vertex replaces the
    /// earlier neighbor list but keeps its position.
    pub fn from_adjacency<I: IntoIterator<Item = (V, Vec<V>)>>(adjacency: I) -> Self {
        let mut graph = Self::new();
        for (u, neighbors) in adjacency {
            if !graph.data.contains_key(&u) {
                graph.keys.push(u.clone());
            }
            graph.data.insert(u, neighbors);
        }
        graph
    }

    /// The stored lists in vertex order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.keys
            .iter()
            .filter_map(move |u| self.data.get(u).map(|nb| (u, nb.as_slice())))
    }

    /// Length of the list plus the loops once more, so a loop counts twice.
    pub fn vertex_degree(&self, u: &V) -> Result<usize, GraphError> {
        let nb = self.neighborhood(u)?;
        Ok(nb.len() + nb.iter().filter(|v| *v == u).count())
    }

    pub fn find_isolated_vertices(&self) -> Vec<V> {
        self.adjacency()
            .filter(|(_, nb)| nb.is_empty())
            .map(|(u, _)| u.clone())
            .collect()
    }

    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut seq: Vec<usize> = self
            .adjacency()
            .map(|(u, nb)| nb.len() + nb.iter().filter(|v| *v == u).count())
            .collect();
        seq.sort_unstable_by(|a, b| b.cmp(a));
        seq
    }

    pub fn min_delta(&self) -> Result<usize, GraphError> {
        self.degree_sequence().last().copied().ok_or_else(|| {
            GraphError::new(
                GraphErrorKind::EmptyGraphError,
                "Minimum degree of a graph without vertices.",
            )
        })
    }

    pub fn max_delta(&self) -> Result<usize, GraphError> {
        self.degree_sequence().first().copied().ok_or_else(|| {
            GraphError::new(
                GraphErrorKind::EmptyGraphError,
                "Maximum degree of a graph without vertices.",
            )
        })
    }

    pub fn density(&self) -> Result<f64, GraphError> {
        let n = self.order();
        if n <= 1 {
            let msg = format!("Density needs at least two vertices, got {}.", n);
            return Err(GraphError::new(GraphErrorKind::DegenerateGraphError, &msg));
        }
        let m = self.size();
        Ok(2.0 * m as f64 / (n * (n - 1)) as f64)
    }

    /// First simple path found by a depth-first search in adjacency order.
    pub fn find_path(&self, start: &V, end: &V) -> Option<Vec<V>> {
        self.simple_paths(start, end, true).pop()
    }

    /// Every simple path from `start` to `end`, in depth-first order.
    pub fn find_all_paths(&self, start: &V, end: &V) -> Vec<Vec<V>> {
        self.simple_paths(start, end, false)
    }

    fn simple_paths(&self, start: &V, end: &V, first_only: bool) -> Vec<Vec<V>> {
        if start == end {
            return vec![vec![start.clone()]];
        }
        if !self.has_vertex(start) {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut path = vec![start.clone()];
        let mut on_path: FxHashSet<V> = FxHashSet::default();
        on_path.insert(start.clone());
        // next neighbor index to try, one entry per vertex on the path
        let mut cursors: Vec<usize> = vec![0];

        while let Some(&cursor) = cursors.last() {
            let tip = match path.last() {
                Some(tip) => tip,
                None => break,
            };
            let neighbors = self.data.get(tip).map(Vec::as_slice).unwrap_or(&[]);
            if cursor >= neighbors.len() {
                cursors.pop();
                if let Some(v) = path.pop() {
                    on_path.remove(&v);
                }
                continue;
            }
            if let Some(top) = cursors.last_mut() {
                *top += 1;
            }

            let w = &neighbors[cursor];
            if on_path.contains(w) {
                continue;
            }
            if w == end {
                let mut found = path.clone();
                found.push(w.clone());
                paths.push(found);
                if first_only {
                    break;
                }
                continue;
            }
            path.push(w.clone());
            on_path.insert(w.clone());
            cursors.push(0);
        }
        paths
    }

    /// Breadth-first search; fewest edges, ties broken by adjacency order.
    pub fn shortest_path(&self, start: &V, end: &V) -> Option<Vec<V>> {
        if start == end {
            return Some(vec![start.clone()]);
        }
        if !self.has_vertex(start) {
            return None;
        }
        let mut predecessor: FxHashMap<&V, &V> = FxHashMap::default();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        predecessor.insert(start, start);

        while let Some(u) = queue.pop_front() {
            let neighbors = self.data.get(u).map(Vec::as_slice).unwrap_or(&[]);
            for v in neighbors {
                if predecessor.contains_key(v) {
                    continue;
                }
                predecessor.insert(v, u);
                if v == end {
                    let mut path = vec![v.clone()];
                    let mut current = v;
                    while current != start {
                        current = *predecessor.get(current)?;
                        path.push(current.clone());
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(v);
            }
        }
        None
    }

    /// Reachability from the first vertex. Dangling neighbors are skipped.
    pub fn is_connected(&self) -> bool {
        let start = match self.keys.first() {
            Some(start) => start,
            None => return true,
        };
        let mut visited: FxHashSet<&V> =
            FxHashSet::with_capacity_and_hasher(self.keys.len(), Default::default());
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(u) = stack.pop() {
            for v in self.data.get(u).map(Vec::as_slice).unwrap_or(&[]) {
                if self.data.contains_key(v) && visited.insert(v) {
                    stack.push(v);
                }
            }
        }
        #[cfg(feature = "log")]
        debug!("reached {} of {} vertices", visited.len(), self.keys.len());
        visited.len() == self.keys.len()
    }

    /// Longest shortest path, in edges, over all pairs `(keys[i], keys[j])` with `i < j`.
    pub fn diameter(&self) -> Result<usize, GraphError> {
        if self.keys.is_empty() {
            return Err(GraphError::new(
                GraphErrorKind::EmptyGraphError,
                "Diameter of a graph without vertices.",
            ));
        }
        let mut diameter = 0;
        for (i, s) in self.keys.iter().enumerate() {
            for e in self.keys.iter().skip(i + 1) {
                match self.shortest_path(s, e) {
                    Some(path) => diameter = diameter.max(path.len() - 1),
                    None => {
                        let msg = format!("No path from {:?} to {:?}.", s, e);
                        return Err(GraphError::new(GraphErrorKind::NotConnectedError, &msg));
                    }
                }
            }
        }
        Ok(diameter)
    }
}

impl<V: Vertex> BaseGraph for AdjacencyGraph<V> {
    type Vertex = V;

    fn order(&self) -> usize {
        self.keys.len()
    }

    fn has_vertex(&self, u: &V) -> bool {
        self.data.contains_key(u)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys.iter())
    }

    fn neighborhood(&self, u: &V) -> Result<&[V], GraphError> {
        self.data
            .get(u)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::missing_vertex(u))
    }

    fn edges(&self) -> Vec<Edge<V>> {
        let mut seen: FxHashSet<Edge<&V>> = FxHashSet::default();
        let mut edges = Vec::new();
        for (u, nb) in self.adjacency() {
            for v in nb {
                if seen.insert(Edge(u, v)) {
                    edges.push(Edge(u.clone(), v.clone()));
                }
            }
        }
        edges
    }
}

impl<V: Vertex> MutableGraph for AdjacencyGraph<V> {
    fn add_vertex(&mut self, u: V) {
        if !self.data.contains_key(&u) {
            self.keys.push(u.clone());
            self.data.insert(u, Vec::new());
        }
    }

    fn add_edge(&mut self, edge: Edge<V>) {
        let Edge(u, v) = edge;
        #[cfg(feature = "log")]
        if !self.data.contains_key(&v) {
            trace!("edge endpoint {:?} is not a vertex", v);
        }
        match self.data.get_mut(&u) {
            Some(nb) => nb.push(v),
            None => {
                self.keys.push(u.clone());
                self.data.insert(u, vec![v]);
            }
        }
    }

    fn new() -> Self {
        AdjacencyGraph {
            keys: Vec::new(),
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        AdjacencyGraph {
            keys: Vec::with_capacity(capacity),
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> From<Vec<(V, Vec<V>)>> for AdjacencyGraph<V> {
    fn from(adjacency: Vec<(V, Vec<V>)>) -> Self {
        Self::from_adjacency(adjacency)
    }
}

impl<V: Vertex> FromIterator<(V, Vec<V>)> for AdjacencyGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

impl<V: Vertex + fmt::Display> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("vertices:")?;
        for u in self.keys.iter() {
            write!(f, " {}", u)?;
        }
        f.write_str("\nedges:")?;
        for edge in self.edges() {
            write!(f, " {}", edge)?;
        }
        Ok(())
    }
}
