use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

/// An undirected edge between two endpoints. `Edge(u, v)` and `Edge(v, u)` are the
/// same edge; `Edge(u, u)` is a loop.
#[derive(Clone, Copy)]
pub struct Edge<V>(pub V, pub V);

impl<V: Clone> Edge<V> {
    pub fn looped(u: V) -> Self {
        Edge(u.clone(), u)
    }

    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V> Edge<V> {
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.0, &self.1)
    }
}

impl<V: PartialEq> Edge<V> {
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    pub fn contains(&self, u: &V) -> bool {
        self.0 == *u || self.1 == *u
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // endpoint hashes are sorted so both orientations collide
        let a = fxhash::hash64(&self.0);
        let b = fxhash::hash64(&self.1);
        state.write_u64(a.min(b));
        state.write_u64(a.max(b));
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((u, v): (V, V)) -> Self {
        Edge(u, v)
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}, {:?}}}", self.0, self.1)
    }
}
