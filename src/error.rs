use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct GraphError {
    kind: GraphErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    MissingVertexError,
    EmptyGraphError,
    DegenerateGraphError,
    NotConnectedError,
}

impl fmt::Display for GraphErrorKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match *self {
            Self::MissingVertexError => f.write_str("MissingVertexError"),
            Self::EmptyGraphError => f.write_str("EmptyGraphError"),
            Self::DegenerateGraphError => f.write_str("DegenerateGraphError"),
            Self::NotConnectedError => f.write_str("NotConnectedError"),
        }
    }
}

impl GraphError {
    pub(crate) fn new(kind: GraphErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub(crate) fn missing_vertex<V: fmt::Debug>(u: &V) -> Self {
        let msg = format!("Vertex {:?} is not contained in the graph.", u);
        Self::new(GraphErrorKind::MissingVertexError, &msg)
    }

    pub fn kind(&self) -> GraphErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for GraphError {}
