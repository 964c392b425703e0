pub mod degree_sequence;
pub mod error;
pub mod graph;
#[cfg(feature = "logging")]
pub mod log;

pub use degree_sequence::{erdoes_gallai, is_degree_sequence};
pub use error::{GraphError, GraphErrorKind};
