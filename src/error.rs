use thiserror::Error;

use crate::VertexId;

/// Recoverable errors reported by graph algorithms.
///
/// Violations of the traversal's internal invariants are *not* represented here:
/// they indicate a defect in the engine and abort via panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A traversal root or order list referenced a vertex the graph does not contain.
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),

    /// A topological order was requested for a graph containing a cycle through the vertex.
    #[error("graph is not acyclic: vertex {0} lies on a cycle")]
    Cycle(VertexId),
}

/// Result alias for graph algorithms
pub type Result<T> = std::result::Result<T, GraphError>;
