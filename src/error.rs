//! Error types for rank updates and convergence checks.

use thiserror::Error;

/// Errors raised while validating the inputs of a random-walk step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// The source and destination arrays of the edge list differ in length.
    #[error("edge list mismatch: {rows} source ids but {cols} destination ids")]
    EdgeLengthMismatch {
        /// Length of the `row` array.
        rows: usize,
        /// Length of the `col` array.
        cols: usize,
    },

    /// The weight array is not aligned with the edge list.
    #[error("edge weight mismatch: {edges} edges but {weights} weights")]
    WeightLengthMismatch {
        /// Number of edges.
        edges: usize,
        /// Number of weights.
        weights: usize,
    },

    /// The rank vector does not cover every vertex of the degree array.
    #[error("rank vector has length {actual}, expected {expected}")]
    RankLengthMismatch {
        /// Number of vertices in the degree array.
        expected: usize,
        /// Length of the rank vector.
        actual: usize,
    },

    /// Two rank vectors being compared differ in length.
    #[error("cannot compare rank vectors of lengths {left} and {right}")]
    VectorLengthMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },

    /// A vertex id does not index into the graph.
    #[error("vertex {vertex} out of range for graph with {num_vertices} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        num_vertices: usize,
    },

    /// A vertex with outgoing edges has a zero out-degree.
    #[error("zero out-degree for vertex {vertex} with outgoing edge {edge}")]
    ZeroOutDegree {
        /// The source vertex.
        vertex: usize,
        /// Position of the first edge leaving it.
        edge: usize,
    },

    /// Damping factor outside `[0, 1]`.
    #[error("alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),

    /// Convergence tolerance negative or NaN.
    #[error("epsilon must be a non-negative number, got {0}")]
    InvalidEpsilon(f64),
}

impl RankError {
    /// Whether this error reports an out-of-range vertex id.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::VertexOutOfRange { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RankError>;
