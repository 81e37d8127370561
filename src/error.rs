//! Error types shared by the traversal engines and graph constructors.

use std::collections::TryReserveError;

/// Errors reported by graph construction and traversal.
///
/// Traversals never return partial results: on error the working buffers are
/// dropped and only the error reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum BfsError {
    /// The start vertex is not a vertex of the graph.
    #[error("start vertex {start} out of bounds for {vertex_count} vertices")]
    StartOutOfBounds {
        /// Requested start vertex.
        start: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// An adjacency entry names a vertex outside `[0, vertex_count)`.
    #[error("edge {vertex}->{neighbor} out of bounds for {vertex_count} vertices")]
    NeighborOutOfBounds {
        /// Vertex whose neighbor list holds the bad entry.
        vertex: usize,
        /// The out-of-range neighbor id.
        neighbor: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Hop counts are stored as `i32`; larger graphs cannot be represented.
    #[error("graph with {vertex_count} vertices exceeds the distance range")]
    TooManyVertices {
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// CSR parts are inconsistent (offsets not monotone, wrong length, ...).
    #[error("invalid CSR layout: {0}")]
    InvalidCsr(String),

    /// A working buffer could not be allocated.
    #[error("failed to allocate traversal buffers")]
    Allocation(#[from] TryReserveError),

    /// The worker pool could not be started.
    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for fallible graph operations.
pub type Result<T> = std::result::Result<T, BfsError>;
