//! Single-source unweighted shortest paths by breadth-first traversal.
//!
//! Two engines share one contract, `(graph, start) -> distances`:
//! - [`sequential_bfs`]: queue-based reference traversal
//! - [`ParallelBfs`]: level-synchronous, lock-free parallel traversal
//!
//! Distances are hop counts; vertices not reachable from `start` hold
//! [`UNREACHED`]. Both engines return identical arrays for every input.

pub mod config;
pub mod parallel;
pub mod sequential;
pub mod verify;

pub use config::BfsConfig;
pub use parallel::{parallel_bfs, ParallelBfs, TraversalStats};
pub use sequential::sequential_bfs;

use crate::{BfsError, Result};

/// Hop count from the start vertex.
pub type Distance = i32;

/// Distance of a vertex not reachable from the start.
pub const UNREACHED: Distance = -1;

/// Rejects inputs neither engine can traverse.
pub(crate) fn check_start(vertex_count: usize, start: usize) -> Result<()> {
    if i32::try_from(vertex_count).is_err() {
        return Err(BfsError::TooManyVertices { vertex_count });
    }
    if start >= vertex_count {
        return Err(BfsError::StartOutOfBounds {
            start,
            vertex_count,
        });
    }
    Ok(())
}
