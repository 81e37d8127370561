//! Graph inputs for the traversal engines.
//!
//! Graphs are immutable during a traversal. Two owned representations are
//! provided:
//! - `AdjacencyGraph`: one neighbor `Vec` per vertex
//! - `CsrGraph`: compressed sparse row layout
//!
//! Both validate neighbor ids at construction. Plain `Vec<Vec<usize>>` and
//! `[Vec<usize>]` also implement [`Graph`]; for those the engines check
//! neighbor ids while traversing and report
//! [`BfsError::NeighborOutOfBounds`](crate::BfsError::NeighborOutOfBounds).

pub mod adjacency;
pub mod csr;
pub mod generators;
pub(crate) mod access;

pub use adjacency::AdjacencyGraph;
pub use csr::CsrGraph;

/// Read-only view of a dense, 0-indexed directed graph.
///
/// Undirected graphs list every edge in both directions.
pub trait Graph: Sync {
    /// Number of vertices; ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Out-neighbors of `vertex` in adjacency order.
    ///
    /// # Panics
    /// May panic if `vertex >= vertex_count()`.
    fn neighbors(&self, vertex: usize) -> &[usize];

    /// Number of directed edges.
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.neighbors(v).len())
            .sum()
    }
}

impl Graph for [Vec<usize>] {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self[vertex]
    }
}

impl Graph for Vec<Vec<usize>> {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self[vertex]
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline]
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        (**self).neighbors(vertex)
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

/// Checks that every neighbor id of `lists` names a vertex.
pub(crate) fn validate_lists(lists: &[Vec<usize>]) -> crate::Result<()> {
    let vertex_count = lists.len();
    for (vertex, nbrs) in lists.iter().enumerate() {
        if let Some(&neighbor) = nbrs.iter().find(|&&v| v >= vertex_count) {
            return Err(crate::BfsError::NeighborOutOfBounds {
                vertex,
                neighbor,
                vertex_count,
            });
        }
    }
    Ok(())
}
