//! A compact CSR (compressed sparse row) graph.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `edges`: contiguous `usize` targets, row after row
//!
//! Neighbor slices are sub-slices of one allocation, which keeps the discovery
//! pass of a traversal streaming through memory.

use super::{AdjacencyGraph, Graph};
use crate::{BfsError, Result};

/// An immutable graph in compressed sparse row form.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Builds CSR from adjacency list |
/// | `from_csr_parts` | \(O(n + m)\) | Validates offsets and targets |
/// | `neighbors` | \(O(1)\) | Borrowed sub-slice of `edges` |
/// | `degree` | \(O(1)\) | Offset difference |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    edges: Vec<usize>,
}

impl CsrGraph {
    /// Builds a CSR graph from adjacency lists.
    ///
    /// # Errors
    /// Returns [`BfsError::NeighborOutOfBounds`] if any edge references a
    /// vertex out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let n = adjacency.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);

        let mut total_edges = 0usize;
        for nbrs in adjacency {
            total_edges = total_edges.saturating_add(nbrs.len());
            offsets.push(total_edges);
        }

        let mut edges = Vec::new();
        edges.try_reserve_exact(total_edges)?;

        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                if v >= n {
                    return Err(BfsError::NeighborOutOfBounds {
                        vertex: u,
                        neighbor: v,
                        vertex_count: n,
                    });
                }
                edges.push(v);
            }
        }

        Ok(Self { offsets, edges })
    }

    /// Builds a CSR graph directly from CSR parts.
    ///
    /// # Errors
    /// Returns [`BfsError::InvalidCsr`]
    /// - if `offsets` is empty or does not start at zero
    /// - if offsets are not monotone
    /// - if `offsets.last() != edges.len()`
    ///
    /// and [`BfsError::NeighborOutOfBounds`] if a target is not a vertex.
    pub fn from_csr_parts(offsets: Vec<usize>, edges: Vec<usize>) -> Result<Self> {
        let Some(&last) = offsets.last() else {
            return Err(BfsError::InvalidCsr("offsets must have length n+1".into()));
        };
        if offsets[0] != 0 {
            return Err(BfsError::InvalidCsr(format!(
                "first offset must be 0, got {}",
                offsets[0]
            )));
        }
        if let Some(row) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(BfsError::InvalidCsr(format!(
                "offsets must be monotone (row {row})"
            )));
        }
        if last != edges.len() {
            return Err(BfsError::InvalidCsr(format!(
                "last offset {last} must equal edge count {}",
                edges.len()
            )));
        }

        let n = offsets.len() - 1;
        for u in 0..n {
            if let Some(&v) = edges[offsets[u]..offsets[u + 1]].iter().find(|&&v| v >= n) {
                return Err(BfsError::NeighborOutOfBounds {
                    vertex: u,
                    neighbor: v,
                    vertex_count: n,
                });
            }
        }

        Ok(Self { offsets, edges })
    }

    /// Returns the out-degree of a vertex.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.vertex_count(), "vertex index out of bounds");
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Row offsets, length `n + 1`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Edge targets in row-major order.
    pub fn targets(&self) -> &[usize] {
        &self.edges
    }
}

impl Graph for CsrGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.edges[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl From<&AdjacencyGraph> for CsrGraph {
    fn from(graph: &AdjacencyGraph) -> Self {
        let lists = graph.as_lists();
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        offsets.push(0);
        let mut edges = Vec::with_capacity(graph.edge_count());
        for nbrs in lists {
            edges.extend_from_slice(nbrs);
            offsets.push(edges.len());
        }
        Self { offsets, edges }
    }
}
