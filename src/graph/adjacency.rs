//! An immutable adjacency-list directed graph.
//!
//! Each vertex owns a `Vec<usize>` of out-neighbors. Neighbor ids are checked
//! once at construction, so traversals never see an out-of-range id.

use super::{validate_lists, Graph};
use crate::{BfsError, Result};

/// A validated adjacency-list graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Validates every neighbor id |
/// | `undirected_from_edges` | \(O(n + m)\) | Inserts both directions |
/// | `neighbors` | \(O(1)\) | Borrowed slice |
/// | `degree` | \(O(1)\) | `Vec::len` |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan |
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Creates a graph from adjacency lists.
    ///
    /// # Errors
    /// Returns [`BfsError::NeighborOutOfBounds`] if any neighbor id is not a vertex.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        validate_lists(&adjacency)?;
        Ok(Self { adjacency })
    }

    /// Builds an undirected graph on `vertex_count` vertices from an edge list.
    ///
    /// Each `(u, v)` is stored as `u -> v` and `v -> u`, in input order.
    ///
    /// # Errors
    /// Returns [`BfsError::NeighborOutOfBounds`] if an endpoint is not a vertex.
    pub fn undirected_from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(u, v) in edges {
            let (vertex, neighbor) = if u >= vertex_count { (v, u) } else { (u, v) };
            if neighbor >= vertex_count {
                return Err(BfsError::NeighborOutOfBounds {
                    vertex,
                    neighbor,
                    vertex_count,
                });
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Ok(Self { adjacency })
    }

    /// Wraps lists that are valid by construction.
    pub(crate) fn from_validated(adjacency: Vec<Vec<usize>>) -> Self {
        debug_assert!(validate_lists(&adjacency).is_ok());
        Self { adjacency }
    }

    /// Returns the out-degree of a vertex.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.adjacency[vertex].len()
    }

    /// Checks if an edge exists from `from` to `to`.
    ///
    /// # Panics
    /// Panics if `from` is out of bounds.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(from < self.vertex_count(), "from vertex {from} out of bounds");
        self.adjacency[from].contains(&to)
    }

    /// Borrows the underlying adjacency lists.
    pub fn as_lists(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Returns the underlying adjacency lists.
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.adjacency
    }
}

impl Graph for AdjacencyGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }
}

impl TryFrom<Vec<Vec<usize>>> for AdjacencyGraph {
    type Error = BfsError;

    fn try_from(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        Self::from_adjacency(adjacency)
    }
}
