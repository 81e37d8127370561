//! Queue-based reference traversal.

use std::collections::VecDeque;

use super::{check_start, Distance, UNREACHED};
use crate::{graph::Graph, BfsError, Result};

/// Computes hop distances from `start` with a single-threaded FIFO traversal.
///
/// Serves as the correctness oracle for [`ParallelBfs`](super::ParallelBfs).
///
/// **Time complexity**: \(O(n + m)\)
/// **Space complexity**: \(O(n)\) for queue and result
///
/// An empty graph has no valid start, so it is rejected rather than mapped to
/// an empty array.
///
/// # Errors
/// - [`BfsError::StartOutOfBounds`] if `start` is not a vertex, including every
///   `start` on an empty graph
/// - [`BfsError::NeighborOutOfBounds`] if a reached vertex lists a bad neighbor
/// - [`BfsError::Allocation`] if the working buffers cannot be allocated
///
/// # Example
///
/// ```rust
/// use parbfs::{graph::generators, sequential_bfs};
///
/// let distances = sequential_bfs(&generators::chain(4), 0).unwrap();
/// assert_eq!(distances, vec![0, 1, 2, 3]);
/// ```
pub fn sequential_bfs<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Vec<Distance>> {
    let n = graph.vertex_count();
    check_start(n, start)?;

    let mut distances = Vec::new();
    distances.try_reserve_exact(n)?;
    distances.resize(n, UNREACHED);

    let mut queue = VecDeque::new();
    queue.try_reserve(n)?;

    distances[start] = 0;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        let next = distances[u] + 1;
        for &v in graph.neighbors(u) {
            let Some(slot) = distances.get_mut(v) else {
                return Err(BfsError::NeighborOutOfBounds {
                    vertex: u,
                    neighbor: v,
                    vertex_count: n,
                });
            };
            if *slot == UNREACHED {
                *slot = next;
                queue.push_back(v);
            }
        }
    }

    Ok(distances)
}
