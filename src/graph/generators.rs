//! Builders for graphs with known structure.
//!
//! All generators produce undirected graphs (both edge directions stored) and
//! are valid by construction.

use rand::Rng;

use super::AdjacencyGraph;

/// `vertex_count` isolated vertices.
pub fn empty(vertex_count: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_validated(vec![Vec::new(); vertex_count])
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn chain(vertex_count: usize) -> AdjacencyGraph {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for v in 1..vertex_count {
        adjacency[v - 1].push(v);
        adjacency[v].push(v - 1);
    }
    AdjacencyGraph::from_validated(adjacency)
}

/// Star with center `0` and `leaves` leaves `1..=leaves`.
pub fn star(leaves: usize) -> AdjacencyGraph {
    let mut adjacency = vec![Vec::new(); leaves + 1];
    for leaf in 1..=leaves {
        adjacency[0].push(leaf);
        adjacency[leaf].push(0);
    }
    AdjacencyGraph::from_validated(adjacency)
}

/// Complete graph on `vertex_count` vertices, no self-loops.
pub fn complete(vertex_count: usize) -> AdjacencyGraph {
    let adjacency = (0..vertex_count)
        .map(|u| (0..vertex_count).filter(|&v| v != u).collect())
        .collect();
    AdjacencyGraph::from_validated(adjacency)
}

/// `pairs` disjoint edges `{0-1}, {2-3}, ...`.
pub fn disjoint_edges(pairs: usize) -> AdjacencyGraph {
    let mut adjacency = Vec::with_capacity(pairs * 2);
    for p in 0..pairs {
        adjacency.push(vec![2 * p + 1]);
        adjacency.push(vec![2 * p]);
    }
    AdjacencyGraph::from_validated(adjacency)
}

/// `width x height` 4-connected grid; vertex `(x, y)` has id `x + y * width`.
pub fn grid_2d(width: usize, height: usize) -> AdjacencyGraph {
    cube_grid(width, height, 1)
}

/// Vertex id of `(x, y, z)` in a [`cube_grid`] of size `size_x x size_y x _`.
#[inline]
pub const fn cube_index(size_x: usize, size_y: usize, x: usize, y: usize, z: usize) -> usize {
    x + y * size_x + z * size_x * size_y
}

/// `size_x x size_y x size_z` 6-connected lattice.
///
/// Neighbor order per vertex is `-x, +x, -y, +y, -z, +z` (missing ones skipped).
pub fn cube_grid(size_x: usize, size_y: usize, size_z: usize) -> AdjacencyGraph {
    let n = size_x * size_y * size_z;
    let mut adjacency = Vec::with_capacity(n);
    let at = |x, y, z| cube_index(size_x, size_y, x, y, z);

    for z in 0..size_z {
        for y in 0..size_y {
            for x in 0..size_x {
                let mut nbrs = Vec::with_capacity(6);
                if x > 0 {
                    nbrs.push(at(x - 1, y, z));
                }
                if x + 1 < size_x {
                    nbrs.push(at(x + 1, y, z));
                }
                if y > 0 {
                    nbrs.push(at(x, y - 1, z));
                }
                if y + 1 < size_y {
                    nbrs.push(at(x, y + 1, z));
                }
                if z > 0 {
                    nbrs.push(at(x, y, z - 1));
                }
                if z + 1 < size_z {
                    nbrs.push(at(x, y, z + 1));
                }
                adjacency.push(nbrs);
            }
        }
    }
    AdjacencyGraph::from_validated(adjacency)
}

/// Random simple undirected graph.
///
/// Draws `attempts` endpoint pairs uniformly; self-loops and duplicate edges
/// are skipped, so the result has at most `attempts` undirected edges.
pub fn random_undirected<R: Rng>(
    vertex_count: usize,
    attempts: usize,
    rng: &mut R,
) -> AdjacencyGraph {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    if vertex_count < 2 {
        return AdjacencyGraph::from_validated(adjacency);
    }
    for _ in 0..attempts {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v && !adjacency[u].contains(&v) {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
    }
    AdjacencyGraph::from_validated(adjacency)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::graph::Graph;

    fn is_symmetric(g: &AdjacencyGraph) -> bool {
        (0..g.vertex_count()).all(|u| g.neighbors(u).iter().all(|&v| g.has_edge(v, u)))
    }

    #[test]
    fn chain_and_star_shapes() {
        let c = chain(4);
        assert_eq!(c.as_lists(), &[vec![1], vec![0, 2], vec![1, 3], vec![2]]);

        let s = star(100);
        assert_eq!(s.vertex_count(), 101);
        assert_eq!(s.degree(0), 100);
        assert!((1..=100).all(|leaf| s.neighbors(leaf) == [0]));

        assert_eq!(chain(0).vertex_count(), 0);
        assert_eq!(chain(1).edge_count(), 0);
    }

    #[test]
    fn complete_has_no_self_loops() {
        let g = complete(5);
        assert_eq!(g.edge_count(), 20);
        assert!((0..5).all(|v| !g.has_edge(v, v)));
    }

    #[test]
    fn disjoint_edges_pairs_up() {
        let g = disjoint_edges(2);
        assert_eq!(g.as_lists(), &[vec![1], vec![0], vec![3], vec![2]]);
    }

    #[test]
    fn cube_grid_degrees() {
        let g = cube_grid(5, 5, 5);
        assert_eq!(g.vertex_count(), 125);
        assert_eq!(g.degree(cube_index(5, 5, 0, 0, 0)), 3);
        assert_eq!(g.degree(cube_index(5, 5, 2, 2, 2)), 6);
        assert_eq!(g.degree(cube_index(5, 5, 4, 2, 0)), 4);
        // 3 * 5 * 5 * 4 undirected edges.
        assert_eq!(g.edge_count(), 2 * 300);
        assert!(is_symmetric(&g));
    }

    #[test]
    fn cube_neighbor_order() {
        let g = cube_grid(3, 3, 3);
        let center = cube_index(3, 3, 1, 1, 1);
        assert_eq!(
            g.neighbors(center),
            &[
                cube_index(3, 3, 0, 1, 1),
                cube_index(3, 3, 2, 1, 1),
                cube_index(3, 3, 1, 0, 1),
                cube_index(3, 3, 1, 2, 1),
                cube_index(3, 3, 1, 1, 0),
                cube_index(3, 3, 1, 1, 2),
            ]
        );
    }

    #[test]
    fn grid_2d_is_flat_cube() {
        assert_eq!(grid_2d(4, 3), cube_grid(4, 3, 1));
        assert_eq!(grid_2d(4, 3).edge_count(), 2 * (3 * 3 + 4 * 2));
    }

    #[test]
    fn random_graph_is_simple_and_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = random_undirected(40, 200, &mut rng);
        assert_eq!(g.vertex_count(), 40);
        assert!(is_symmetric(&g));
        for v in 0..40 {
            let nbrs = g.neighbors(v);
            assert!(!nbrs.contains(&v));
            let mut sorted = nbrs.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), nbrs.len());
        }

        assert_eq!(random_undirected(1, 10, &mut rng).edge_count(), 0);
    }
}
