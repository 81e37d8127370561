use std::sync::OnceLock;

use parbfs::bfs::verify::check_distances;
use parbfs::{sequential_bfs, BfsConfig, Distance, ParallelBfs, UNREACHED};
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

fn engine(threads: usize) -> &'static ParallelBfs {
    static ENGINES: OnceLock<Vec<ParallelBfs>> = OnceLock::new();
    let engines = ENGINES.get_or_init(|| {
        [1, 3, 8]
            .into_iter()
            .map(|t| {
                ParallelBfs::new(
                    BfsConfig::default()
                        .with_threads(t)
                        .with_discovery_grain(1)
                        .with_scatter_grain(2),
                )
                .unwrap()
            })
            .collect()
    });
    engines
        .iter()
        .find(|e| e.threads() == threads)
        .unwrap_or(&engines[0])
}

/// Directed multigraph (self-loops and repeated edges allowed) plus a start vertex.
fn arb_directed() -> impl Strategy<Value = (Vec<Vec<usize>>, usize)> {
    (1usize..64)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n), 0..n * 3),
                0..n,
            )
        })
        .prop_map(|(n, edges, start)| {
            let mut adjacency = vec![Vec::new(); n];
            for (u, v) in edges {
                adjacency[u].push(v);
            }
            (adjacency, start)
        })
}

/// Simple undirected graph plus a start vertex.
fn arb_undirected() -> impl Strategy<Value = (Vec<Vec<usize>>, usize)> {
    (2usize..80)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n), n..n * 4),
                0..n,
            )
        })
        .prop_map(|(n, edges, start)| {
            let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
            for (u, v) in edges {
                if u != v && !adjacency[u].contains(&v) {
                    adjacency[u].push(v);
                    adjacency[v].push(u);
                }
            }
            (adjacency, start)
        })
}

/// Unit-weight shortest paths from petgraph, as a third opinion.
fn petgraph_distances(adjacency: &[Vec<usize>], start: usize) -> Vec<Distance> {
    let mut graph = DiGraph::<(), ()>::new();
    let nodes: Vec<NodeIndex> = (0..adjacency.len()).map(|_| graph.add_node(())).collect();
    for (u, nbrs) in adjacency.iter().enumerate() {
        for &v in nbrs {
            graph.add_edge(nodes[u], nodes[v], ());
        }
    }
    let costs = dijkstra(&graph, nodes[start], None, |_| 1i32);
    nodes
        .iter()
        .map(|n| costs.get(n).copied().unwrap_or(UNREACHED))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn parallel_matches_sequential_on_directed((adjacency, start) in arb_directed()) {
        let expected = sequential_bfs(&adjacency, start).unwrap();
        for threads in [1, 3, 8] {
            let actual = engine(threads).run(&adjacency, start).unwrap();
            prop_assert_eq!(&actual, &expected);
        }
    }

    #[test]
    fn parallel_matches_petgraph_on_undirected((adjacency, start) in arb_undirected()) {
        let actual = engine(8).run(&adjacency, start).unwrap();
        prop_assert_eq!(actual, petgraph_distances(&adjacency, start));
    }

    #[test]
    fn distances_are_tight_and_sound((adjacency, start) in arb_directed()) {
        let distances = engine(3).run(&adjacency, start).unwrap();
        prop_assert_eq!(check_distances(&adjacency, start, &distances), Ok(()));
    }

    #[test]
    fn values_do_not_depend_on_thread_count((adjacency, start) in arb_undirected()) {
        let one = engine(1).run(&adjacency, start).unwrap();
        let many = engine(8).run(&adjacency, start).unwrap();
        let again = engine(8).run(&adjacency, start).unwrap();
        prop_assert_eq!(&one, &many);
        prop_assert_eq!(&many, &again);
    }

    #[test]
    fn frontier_sizes_partition_reached_vertices((adjacency, start) in arb_directed()) {
        let (distances, stats) = engine(3).run_with_stats(&adjacency, start).unwrap();
        let reached = distances.iter().filter(|&&d| d != UNREACHED).count();
        prop_assert_eq!(stats.reached(), reached);
        for (level, &size) in stats.frontier_sizes.iter().enumerate() {
            let at_level = distances.iter().filter(|&&d| d == level as Distance).count();
            prop_assert_eq!(size, at_level);
        }
    }
}
