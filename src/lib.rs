//! # `parbfs` - Level-Synchronous Parallel Breadth-First Search
//!
//! Single-source shortest-path distances (in edges) over unweighted graphs,
//! computed either by a sequential reference traversal or by a lock-free,
//! data-parallel engine that scales with the worker count.
//!
//! ## Guarantees
//!
//! ### Correctness
//! - **Equivalence**: the parallel engine returns exactly the array the
//!   sequential traversal returns, for every graph and start vertex.
//! - **Exactly-once discovery**: each vertex is claimed by a single task through
//!   an atomic test-and-set, so no vertex enters two frontiers.
//! - **Deterministic values**: the order of vertices inside a frontier depends
//!   on scheduling, the distance array does not.
//!
//! ### Concurrency
//! - **No locks**: the only synchronized operation is the per-neighbor claim.
//! - **Contention-free compaction**: newly found vertices are packed into the
//!   next frontier through a work-efficient parallel prefix sum; every task
//!   writes only the range the scan assigned to it.
//! - **Scoped state**: claim flags and distance cells are branded by a
//!   [`GhostToken`] created per call and cannot outlive it.
//!
//! ## Architecture
//!
//! 1. **Scan** (`concurrency::scan`): in-place exclusive prefix sum, tree
//!    based, \(O(n)\) work and \(O(\log n)\) depth.
//! 2. **Engine** (`bfs::parallel`): `INIT -> (DISCOVER -> COMPACT)* -> DONE`,
//!    one level at a time, with a barrier between phases.
//! 3. **Inputs** (`graph`): any [`Graph`]; [`AdjacencyGraph`] and
//!    [`CsrGraph`] validate neighbor ids at construction.
//!
//! ## Features
//!
//! - `tracing`: a `debug` span per traversal and a `trace` event per level.
//!   `cargo test --features tracing` also compiles and runs the traversal
//!   under the instrumented path.
//!
//! ## Example
//!
//! ```rust
//! use parbfs::{graph::generators, sequential_bfs, BfsConfig, ParallelBfs, UNREACHED};
//!
//! let graph = generators::disjoint_edges(2);
//! let engine = ParallelBfs::new(BfsConfig::default().with_threads(4)).unwrap();
//!
//! let distances = engine.run(&graph, 0).unwrap();
//! assert_eq!(distances, vec![0, 1, UNREACHED, UNREACHED]);
//! assert_eq!(distances, sequential_bfs(&graph, 0).unwrap());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod bfs;
pub mod concurrency;
pub mod error;
pub mod graph;
pub mod token;

pub use bfs::{
    parallel_bfs, sequential_bfs, BfsConfig, Distance, ParallelBfs, TraversalStats, UNREACHED,
};
pub use error::{BfsError, Result};
pub use graph::{AdjacencyGraph, CsrGraph, Graph};
pub use token::GhostToken;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    use crate::concurrency::atomic::{GhostAtomicBool, GhostAtomicI32};

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // Branded atomics are `repr(transparent)` over the std atomics.
    assert!(mem::size_of::<GhostAtomicBool<'static>>() == mem::size_of::<core::sync::atomic::AtomicBool>());
    assert!(mem::size_of::<GhostAtomicI32<'static>>() == mem::size_of::<core::sync::atomic::AtomicI32>());
};
