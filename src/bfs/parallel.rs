//! Level-synchronous parallel traversal with scan-based frontier compaction.
//!
//! Per call the engine moves through `INIT -> (DISCOVER -> COMPACT)* -> DONE`:
//!
//! - **INIT**: allocate claim flags and distance cells for the call's brand,
//!   claim `start`, frontier = `{start}`.
//! - **DISCOVER**: every frontier entry `i` scans its vertex's neighbors on one
//!   task, claims unvisited ones, records their distance and appends them to
//!   its own discovery list. `counts[i]` = list length.
//! - **COMPACT**: `counts` (zero-padded to a power of two) is exclusive-scanned
//!   into write offsets; each list is copied to `next[offsets[i]..]`.
//! - Buffers swap and the loop repeats while the new frontier is non-empty.
//!
//! The only synchronized step is the per-neighbor claim. Every other shared
//! write goes to a slot owned by exactly one task for the level, and the
//! pool's join after each parallel pass is the barrier between phases.
//!
//! **Work**: \(O(n + m)\), **depth**: \(O(D \log n)\) for diameter \(D\).

use rayon::prelude::*;
use serde::Serialize;

use super::{check_start, BfsConfig, Distance};
use crate::{
    concurrency::{exclusive_scan, scatter_lists},
    graph::{
        access::{DistanceCells, VisitedFlags},
        Graph,
    },
    BfsError, GhostToken, Result,
};

/// Per-traversal level profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// `frontier_sizes[k]` = number of vertices at distance `k`.
    pub frontier_sizes: Vec<usize>,
}

impl TraversalStats {
    /// Number of non-empty levels, including the start level.
    pub fn levels(&self) -> usize {
        self.frontier_sizes.len()
    }

    /// Number of vertices reached, including the start.
    pub fn reached(&self) -> usize {
        self.frontier_sizes.iter().sum()
    }

    /// Size of the widest level.
    pub fn max_frontier(&self) -> usize {
        self.frontier_sizes.iter().copied().max().unwrap_or(0)
    }
}

/// A parallel BFS engine owning its worker pool.
///
/// # Example
///
/// ```rust
/// use parbfs::{graph::generators, BfsConfig, ParallelBfs};
///
/// let engine = ParallelBfs::new(BfsConfig::default().with_threads(2)).unwrap();
/// let distances = engine.run(&generators::star(3), 0).unwrap();
/// assert_eq!(distances, vec![0, 1, 1, 1]);
/// ```
pub struct ParallelBfs {
    config: BfsConfig,
    pool: rayon::ThreadPool,
}

impl ParallelBfs {
    /// Starts an engine with `config.resolved_threads()` workers.
    ///
    /// # Errors
    /// Returns [`BfsError::ThreadPool`] if the workers cannot be spawned.
    pub fn new(config: BfsConfig) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.resolved_threads())
            .thread_name(|i| format!("parbfs-{i}"))
            .build()?;
        Ok(Self { config, pool })
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &BfsConfig {
        &self.config
    }

    /// Computes hop distances from `start`.
    ///
    /// An empty graph has no valid start, so it is rejected rather than
    /// mapped to an empty array.
    ///
    /// # Errors
    /// - [`BfsError::StartOutOfBounds`] if `start` is not a vertex, including
    ///   every `start` on an empty graph
    /// - [`BfsError::NeighborOutOfBounds`] if a reached vertex lists a bad neighbor
    /// - [`BfsError::TooManyVertices`] if distances cannot be represented
    /// - [`BfsError::Allocation`] if the working buffers cannot be allocated
    pub fn run<G: Graph + ?Sized>(&self, graph: &G, start: usize) -> Result<Vec<Distance>> {
        self.run_with_stats(graph, start).map(|(distances, _)| distances)
    }

    /// Like [`run`](Self::run), also returning the per-level frontier sizes.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_stats<G: Graph + ?Sized>(
        &self,
        graph: &G,
        start: usize,
    ) -> Result<(Vec<Distance>, TraversalStats)> {
        check_start(graph.vertex_count(), start)?;
        self.pool
            .install(|| GhostToken::new(|token| traverse(&self.config, &token, graph, start)))
    }
}

/// Computes hop distances from `start` on the ambient rayon pool with the
/// default configuration.
///
/// Use [`ParallelBfs`] to control the worker count.
///
/// # Errors
/// Same as [`ParallelBfs::run`].
pub fn parallel_bfs<G: Graph + ?Sized>(graph: &G, start: usize) -> Result<Vec<Distance>> {
    check_start(graph.vertex_count(), start)?;
    let config = BfsConfig::default();
    GhostToken::new(|token| traverse(&config, &token, graph, start)).map(|(distances, _)| distances)
}

/// Frontier, next frontier, discovery lists and counts for one traversal.
struct LevelBuffers {
    current: Vec<usize>,
    next: Vec<usize>,
    discovered: Vec<Vec<usize>>,
    counts: Vec<usize>,
}

impl LevelBuffers {
    fn new(vertex_count: usize) -> Result<Self> {
        let mut current = Vec::new();
        current.try_reserve_exact(vertex_count)?;
        let mut next = Vec::new();
        next.try_reserve_exact(vertex_count)?;
        let mut counts = Vec::new();
        counts.try_reserve_exact(vertex_count.next_power_of_two())?;
        Ok(Self {
            current,
            next,
            discovered: Vec::new(),
            counts,
        })
    }

    /// Sizes the lists and the zeroed, power-of-two counts for the current frontier.
    fn prepare_level(&mut self) -> Result<()> {
        let width = self.current.len();
        if self.discovered.len() < width {
            self.discovered.try_reserve(width - self.discovered.len())?;
            self.discovered.resize_with(width, Vec::new);
        }
        self.counts.clear();
        self.counts.resize(width.next_power_of_two(), 0);
        Ok(())
    }

    fn advance(&mut self) {
        core::mem::swap(&mut self.current, &mut self.next);
    }
}

fn traverse<'brand, G: Graph + ?Sized>(
    config: &BfsConfig,
    token: &GhostToken<'brand>,
    graph: &G,
    start: usize,
) -> Result<(Vec<Distance>, TraversalStats)> {
    let n = graph.vertex_count();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("parallel_bfs", vertices = n, start).entered();

    let visited = VisitedFlags::new(token, n)?;
    let distances = DistanceCells::new(token, n)?;
    let mut buffers = LevelBuffers::new(n)?;
    let mut stats = TraversalStats::default();

    let claimed = visited.try_claim(start);
    debug_assert_eq!(claimed, Some(true));
    distances.set(start, 0);
    buffers.current.push(start);

    let mut level: Distance = 0;
    while !buffers.current.is_empty() {
        stats.frontier_sizes.push(buffers.current.len());
        buffers.prepare_level()?;
        discover(config, graph, &visited, &distances, &mut buffers, level + 1)?;
        let found = compact(config, &mut buffers);
        debug_assert_eq!(found, buffers.next.len());

        #[cfg(feature = "tracing")]
        tracing::trace!(level, frontier = buffers.current.len(), found, "level compacted");

        buffers.advance();
        level += 1;
    }

    debug_assert_eq!(visited.claimed_count(), stats.reached());
    Ok((distances.into_vec(), stats))
}

/// DISCOVER: claims and records the next level, one task per frontier entry.
fn discover<G: Graph + ?Sized>(
    config: &BfsConfig,
    graph: &G,
    visited: &VisitedFlags<'_>,
    distances: &DistanceCells<'_>,
    buffers: &mut LevelBuffers,
    next_level: Distance,
) -> Result<()> {
    let width = buffers.current.len();
    let LevelBuffers {
        current,
        discovered,
        counts,
        ..
    } = buffers;

    current
        .par_iter()
        .zip(discovered[..width].par_iter_mut())
        .zip(counts[..width].par_iter_mut())
        .with_min_len(config.discovery_grain.max(1))
        .try_for_each(|((&vertex, found), count)| {
            let neighbors = graph.neighbors(vertex);
            found.clear();
            found.try_reserve(neighbors.len())?;
            for &neighbor in neighbors {
                match visited.try_claim(neighbor) {
                    Some(true) => {
                        distances.set(neighbor, next_level);
                        found.push(neighbor);
                    }
                    Some(false) => {}
                    None => {
                        return Err(BfsError::NeighborOutOfBounds {
                            vertex,
                            neighbor,
                            vertex_count: visited.len(),
                        })
                    }
                }
            }
            *count = found.len();
            Ok(())
        })
}

/// COMPACT: scans the counts into offsets and packs the lists into `next`.
///
/// Returns the size of the new frontier.
fn compact(config: &BfsConfig, buffers: &mut LevelBuffers) -> usize {
    let width = buffers.current.len();
    let total = exclusive_scan(&mut buffers.counts);

    // Capacity is `n` and `total` only counts fresh claims, so this never reallocates.
    buffers.next.clear();
    buffers.next.resize(total, 0);
    scatter_lists(
        &buffers.discovered[..width],
        &buffers.counts[..width],
        &mut buffers.next,
        config.scatter_grain,
    );
    total
}
