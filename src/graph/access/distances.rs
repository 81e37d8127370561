//! Branded distance cells written concurrently by claim winners.
//!
//! Each cell is written at most once per traversal, by the task that claimed
//! the vertex, so plain relaxed stores suffice. The cells are unwrapped into an
//! owned `Vec<Distance>` once the traversal completes.

use core::sync::atomic::Ordering;

use crate::{bfs::Distance, concurrency::atomic::GhostAtomicI32, GhostToken, Result, UNREACHED};

pub(crate) struct DistanceCells<'brand> {
    cells: Vec<GhostAtomicI32<'brand>>,
}

impl<'brand> DistanceCells<'brand> {
    /// Allocates `len` cells holding [`UNREACHED`].
    pub(crate) fn new(_token: &GhostToken<'brand>, len: usize) -> Result<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(len)?;
        cells.extend((0..len).map(|_| GhostAtomicI32::new(UNREACHED)));
        Ok(Self { cells })
    }

    #[inline(always)]
    pub(crate) fn set(&self, vertex: usize, distance: Distance) {
        debug_assert_eq!(self.get(vertex), UNREACHED, "vertex {vertex} written twice");
        self.cells[vertex].store(distance, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn get(&self, vertex: usize) -> Distance {
        self.cells[vertex].load(Ordering::Relaxed)
    }

    pub(crate) fn into_vec(self) -> Vec<Distance> {
        self.cells.into_iter().map(GhostAtomicI32::into_inner).collect()
    }
}
