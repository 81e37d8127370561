//! Branded claim flags for one traversal.
//!
//! `VisitedFlags` holds one `GhostAtomicBool` per vertex. A vertex is
//! *claimed* by the first caller whose test-and-set flips its flag; every
//! later caller is denied. This is the only synchronized operation of a
//! level-synchronous traversal.

use core::sync::atomic::Ordering;

use crate::{concurrency::atomic::GhostAtomicBool, GhostToken, Result};

/// A per-vertex claim flag vector, scoped to one token brand.
pub(crate) struct VisitedFlags<'brand> {
    flags: Vec<GhostAtomicBool<'brand>>,
}

impl<'brand> VisitedFlags<'brand> {
    /// Allocates `len` unclaimed flags inside `token`'s scope.
    pub(crate) fn new(_token: &GhostToken<'brand>, len: usize) -> Result<Self> {
        let mut flags = Vec::new();
        flags.try_reserve_exact(len)?;
        flags.extend((0..len).map(|_| GhostAtomicBool::new(false)));
        Ok(Self { flags })
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Attempts to claim `vertex`.
    ///
    /// Returns `Some(true)` for the single winning caller, `Some(false)` if the
    /// vertex was already claimed, and `None` if `vertex` is out of bounds.
    #[inline(always)]
    pub(crate) fn try_claim(&self, vertex: usize) -> Option<bool> {
        // Relaxed suffices: claims publish nothing but the flag itself, and
        // levels are separated by the pool's join barrier.
        self.flags
            .get(vertex)
            .map(|flag| flag.test_and_set(Ordering::Relaxed))
    }

    #[cfg(test)]
    pub(crate) fn is_claimed(&self, vertex: usize) -> bool {
        self.flags[vertex].load(Ordering::Relaxed)
    }

    /// Number of claimed vertices.
    pub(crate) fn claimed_count(&self) -> usize {
        self.flags
            .iter()
            .filter(|f| f.load(Ordering::Relaxed))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn claims_each_vertex_once() {
        GhostToken::new(|token| {
            let visited = VisitedFlags::new(&token, 3).unwrap();
            assert_eq!(visited.len(), 3);
            assert_eq!(visited.try_claim(1), Some(true));
            assert_eq!(visited.try_claim(1), Some(false));
            assert!(visited.is_claimed(1));
            assert!(!visited.is_claimed(0));
            assert_eq!(visited.try_claim(3), None);
            assert_eq!(visited.claimed_count(), 1);
        });
    }

    #[test]
    fn concurrent_claims_partition_vertices() {
        GhostToken::new(|token| {
            let n = 10_000;
            let visited = VisitedFlags::new(&token, n).unwrap();
            let wins = AtomicUsize::new(0);
            std::thread::scope(|s| {
                for _ in 0..4 {
                    s.spawn(|| {
                        for v in 0..n {
                            if visited.try_claim(v) == Some(true) {
                                wins.fetch_add(1, Ordering::Relaxed);
                            }
                        }
                    });
                }
            });
            assert_eq!(wins.load(Ordering::Relaxed), n);
            assert_eq!(visited.claimed_count(), n);
        });
    }
}
