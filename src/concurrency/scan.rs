//! Work-efficient parallel exclusive prefix sum.
//!
//! Tree-based two-phase scan over a power-of-two length slice:
//!
//! 1. **Up-sweep**: for stride `s = 1, 2, 4, ...` every block of `2s` elements
//!    adds its left half's last element into its own last element. After the
//!    final round the last slot holds the total.
//! 2. **Down-sweep**: the root is cleared, then for block widths `n, n/2, ..., 2`
//!    each block swaps its left-half last element with its last element and
//!    adds the old left value into the right.
//!
//! Each round touches disjoint blocks, so a round is a plain `par_chunks_mut`
//! with no synchronization beyond the implicit barrier at its end.
//!
//! **Work**: \(O(n)\), **depth**: \(O(\log n)\) rounds.

use core::ops::AddAssign;

use num_traits::Zero;
use rayon::prelude::*;

/// Elements per parallel task below which a round runs on one thread.
const SCAN_GRAIN: usize = 4096;

/// Overwrites `values` with its exclusive prefix sum and returns the total.
///
/// After the call, `values[i]` holds the sum of the original elements at
/// indices `< i`. An empty slice returns zero and is left untouched.
///
/// # Panics
/// Panics if `values.len()` is non-zero and not a power of two. Pad with zeros
/// first, or use [`exclusive_scan_padded`].
///
/// # Example
///
/// ```rust
/// use parbfs::concurrency::exclusive_scan;
///
/// let mut counts = vec![3usize, 0, 2, 1];
/// let total = exclusive_scan(&mut counts);
/// assert_eq!(counts, vec![0, 3, 3, 5]);
/// assert_eq!(total, 6);
/// ```
pub fn exclusive_scan<T>(values: &mut [T]) -> T
where
    T: Copy + Zero + AddAssign + Send + Sync,
{
    let n = values.len();
    if n == 0 {
        return T::zero();
    }
    assert!(
        n.is_power_of_two(),
        "scan length {n} must be a power of two"
    );

    let mut width = 2;
    while width <= n {
        let half = width / 2;
        values
            .par_chunks_mut(width)
            .with_min_len(min_blocks(width))
            .for_each(|block| {
                let left = block[half - 1];
                block[width - 1] += left;
            });
        width *= 2;
    }

    let total = values[n - 1];
    values[n - 1] = T::zero();

    let mut width = n;
    while width > 1 {
        let half = width / 2;
        values
            .par_chunks_mut(width)
            .with_min_len(min_blocks(width))
            .for_each(|block| {
                let left = block[half - 1];
                block[half - 1] = block[width - 1];
                block[width - 1] += left;
            });
        width = half;
    }

    total
}

/// Pads `values` with zeros to the next power of two, then scans in place.
///
/// The padded tail is left in the vector; since padding contributes nothing,
/// every padded slot ends up holding the total.
pub fn exclusive_scan_padded<T>(values: &mut Vec<T>) -> T
where
    T: Copy + Zero + AddAssign + Send + Sync,
{
    if values.is_empty() {
        return T::zero();
    }
    values.resize(values.len().next_power_of_two(), T::zero());
    exclusive_scan(values)
}

#[inline]
fn min_blocks(width: usize) -> usize {
    (SCAN_GRAIN / width).max(1)
}
