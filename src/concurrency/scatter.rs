//! Parallel copy of many short lists into disjoint ranges of one buffer.
//!
//! Given the exclusive prefix sum of the list lengths, list `i` owns the range
//! `offsets[i]..offsets[i] + lists[i].len()` of the output. The output slice is
//! split recursively at list boundaries with `split_at_mut`, so every worker
//! writes only the sub-slice it was handed.

/// Copies `lists[i]` into `out` starting at `offsets[i]`, in parallel.
///
/// `offsets` must be the exclusive prefix sum of the list lengths and `out`
/// must be exactly as long as the total. Ranges shorter than `grain` output
/// elements are copied on the current thread.
///
/// # Panics
/// Panics if `offsets.len() < lists.len()` or the offsets do not describe
/// `out`.
pub fn scatter_lists<T>(lists: &[Vec<T>], offsets: &[usize], out: &mut [T], grain: usize)
where
    T: Copy + Send + Sync,
{
    assert!(
        offsets.len() >= lists.len(),
        "need {} offsets, got {}",
        lists.len(),
        offsets.len()
    );
    scatter_range(lists, &offsets[..lists.len()], 0, out, grain);
}

fn scatter_range<T>(lists: &[Vec<T>], offsets: &[usize], base: usize, out: &mut [T], grain: usize)
where
    T: Copy + Send + Sync,
{
    if lists.len() <= 1 || out.len() <= grain {
        let mut pos = 0;
        for (list, &offset) in lists.iter().zip(offsets) {
            debug_assert_eq!(offset - base, pos, "offsets are not an exclusive scan");
            out[pos..pos + list.len()].copy_from_slice(list);
            pos += list.len();
        }
        return;
    }

    let mid = lists.len() / 2;
    let split = offsets[mid] - base;
    let (left, right) = out.split_at_mut(split);
    let (left_lists, right_lists) = lists.split_at(mid);
    let (left_offsets, right_offsets) = offsets.split_at(mid);
    rayon::join(
        || scatter_range(left_lists, left_offsets, base, left, grain),
        || scatter_range(right_lists, right_offsets, offsets[mid], right, grain),
    );
}
