//! Stable sorting algorithms (Insertion Sort and top-down Merge Sort).
//!
//! Both algorithms implement the [`Sorter`] capability. [`AdaptiveSort`] picks one of
//! them per call through a [`SortPolicy`]:
//! - **Insertion Sort**: In place, no allocation. Used for short inputs.
//! - **Merge Sort**: *O*(*n* \* log(*n*)) worst case. Sorts `(index, key)` pointers and then
//!   permutes the records, so records never have to be cloned.
//!
//! The main entry points are [`sort`] and [`sorted_indices`].

use crate::core::{Keyed, SortPtr};
use crate::policy::{SortPolicy, Strategy};
use cuneiform::cuneiform;
use tracing::debug;

/// A stable sort over keyed records.
///
/// After [`Sorter::sort`] returns, `records[i].key() <= records[i + 1].key()` for every
/// adjacent pair and records with equal keys keep their relative input order.
pub trait Sorter {
    fn sort<R: Keyed>(&self, records: &mut [R]);
}

/// Straight insertion sort. *O*(*n*) on sorted input, *O*(*n*^2) otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort<R: Keyed>(&self, records: &mut [R]) {
        insertion_sort(records);
    }
}

/// Recursive top-down merge sort. Allocates scratch space for the pointers of one merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort<R: Keyed>(&self, records: &mut [R]) {
        if records.len() < 2 {
            return;
        }

        let mut ptrs = SortPtr::collect(records);
        merge_sort(&mut ptrs);
        apply_permutation(records, ptrs.into_iter().map(|p| p.index).collect());
    }
}

/// Chooses between [`InsertionSort`] and [`MergeSort`] by input length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdaptiveSort {
    pub policy: SortPolicy,
}

impl AdaptiveSort {
    pub const fn new(policy: SortPolicy) -> Self {
        Self { policy }
    }
}

impl Sorter for AdaptiveSort {
    fn sort<R: Keyed>(&self, records: &mut [R]) {
        let len = records.len();
        let strategy = self.policy.select(len);
        debug!(len, %strategy, "sorting records");

        match strategy {
            Strategy::Insertion => InsertionSort.sort(records),
            Strategy::Merge => MergeSort.sort(records),
        }
    }
}

/// Sorts keyed records in place with the default [`AdaptiveSort`].
///
/// # Examples
///
/// ```
/// use keysort::sort;
///
/// let mut data: Vec<(i64, &str)> = vec![(2, "first"), (2, "second"), (1, "third")];
/// sort(&mut data);
///
/// assert_eq!(data, vec![(1, "third"), (2, "first"), (2, "second")]);
/// ```
pub fn sort<R: Keyed>(records: &mut [R]) {
    AdaptiveSort::default().sort(records);
}

/// Returns the stable sorting permutation of `records` without moving them.
///
/// `records[indices[i]].key() <= records[indices[i + 1]].key()` holds for the result.
/// The algorithm is chosen the same way [`sort`] chooses it.
///
/// # Examples
///
/// ```
/// use keysort::sorted_indices;
///
/// let data: Vec<i64> = vec![30, 10, 20];
/// assert_eq!(sorted_indices(&data), vec![1, 2, 0]);
/// ```
pub fn sorted_indices<R: Keyed>(records: &[R]) -> Vec<usize> {
    let mut ptrs = SortPtr::collect(records);

    match SortPolicy::default().select(ptrs.len()) {
        Strategy::Insertion => insertion_sort(&mut ptrs),
        Strategy::Merge => merge_sort(&mut ptrs),
    }

    ptrs.into_iter().map(|p| p.index).collect()
}

fn insertion_sort<R: Keyed>(v: &mut [R]) {
    for i in 1..v.len() {
        let held = v[i].key();

        // Find the gap: every predecessor with a strictly greater key moves one slot right.
        let mut gap = i;
        while gap > 0 && v[gap - 1].key() > held {
            gap -= 1;
        }

        v[gap..=i].rotate_right(1);
    }
}

// Both runs of one merge live next to each other.
#[cuneiform]
struct MergeBuffer {
    left: Vec<SortPtr>,
    right: Vec<SortPtr>,
}

fn merge_sort(ptrs: &mut [SortPtr]) {
    if ptrs.len() < 2 {
        return;
    }

    let half = ptrs.len() / 2 + 1;
    let mut buffer = MergeBuffer {
        left: Vec::with_capacity(half),
        right: Vec::with_capacity(half),
    };
    merge_sort_range(ptrs, &mut buffer);
}

/// Sorts `ptrs` by splitting at `m = (len - 1) / 2` into `[0, m]` and `[m + 1, len - 1]`.
fn merge_sort_range(ptrs: &mut [SortPtr], buffer: &mut MergeBuffer) {
    let len = ptrs.len();
    if len < 2 {
        return;
    }

    let mid = (len - 1) / 2 + 1;
    merge_sort_range(&mut ptrs[..mid], buffer);
    merge_sort_range(&mut ptrs[mid..], buffer);
    merge(ptrs, mid, buffer);
}

/// Merges the sorted runs `ptrs[..mid]` and `ptrs[mid..]`. Ties are taken from the left run.
fn merge(ptrs: &mut [SortPtr], mid: usize, buffer: &mut MergeBuffer) {
    let MergeBuffer { left, right } = buffer;
    left.clear();
    left.extend_from_slice(&ptrs[..mid]);
    right.clear();
    right.extend_from_slice(&ptrs[mid..]);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i].key <= right[j].key {
            ptrs[k] = left[i];
            i += 1;
        } else {
            ptrs[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    // One run is exhausted; the rest of the other is already in order.
    let rest_left = left.len() - i;
    ptrs[k..k + rest_left].copy_from_slice(&left[i..]);
    k += rest_left;
    ptrs[k..].copy_from_slice(&right[j..]);
}

/// Reorders `data` so that position `k` holds what was at `indices[k]`.
///
/// Follows each permutation cycle once, swapping elements into place, so no element
/// is ever cloned.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for start in 0..data.len() {
        let mut current = start;
        while indices[current] != start {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}
