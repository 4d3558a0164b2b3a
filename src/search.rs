//! Binary search by key over key-sorted records.
//!
//! Every function here assumes the input is sorted ascending by key (for example by
//! [`sort`](crate::algo::sort)). On unsorted input the answer is unspecified, though it
//! never panics.

use crate::core::{Key, Keyed};
use std::cmp::Ordering;
use tracing::debug;

/// Returns the position of a record whose key equals `key`, or `None` if there is none.
///
/// Absence is an ordinary outcome, not an error; callers that need one should map
/// `None` themselves.
///
/// # Examples
///
/// ```
/// use keysort::{find, sort};
///
/// let mut keys: Vec<i64> = vec![5, 3, 1, 4, 2];
/// sort(&mut keys);
///
/// assert_eq!(find(&keys, 4), Some(3));
/// assert_eq!(find(&keys, 9), None);
/// ```
pub fn find<R: Keyed>(records: &[R], key: Key) -> Option<usize> {
    // Half-open [low, high): `high` is one past the inclusive upper bound, so an empty
    // range needs no signed index.
    let mut low = 0;
    let mut high = records.len();

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        match records[mid].key().cmp(&key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    debug!(key, len = records.len(), "key not found");
    None
}

/// Returns the record with the given key.
pub fn find_record<R: Keyed>(records: &[R], key: Key) -> Option<&R> {
    let index = find(records, key)?;
    Some(&records[index])
}

/// Returns the record with the given key, mutably. The caller must not change its key.
pub fn find_record_mut<R: Keyed>(records: &mut [R], key: Key) -> Option<&mut R> {
    let index = find(records, key)?;
    Some(&mut records[index])
}
