//! Strategy selection for the adaptive sorter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs shorter than this are insertion sorted, everything else is merge sorted.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 1000;

/// Algorithm picked for one sort call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Insertion,
    Merge,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Insertion => f.write_str("insertion"),
            Strategy::Merge => f.write_str("merge"),
        }
    }
}

/// Size policy of [`AdaptiveSort`](crate::algo::AdaptiveSort).
///
/// Can be embedded in a larger configuration file; missing fields fall back to the
/// defaults.
///
/// ```
/// use keysort::policy::{SortPolicy, Strategy};
///
/// let policy = SortPolicy::default();
/// assert_eq!(policy.select(999), Strategy::Insertion);
/// assert_eq!(policy.select(1000), Strategy::Merge);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortPolicy {
    pub insertion_threshold: usize,
}

impl SortPolicy {
    pub const fn new(insertion_threshold: usize) -> Self {
        Self {
            insertion_threshold,
        }
    }

    /// Picks the algorithm for an input of `len` records.
    #[inline]
    pub fn select(&self, len: usize) -> Strategy {
        if len < self.insertion_threshold {
            Strategy::Insertion
        } else {
            Strategy::Merge
        }
    }
}

impl Default for SortPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INSERTION_THRESHOLD)
    }
}
