//! # keysort
//!
//! `keysort` keeps collections of integer-keyed records ordered and finds records in them
//! by key.
//!
//! ## Key Features
//!
//! - **Adaptive Strategy**: Insertion sort for short inputs (fewer than 1000 records by
//!   default), top-down merge sort for everything else. The cut-over is a [`SortPolicy`].
//! - **Stable**: Records with equal keys keep their relative order under both algorithms.
//! - **No Clone bound**: Merge sort orders `(index, key)` pointers and then permutes the
//!   records in place, so any [`Keyed`] type can be sorted.
//! - **Binary Search**: [`find`] locates a key in a sorted collection in *O*(log *n*) and
//!   reports absence as `None`.
//! - **Inventory**: A small product inventory and single-product order built on top, in
//!   [`inventory`].
//!
//! ## Usage
//!
//! ```rust
//! use keysort::{find, sort, Keyed};
//!
//! struct Product {
//!     id: i64,
//!     name: &'static str,
//! }
//!
//! impl Keyed for Product {
//!     fn key(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! let mut products = vec![
//!     Product { id: 5, name: "Monitor" },
//!     Product { id: 3, name: "Keyboard" },
//!     Product { id: 1, name: "Laptop" },
//! ];
//! sort(&mut products);
//!
//! let index = find(&products, 3).unwrap();
//! assert_eq!(products[index].name, "Keyboard");
//! assert_eq!(find(&products, 9), None);
//! ```
//!
//! ### Choosing an algorithm explicitly
//!
//! ```rust
//! use keysort::prelude::*;
//!
//! let mut keys: Vec<i64> = (0..2000).rev().collect();
//! AdaptiveSort::new(SortPolicy::new(64)).sort(&mut keys);
//! InsertionSort.sort(&mut keys);
//!
//! assert!(keys.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Insertion sort**: *O*(*n*) on sorted input, *O*(*n*^2) otherwise, no allocation.
//! - **Merge sort**: *O*(*n* \* log(*n*)) always; allocates `16 bytes` per record for pointers
//!   plus the same again for merge scratch space.
//! - **Search**: *O*(log *n*), iterative, no allocation.

pub mod algo;
pub mod core;
pub mod error;
pub mod inventory;
pub mod policy;
pub mod search;

pub use algo::{AdaptiveSort, InsertionSort, MergeSort, Sorter, sort, sorted_indices};
pub use crate::core::{Key, Keyed};
pub use error::{InventoryError, Result};
pub use policy::{SortPolicy, Strategy};
pub use search::{find, find_record, find_record_mut};

pub mod prelude {
    pub use crate::algo::{AdaptiveSort, InsertionSort, MergeSort, Sorter, sort, sorted_indices};
    pub use crate::core::{Key, Keyed};
    pub use crate::policy::{SortPolicy, Strategy};
    pub use crate::search::find;
}
