//! Core traits and types for keysort.
//!
//! This module defines:
//! - [`Key`]: The integer key records are ordered and searched by.
//! - [`Keyed`]: The trait users implement to sort and search their own record types.
//! - SortPtr: Internal `(index, key)` pair moved around by merge sort instead of the records.

/// Integer key every record exposes.
pub type Key = i64;

/// Pointer to a record, storing its position and a copy of its key.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SortPtr {
    pub index: usize,
    pub key: Key,
}

impl SortPtr {
    /// Builds one pointer per record, in input order.
    pub(crate) fn collect<R: Keyed>(records: &[R]) -> Vec<SortPtr> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| SortPtr {
                index,
                key: record.key(),
            })
            .collect()
    }
}

/// A record that exposes a single integer key.
///
/// Sorting and searching only ever read the key. Everything else about the record
/// is left alone, and the key itself is never written.
///
/// # Examples
///
/// ```
/// use keysort::core::{Key, Keyed};
///
/// struct Product {
///     id: Key,
///     name: String,
/// }
///
/// impl Keyed for Product {
///     fn key(&self) -> Key {
///         self.id
///     }
/// }
/// ```
pub trait Keyed {
    /// Returns the key of this record.
    fn key(&self) -> Key;
}

impl Keyed for Key {
    #[inline]
    fn key(&self) -> Key {
        *self
    }
}

// Tagged pairs are handy for checking stability: the key comes first, the tag rides along.
impl<T> Keyed for (Key, T) {
    #[inline]
    fn key(&self) -> Key {
        self.0
    }
}

impl Keyed for SortPtr {
    #[inline]
    fn key(&self) -> Key {
        self.key
    }
}

impl<R: Keyed + ?Sized> Keyed for &R {
    #[inline]
    fn key(&self) -> Key {
        (**self).key()
    }
}

impl<R: Keyed + ?Sized> Keyed for Box<R> {
    #[inline]
    fn key(&self) -> Key {
        (**self).key()
    }
}
