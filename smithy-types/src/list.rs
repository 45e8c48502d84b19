/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! List values that remember whether they were ever set.
//!
//! A record member of list type can be absent (the caller never touched it) or present (the
//! caller supplied a list, possibly empty). Readers always see a slice, so an absent list reads
//! as empty, while [`TrackedList::is_set`] reports presence. Presence is not part of equality.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// A list with an explicit "was it set" bit.
///
/// The default value is unset. Once built into a record the contents can only be read:
///
/// ```compile_fail
/// use smithy_types::TrackedList;
/// let list: TrackedList<String> = vec!["a".to_string()].into();
/// let slice: &[String] = list.as_slice();
/// slice.push("b".to_string());
/// ```
#[derive(Clone)]
pub struct TrackedList<T> {
    inner: Option<Vec<T>>,
}

impl<T> TrackedList<T> {
    /// Creates a list that reports as unset.
    pub const fn unset() -> Self {
        TrackedList { inner: None }
    }

    /// Creates a list that reports as set but holds no elements.
    pub fn empty() -> Self {
        TrackedList {
            inner: Some(Vec::new()),
        }
    }

    /// Returns true if a value was explicitly supplied, even an empty one.
    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the elements. An unset list yields an empty slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_deref().unwrap_or_default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if there are no elements, whether or not the list is set.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Iterates the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Appends an element, marking the list as set.
    pub fn push(&mut self, item: T) {
        self.inner.get_or_insert_with(Vec::new).push(item);
    }

    /// Replaces the contents. `None` resets the list to unset.
    pub fn set(&mut self, value: Option<Vec<T>>) {
        self.inner = value;
    }

    /// Borrows the underlying optional list.
    pub fn as_option(&self) -> Option<&Vec<T>> {
        self.inner.as_ref()
    }

    /// Consumes the list and returns the underlying optional vector.
    pub fn into_option(self) -> Option<Vec<T>> {
        self.inner
    }
}

impl<T> Default for TrackedList<T> {
    fn default() -> Self {
        TrackedList::unset()
    }
}

impl<T> Extend<T> for TrackedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_or_insert_with(Vec::new).extend(iter);
    }
}

impl<T> From<Vec<T>> for TrackedList<T> {
    fn from(value: Vec<T>) -> Self {
        TrackedList { inner: Some(value) }
    }
}

impl<T> From<Option<Vec<T>>> for TrackedList<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        TrackedList { inner: value }
    }
}

impl<T> FromIterator<T> for TrackedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TrackedList {
            inner: Some(iter.into_iter().collect()),
        }
    }
}

impl<'a, T> IntoIterator for &'a TrackedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for TrackedList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> PartialEq for TrackedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for TrackedList<T> {}

impl<T: Hash> Hash for TrackedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for TrackedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::TrackedList;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn unset_reads_as_empty() {
        let list: TrackedList<String> = TrackedList::default();
        assert!(!list.is_set());
        assert!(list.as_slice().is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn explicit_empty_is_set() {
        let list: TrackedList<String> = Vec::new().into();
        assert!(list.is_set());
        assert!(list.is_empty());
        assert_eq!(TrackedList::<String>::empty(), list);
    }

    #[test]
    fn presence_does_not_affect_equality() {
        let unset: TrackedList<i32> = TrackedList::unset();
        let empty: TrackedList<i32> = TrackedList::empty();
        assert_eq!(unset, empty);
        assert_eq!(hash_of(&unset), hash_of(&empty));
        assert_eq!(format!("{:?}", unset), "[]");
    }

    #[test]
    fn push_marks_set() {
        let mut list = TrackedList::unset();
        list.push(1);
        list.extend(vec![2, 3]);
        assert!(list.is_set());
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        list.set(None);
        assert!(!list.is_set());
    }

    proptest! {
        #[test]
        fn equal_contents_hash_equal(items in proptest::collection::vec(any::<u16>(), 0..16)) {
            let a: TrackedList<u16> = items.clone().into();
            let b: TrackedList<u16> = items.iter().copied().collect();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
            prop_assert_eq!(a.into_option(), Some(items));
        }
    }
}
