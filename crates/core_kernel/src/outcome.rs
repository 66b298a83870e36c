//! Listing outcomes
//!
//! A query over a collection either finds nothing or yields its matches in
//! insertion order. An empty collection is a normal result, so it is modelled
//! as a variant here rather than as an error.

use serde::Serialize;

/// Result of a listing or filtering query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "items", rename_all = "snake_case")]
pub enum Listing<T> {
    /// Nothing matched
    Empty,
    /// At least one item, in collection order
    Items(Vec<T>),
}

impl<T> Listing<T> {
    /// Builds a listing from a vector, mapping an empty vector to `Empty`
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Items(items) => items.len(),
        }
    }

    /// Returns the items as a slice (empty for `Empty`)
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Empty => &[],
            Listing::Items(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Empty => Vec::new(),
            Listing::Items(items) => items,
        }
    }

    /// Maps every item, preserving order and emptiness
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        match self {
            Listing::Empty => Listing::Empty,
            Listing::Items(items) => Listing::Items(items.into_iter().map(f).collect()),
        }
    }
}

impl<T> FromIterator<T> for Listing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Listing::Empty
    }
}
