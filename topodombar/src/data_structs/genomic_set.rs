use indexmap::map::{
    IntoValues,
    Keys,
    Values,
    ValuesMut,
};
use indexmap::IndexMap;
use log::warn;

use super::coords::GenomicInterval;
use super::typedef::NameStr;

/// Ordered collection of genomic elements keyed by their unique name.
///
/// Iteration follows insertion order. Every stored element is reachable
/// under its own [`GenomicInterval::name`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenomicSet<T> {
    inner: IndexMap<NameStr, T>,
}

impl<T> Default for GenomicSet<T> {
    fn default() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }
}

impl<T: GenomicInterval> GenomicSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts an element under its name.
    ///
    /// An element already stored under the same name is replaced in place
    /// and returned.
    pub fn insert(
        &mut self,
        element: T,
    ) -> Option<T> {
        let replaced = self.inner.insert(element.name().clone(), element);
        if let Some(old) = replaced.as_ref() {
            warn!("Replaced element with duplicate name {}", old.name());
        }
        replaced
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&T> {
        self.inner.get(name)
    }

    pub fn get_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut T> {
        self.inner.get_mut(name)
    }

    pub fn get_index(
        &self,
        index: usize,
    ) -> Option<&T> {
        self.inner.get_index(index).map(|(_, v)| v)
    }

    pub fn get_index_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut T> {
        self.inner.get_index_mut(index).map(|(_, v)| v)
    }

    pub fn index_of(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.inner.get_index_of(name)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Values<'_, NameStr, T> {
        self.inner.values()
    }

    pub fn iter_mut(&mut self) -> ValuesMut<'_, NameStr, T> {
        self.inner.values_mut()
    }

    pub fn names(&self) -> Keys<'_, NameStr, T> {
        self.inner.keys()
    }

    /// Elements grouped by chromosome, chromosomes in first-seen order.
    pub fn by_chromosome(&self) -> IndexMap<NameStr, Vec<&T>> {
        let mut groups: IndexMap<NameStr, Vec<&T>> = IndexMap::new();
        for element in self.iter() {
            groups.entry(element.chr().clone()).or_default().push(element);
        }
        groups
    }
}

impl<T: GenomicInterval> FromIterator<T> for GenomicSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<T> IntoIterator for GenomicSet<T> {
    type IntoIter = IntoValues<NameStr, T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_values()
    }
}

impl<'a, T> IntoIterator for &'a GenomicSet<T> {
    type IntoIter = Values<'a, NameStr, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values()
    }
}
