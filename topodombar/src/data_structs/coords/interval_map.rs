use hashbrown::HashMap;
use itertools::Itertools;
use rust_lapper::{
    Interval,
    Lapper,
};

use super::GenomicInterval;
use crate::data_structs::typedef::{
    NameStr,
    PosType,
};
use crate::data_structs::GenomicSet;

/// Per-chromosome interval index over the positions of a sequence of
/// elements.
///
/// Lookups return positions in ascending order, which is the insertion order
/// of the indexed [`GenomicSet`].
#[derive(Clone, Debug, Default)]
pub struct IntervalIndex {
    inner: HashMap<NameStr, Lapper<PosType, usize>>,
}

impl<'a, T> FromIterator<&'a T> for IntervalIndex
where
    T: GenomicInterval + 'a,
{
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        let by_chr = iter
            .into_iter()
            .enumerate()
            .map(|(idx, elem)| {
                (elem.chr().clone(), Interval {
                    start: elem.start(),
                    stop:  elem.end(),
                    val:   idx,
                })
            })
            .into_group_map();

        let inner = by_chr
            .into_iter()
            .map(|(chr, intervals)| (chr, Lapper::new(intervals)))
            .collect();
        Self { inner }
    }
}

impl IntervalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_intervals(&self) -> usize {
        self.inner.values().map(|v| v.len()).sum()
    }

    pub fn n_chr(&self) -> usize {
        self.inner.len()
    }

    /// Positions of all indexed elements sharing at least one base with
    /// `query`.
    pub fn find<Q: GenomicInterval + ?Sized>(
        &self,
        query: &Q,
    ) -> Vec<usize> {
        self.inner
            .get(query.chr())
            .map(|lapper| {
                lapper
                    .find(query.start(), query.end())
                    .map(|iv| iv.val)
                    .sorted_unstable()
                    .collect_vec()
            })
            .unwrap_or_default()
    }
}

/// A reference [`GenomicSet`] together with its [`IntervalIndex`].
///
/// Genes, enhancers and boundaries are queried through this type.
#[derive(Clone, Debug)]
pub struct IndexedSet<T> {
    set:   GenomicSet<T>,
    index: IntervalIndex,
}

impl<T: GenomicInterval> From<GenomicSet<T>> for IndexedSet<T> {
    fn from(set: GenomicSet<T>) -> Self {
        let index = set.iter().collect();
        Self { set, index }
    }
}

impl<T: GenomicInterval> Default for IndexedSet<T> {
    fn default() -> Self {
        GenomicSet::new().into()
    }
}

impl<T: GenomicInterval> IndexedSet<T> {
    pub fn new(set: GenomicSet<T>) -> Self {
        set.into()
    }

    pub fn set(&self) -> &GenomicSet<T> {
        &self.set
    }

    pub fn into_inner(self) -> GenomicSet<T> {
        self.set
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Elements overlapping `query`, in set order.
    pub fn overlapping<Q: GenomicInterval + ?Sized>(
        &self,
        query: &Q,
    ) -> Vec<&T> {
        self.index
            .find(query)
            .into_iter()
            .filter_map(|idx| self.set.get_index(idx))
            .collect()
    }

    /// Elements lying fully inside `query`, in set order.
    pub fn contained_in<Q: GenomicInterval + ?Sized>(
        &self,
        query: &Q,
    ) -> Vec<&T> {
        self.index
            .find(query)
            .into_iter()
            .filter_map(|idx| self.set.get_index(idx))
            .filter(|elem| query.contains(*elem))
            .collect()
    }

    /// Names of the elements overlapping `query`, in set order.
    pub fn overlapping_names<Q: GenomicInterval + ?Sized>(
        &self,
        query: &Q,
    ) -> Vec<NameStr> {
        self.overlapping(query)
            .into_iter()
            .map(|elem| elem.name().clone())
            .collect()
    }
}
