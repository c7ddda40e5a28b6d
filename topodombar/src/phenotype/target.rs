use hashbrown::{
    HashMap,
    HashSet,
};

use super::phenodata::PhenotypeData;
use super::term::TermId;
use crate::data_structs::typedef::NameStr;

/// Genes associated with each target term.
///
/// Terms without an entry behave as having no target genes.
#[derive(Debug, Clone, Default)]
pub struct TargetGenes {
    inner: HashMap<TermId, HashSet<NameStr>>,
    empty: HashSet<NameStr>,
}

impl<I> FromIterator<(TermId, I)> for TargetGenes
where
    I: IntoIterator<Item = NameStr>,
{
    fn from_iter<T: IntoIterator<Item = (TermId, I)>>(iter: T) -> Self {
        let mut res = Self::default();
        for (term, genes) in iter {
            res.insert(term, genes);
        }
        res
    }
}

impl TargetGenes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps every term to the annotated genes carrying it or one of its
    /// descendants.
    pub fn from_annotations<'a>(
        data: &PhenotypeData,
        terms: impl IntoIterator<Item = &'a TermId>,
    ) -> Self {
        terms
            .into_iter()
            .map(|term| (term.clone(), data.genes_for_term(term.as_str())))
            .collect()
    }

    pub fn insert(
        &mut self,
        term: TermId,
        genes: impl IntoIterator<Item = NameStr>,
    ) {
        self.inner.entry(term).or_default().extend(genes);
    }

    pub fn get(
        &self,
        term: &str,
    ) -> Option<&HashSet<NameStr>> {
        self.inner.get(term)
    }

    /// Target genes of `term`; empty for unknown or missing terms.
    pub fn targets_for(
        &self,
        term: Option<&TermId>,
    ) -> &HashSet<NameStr> {
        term.and_then(|t| self.inner.get(t))
            .unwrap_or(&self.empty)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &TermId> {
        self.inner.keys()
    }
}
