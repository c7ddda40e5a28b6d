use hashbrown::{
    HashMap,
    HashSet,
};
use indexmap::IndexMap;
use log::{
    debug,
    warn,
};

use super::term::{
    Term,
    TermId,
};

/// In-memory term graph of a phenotype ontology.
///
/// Terms are kept in file order. Alternative IDs map to their primary term
/// and obsolete terms are followed through `replaced_by` when resolving.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    terms:        IndexMap<TermId, Term>,
    alternatives: HashMap<TermId, TermId>,
}

impl FromIterator<Term> for Ontology {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        let mut terms = IndexMap::new();
        let mut alternatives = HashMap::new();
        for term in iter {
            for alt in term.alt_ids() {
                alternatives.insert(alt.clone(), term.id().clone());
            }
            terms.insert(term.id().clone(), term);
        }

        let dangling = terms
            .values()
            .flat_map(|t| t.parents().iter())
            .filter(|p| !terms.contains_key(*p))
            .count();
        if dangling > 0 {
            warn!("{dangling} is_a references point to unknown terms");
        }
        debug!(
            "Built ontology with {} terms and {} alternative IDs",
            terms.len(),
            alternatives.len()
        );

        Self {
            terms,
            alternatives,
        }
    }
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(
        &self,
        id: &str,
    ) -> Option<&Term> {
        self.terms.get(id)
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    /// Maps an identifier to the current primary term.
    ///
    /// Alternative IDs resolve to their primary term, obsolete terms to
    /// their replacement. Unknown IDs and obsolete terms without a
    /// replacement resolve to `None`.
    pub fn resolve(
        &self,
        id: &str,
    ) -> Option<TermId> {
        let mut current = id.trim();
        // Bounded by the number of terms so replacement cycles terminate.
        for _ in 0..=self.terms.len() {
            if let Some(term) = self.terms.get(current) {
                if !term.is_obsolete() {
                    return Some(term.id().clone());
                }
                current = term.replaced_by().as_ref()?.as_str();
            }
            else {
                current = self.alternatives.get(current)?.as_str();
            }
        }
        None
    }

    /// The term itself and every term reachable through `is_a` edges.
    ///
    /// Empty for unknown terms.
    pub fn ancestors(
        &self,
        id: &str,
    ) -> HashSet<TermId> {
        let mut visited = HashSet::new();
        let Some(start) = self.terms.get(id)
        else {
            return visited;
        };

        let mut stack = vec![start.id().clone()];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(term) = self.terms.get(current.as_str()) {
                stack.extend(
                    term.parents()
                        .iter()
                        .filter(|p| !visited.contains(*p))
                        .cloned(),
                );
            }
        }
        visited
    }

    /// Whether `ancestor` is `term` itself or one of its ancestors.
    pub fn is_a(
        &self,
        term: &str,
        ancestor: &str,
    ) -> bool {
        self.ancestors(term).contains(ancestor)
    }
}
