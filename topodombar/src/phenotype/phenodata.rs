use hashbrown::{
    HashMap,
    HashSet,
};
use indexmap::IndexMap;
use log::info;

use super::ontology::Ontology;
use super::term::{
    TermId,
    TermSet,
};
use crate::data_structs::typedef::{
    NameStr,
    ScoreType,
};

/// Ontology service used for phenogram scoring.
pub trait PhenotypeOntology {
    /// Maps an input identifier (possibly an alternative or obsolete ID) to
    /// the primary term.
    fn resolve(
        &self,
        id: &str,
    ) -> Option<TermId>;

    /// Similarity between a patient's terms and a gene's terms.
    ///
    /// Non-negative; 0.0 when either set is empty.
    fn similarity(
        &self,
        patient: &TermSet,
        gene: &TermSet,
    ) -> ScoreType;
}

/// Ontology plus gene annotations, with precomputed information content.
///
/// The information content of a term is `-ln(p)` where `p` is the fraction
/// of annotated genes carrying the term or one of its descendants. Term
/// similarity is the information content of the most informative common
/// ancestor; a patient-to-gene similarity sums, over the patient's terms,
/// the best match among the gene's terms.
#[derive(Debug, Clone)]
pub struct PhenotypeData {
    ontology:            Ontology,
    gene_terms:          IndexMap<NameStr, TermSet>,
    ancestors:           HashMap<TermId, HashSet<TermId>>,
    information_content: HashMap<TermId, ScoreType>,
}

impl PhenotypeData {
    pub fn new(
        ontology: Ontology,
        gene_terms: IndexMap<NameStr, TermSet>,
    ) -> Self {
        let ancestors = ontology
            .terms()
            .map(|t| (t.id().clone(), ontology.ancestors(t.id().as_str())))
            .collect::<HashMap<_, _>>();

        let mut counts: HashMap<TermId, usize> = HashMap::new();
        for terms in gene_terms.values() {
            let induced = terms
                .iter()
                .filter_map(|t| ancestors.get(t))
                .flatten()
                .collect::<HashSet<_>>();
            for term in induced {
                *counts.entry(term.clone()).or_default() += 1;
            }
        }

        let n_genes = gene_terms.len() as ScoreType;
        let information_content = counts
            .into_iter()
            .map(|(term, count)| (term, (n_genes / count as ScoreType).ln()))
            .collect();

        info!(
            "Loaded phenotype annotations for {} genes over {} terms",
            gene_terms.len(),
            ontology.len()
        );

        Self {
            ontology,
            gene_terms,
            ancestors,
            information_content,
        }
    }

    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    pub fn n_annotated_genes(&self) -> usize {
        self.gene_terms.len()
    }

    pub fn gene_phenotypes(
        &self,
        gene_id: &str,
    ) -> Option<&TermSet> {
        self.gene_terms.get(gene_id)
    }

    /// Zero for terms no annotated gene carries.
    pub fn information_content(
        &self,
        term: &str,
    ) -> ScoreType {
        self.information_content.get(term).copied().unwrap_or(0.0)
    }

    /// Information content of the most informative common ancestor.
    pub fn term_similarity(
        &self,
        a: &str,
        b: &str,
    ) -> ScoreType {
        let (Some(anc_a), Some(anc_b)) = (self.ancestors.get(a), self.ancestors.get(b))
        else {
            return 0.0;
        };
        anc_a
            .intersection(anc_b)
            .map(|t| self.information_content(t.as_str()))
            .fold(0.0, ScoreType::max)
    }

    /// Annotated genes carrying `term` or one of its descendants.
    pub fn genes_for_term(
        &self,
        term: &str,
    ) -> HashSet<NameStr> {
        self.gene_terms
            .iter()
            .filter(|(_, terms)| {
                terms.iter().any(|t| {
                    self.ancestors
                        .get(t)
                        .is_some_and(|anc| anc.contains(term))
                })
            })
            .map(|(gene, _)| gene.clone())
            .collect()
    }
}

impl PhenotypeOntology for PhenotypeData {
    fn resolve(
        &self,
        id: &str,
    ) -> Option<TermId> {
        self.ontology.resolve(id)
    }

    fn similarity(
        &self,
        patient: &TermSet,
        gene: &TermSet,
    ) -> ScoreType {
        patient
            .iter()
            .map(|p| {
                gene.iter()
                    .map(|g| self.term_similarity(p.as_str(), g.as_str()))
                    .fold(0.0, ScoreType::max)
            })
            .sum()
    }
}
