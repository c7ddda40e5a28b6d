//! Phenotype ontology and phenogram similarity.
//!
//! [`Ontology`] holds the term graph (usually read from an OBO file with
//! [`read_obo`](crate::io::read_obo)); [`PhenotypeData`] adds the gene
//! annotations and implements [`PhenotypeOntology`], the similarity service
//! the scoring passes use. [`TargetGenes`] maps target terms to the genes
//! associated with them.

mod ontology;
mod phenodata;
mod target;
mod term;

pub use ontology::Ontology;
pub use phenodata::{
    PhenotypeData,
    PhenotypeOntology,
};
pub use target::TargetGenes;
pub use term::{
    Term,
    TermId,
    TermSet,
};

#[cfg(test)]
mod tests;
