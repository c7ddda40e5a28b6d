//! # topodombar
//!
//! `topodombar` classifies copy-number variants (CNVs) by their likely
//! pathogenic mechanism. A variant is placed relative to topologically
//! associating domains (TADs), the boundaries between them, genes and
//! enhancers, and scored against the patient's phenotype with an
//! ontology-based similarity ("phenogram score").
//!
//! ## Workflow
//!
//! 1. Read domains, genes, enhancers and CNVs with [`io::TabFileParser`].
//! 2. Derive boundaries from the domains
//!    ([`annotation::derive_boundaries`]).
//! 3. Define adjacent and overlapped-domain regions around each CNV and
//!    annotate the genes, enhancers and boundaries they hit
//!    ([`annotation`]).
//! 4. Score the annotated gene sets against the patient phenotype
//!    ([`phenotype::PhenotypeData`]).
//! 5. Run one or more classifiers ([`mechanism`]) and write the results
//!    ([`io::write_cnvs`]).
//!
//! [`annotation::Annotator`] runs steps 2-5 from an
//! [`annotation::AnnotationConfig`].

pub mod annotation;
pub mod data_structs;
pub mod io;
pub mod mechanism;
pub mod phenotype;
pub mod prelude;
pub mod utils;

#[cfg(test)]
pub(crate) mod toy;
