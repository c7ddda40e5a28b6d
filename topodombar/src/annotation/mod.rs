//! Placement of CNVs relative to domains, boundaries, genes and enhancers,
//! and phenogram scoring of the genes they hit.
//!
//! The building blocks are per-CNV functions taking their prerequisites as
//! arguments ([`adjacent_regions_by_domains`], [`annotate_genes`],
//! [`phenogram_scores`], ...). The [`passes`] module applies them to whole
//! collections, and [`Annotator`] runs everything, including the mechanism
//! classifiers, from an [`AnnotationConfig`].

mod domains;
mod overlap;
pub mod passes;
mod pipeline;
mod record;
mod regions;
mod scoring;

pub use domains::{
    derive_boundaries,
    derive_boundaries_from,
    BoundaryDerivation,
    Domains,
    MAX_BOUNDARY_SIZE,
};
pub use overlap::{
    annotate_enhancers,
    annotate_genes,
    elements_in,
    overlapped_boundaries,
};
pub use pipeline::{
    AnnotationConfig,
    AnnotationInputs,
    Annotator,
    RegionMode,
};
pub use record::{
    AnnotatedCnv,
    EnhancerAnnotation,
    GeneAnnotation,
    PhenogramScores,
};
pub use regions::{
    adjacent_regions_by_distance,
    adjacent_regions_by_domains,
    overlapped_domain_regions,
    AdjacentRegions,
    OverlappedDomains,
    LEFT_ADJACENT,
    LEFT_OVERLAPPED,
    RIGHT_ADJACENT,
    RIGHT_OVERLAPPED,
};
pub use scoring::{
    adjacent_scores,
    gene_set_score,
    overlap_score,
    phenogram_scores,
    region_score,
};
