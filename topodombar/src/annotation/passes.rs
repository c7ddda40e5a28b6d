//! Collection-level annotation passes.
//!
//! Each pass updates one part of every [`AnnotatedCnv`] in place and reads
//! the prerequisites it needs from earlier passes (adjacent regions for the
//! adjacent gene and enhancer passes, gene sets for the scoring passes).
//! Missing prerequisites read as empty.

use log::debug;

use super::domains::Domains;
use super::overlap::{
    annotate_enhancers,
    annotate_genes,
    elements_in,
    overlapped_boundaries,
};
use super::record::AnnotatedCnv;
use super::regions::{
    adjacent_regions_by_distance,
    adjacent_regions_by_domains,
    overlapped_domain_regions,
};
use super::scoring::{
    adjacent_scores,
    overlap_score,
};
use crate::data_structs::coords::{
    IndexedSet,
    Region,
};
use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    Gene,
    GenomicSet,
};
use crate::phenotype::PhenotypeOntology;

type Cnvs = GenomicSet<AnnotatedCnv>;

/// Records the boundaries lying fully inside each CNV.
pub fn boundary_overlap(
    cnvs: &mut Cnvs,
    boundaries: &IndexedSet<Region>,
) {
    for cnv in cnvs.iter_mut() {
        cnv.boundaries = overlapped_boundaries(&*cnv, boundaries);
    }
    debug!(
        "{} of {} CNVs overlap a boundary",
        cnvs.iter().filter(|c| c.has_boundary_overlap()).count(),
        cnvs.len()
    );
}

pub fn define_adjacent_regions_by_domains(
    cnvs: &mut Cnvs,
    domains: &Domains,
) {
    for cnv in cnvs.iter_mut() {
        cnv.adjacent = adjacent_regions_by_domains(&*cnv, domains);
    }
}

pub fn define_adjacent_regions_by_distance(
    cnvs: &mut Cnvs,
    size: PosType,
) {
    for cnv in cnvs.iter_mut() {
        cnv.adjacent = adjacent_regions_by_distance(&*cnv, size);
    }
}

pub fn define_overlapped_domain_regions(
    cnvs: &mut Cnvs,
    domains: &Domains,
) {
    for cnv in cnvs.iter_mut() {
        cnv.overlapped_domains = overlapped_domain_regions(&*cnv, domains);
    }
}

pub fn annotate_overlapped_genes(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
) {
    for cnv in cnvs.iter_mut() {
        cnv.genes.overlapped = genes.overlapping_names(&*cnv);
    }
}

/// Requires adjacent regions.
pub fn annotate_adjacent_genes(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
) {
    for cnv in cnvs.iter_mut() {
        cnv.genes.left_adjacent = elements_in(cnv.adjacent.left.as_ref(), genes);
        cnv.genes.right_adjacent = elements_in(cnv.adjacent.right.as_ref(), genes);
    }
}

/// Requires adjacent regions.
pub fn annotate_adjacent_enhancers(
    cnvs: &mut Cnvs,
    enhancers: &IndexedSet<Region>,
) {
    for cnv in cnvs.iter_mut() {
        cnv.enhancers = annotate_enhancers(&cnv.adjacent, enhancers);
    }
}

/// Requires overlapped genes.
pub fn overlap_phenogram_score<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
    ontology: &O,
) {
    for cnv in cnvs.iter_mut() {
        cnv.scores.overlap =
            overlap_score(cnv.cnv().phenotypes(), &cnv.genes, genes.set(), ontology);
    }
}

/// Requires adjacent genes.
pub fn adjacent_phenogram_score<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
    ontology: &O,
) {
    for cnv in cnvs.iter_mut() {
        let (left, right) =
            adjacent_scores(cnv.cnv().phenotypes(), &cnv.genes, genes.set(), ontology);
        cnv.scores.left_adjacent = left;
        cnv.scores.right_adjacent = right;
    }
}

/// Overlap and adjacent scores. Requires overlapped and adjacent genes.
pub fn phenogram_score<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
    ontology: &O,
) {
    overlap_phenogram_score(cnvs, genes, ontology);
    adjacent_phenogram_score(cnvs, genes, ontology);
}

/// Boundary overlap, overlapped genes and the overlap score.
pub fn annotate_overlap<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    boundaries: &IndexedSet<Region>,
    genes: &IndexedSet<Gene>,
    ontology: &O,
) {
    boundary_overlap(cnvs, boundaries);
    annotate_overlapped_genes(cnvs, genes);
    overlap_phenogram_score(cnvs, genes, ontology);
}

/// Adjacent genes, adjacent enhancers and the adjacent scores. Requires
/// adjacent regions.
pub fn annotate_adjacent_regions<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
    enhancers: &IndexedSet<Region>,
    ontology: &O,
) {
    annotate_adjacent_genes(cnvs, genes);
    annotate_adjacent_enhancers(cnvs, enhancers);
    adjacent_phenogram_score(cnvs, genes, ontology);
}

/// Genes of the CNV and of its adjacent regions in one step.
pub fn annotate_all_genes(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
) {
    for cnv in cnvs.iter_mut() {
        cnv.genes = annotate_genes(&*cnv, &cnv.adjacent, genes);
    }
}
