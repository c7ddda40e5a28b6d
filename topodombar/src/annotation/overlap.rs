use super::record::{
    EnhancerAnnotation,
    GeneAnnotation,
};
use super::regions::AdjacentRegions;
use crate::data_structs::coords::{
    GenomicInterval,
    IndexedSet,
    Region,
};
use crate::data_structs::typedef::NameStr;
use crate::data_structs::Gene;

/// Names of the boundaries lying fully inside `cnv`.
pub fn overlapped_boundaries<C: GenomicInterval + ?Sized>(
    cnv: &C,
    boundaries: &IndexedSet<Region>,
) -> Vec<NameStr> {
    boundaries
        .contained_in(cnv)
        .into_iter()
        .map(|b| b.name().clone())
        .collect()
}

/// Names of the reference elements overlapping `region`; empty when the
/// region is undefined.
pub fn elements_in<T: GenomicInterval>(
    region: Option<&Region>,
    reference: &IndexedSet<T>,
) -> Vec<NameStr> {
    region
        .map(|r| reference.overlapping_names(r))
        .unwrap_or_default()
}

/// Genes overlapping the CNV and each of its adjacent regions.
pub fn annotate_genes<C: GenomicInterval + ?Sized>(
    cnv: &C,
    adjacent: &AdjacentRegions,
    genes: &IndexedSet<Gene>,
) -> GeneAnnotation {
    GeneAnnotation {
        overlapped:     genes.overlapping_names(cnv),
        left_adjacent:  elements_in(adjacent.left.as_ref(), genes),
        right_adjacent: elements_in(adjacent.right.as_ref(), genes),
    }
}

/// Enhancers overlapping each adjacent region.
pub fn annotate_enhancers(
    adjacent: &AdjacentRegions,
    enhancers: &IndexedSet<Region>,
) -> EnhancerAnnotation {
    EnhancerAnnotation {
        left_adjacent:  elements_in(adjacent.left.as_ref(), enhancers),
        right_adjacent: elements_in(adjacent.right.as_ref(), enhancers),
    }
}
