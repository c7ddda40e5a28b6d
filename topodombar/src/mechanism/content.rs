use crate::annotation::{
    region_score,
    AnnotatedCnv,
};
use crate::data_structs::coords::{
    IndexedSet,
    Region,
};
use crate::data_structs::typedef::ScoreType;
use crate::data_structs::Gene;
use crate::phenotype::{
    PhenotypeOntology,
    TermSet,
};

/// What a region holds, as far as enhancer adoption cares.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionContent {
    pub has_enhancer: bool,
    /// Best phenogram score among the genes in the region.
    pub gene_score:   ScoreType,
}

impl RegionContent {
    /// Queries the reference sets; an undefined region is empty.
    pub fn probe<O: PhenotypeOntology + ?Sized>(
        region: Option<&Region>,
        patient: &TermSet,
        genes: &IndexedSet<Gene>,
        enhancers: &IndexedSet<Region>,
        ontology: &O,
    ) -> Self {
        Self {
            has_enhancer: region.is_some_and(|r| !enhancers.overlapping(r).is_empty()),
            gene_score:   region_score(patient, region, genes, ontology),
        }
    }

    pub fn has_relevant_gene(&self) -> bool {
        self.gene_score > 0.0
    }
}

/// Contents of the two sides of a CNV.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlankContent {
    pub left:  RegionContent,
    pub right: RegionContent,
}

impl FlankContent {
    /// Contents of the overlapped-domain regions.
    pub fn overlapped_domains<O: PhenotypeOntology + ?Sized>(
        cnv: &AnnotatedCnv,
        genes: &IndexedSet<Gene>,
        enhancers: &IndexedSet<Region>,
        ontology: &O,
    ) -> Self {
        let patient = cnv.cnv().phenotypes();
        let probe = |region: Option<&Region>| {
            RegionContent::probe(region, patient, genes, enhancers, ontology)
        };
        Self {
            left:  probe(cnv.overlapped_domains.left.as_ref()),
            right: probe(cnv.overlapped_domains.right.as_ref()),
        }
    }

    /// Contents of the adjacent regions, read from the enhancer annotation
    /// and adjacent scores already on the CNV.
    pub fn adjacent(cnv: &AnnotatedCnv) -> Self {
        Self {
            left:  RegionContent {
                has_enhancer: !cnv.enhancers.left_adjacent.is_empty(),
                gene_score:   cnv.scores.left_adjacent,
            },
            right: RegionContent {
                has_enhancer: !cnv.enhancers.right_adjacent.is_empty(),
                gene_score:   cnv.scores.right_adjacent,
            },
        }
    }
}
