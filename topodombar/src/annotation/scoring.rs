use super::record::{
    GeneAnnotation,
    PhenogramScores,
};
use crate::data_structs::coords::{
    IndexedSet,
    Region,
};
use crate::data_structs::typedef::{
    NameStr,
    ScoreType,
};
use crate::data_structs::{
    Gene,
    GenomicSet,
};
use crate::phenotype::{
    PhenotypeOntology,
    TermSet,
};

/// Phenogram score of a gene set: the best similarity between the patient
/// terms and any gene's terms. 0.0 for an empty set.
///
/// Names missing from `genes` are skipped.
pub fn gene_set_score<'a, O: PhenotypeOntology + ?Sized>(
    patient: &TermSet,
    names: impl IntoIterator<Item = &'a NameStr>,
    genes: &GenomicSet<Gene>,
    ontology: &O,
) -> ScoreType {
    names
        .into_iter()
        .filter_map(|name| genes.get(name))
        .map(|gene| ontology.similarity(patient, gene.phenotypes()))
        .fold(0.0, ScoreType::max)
}

/// Phenogram score of the genes overlapping `region`; 0.0 when the region is
/// undefined.
pub fn region_score<O: PhenotypeOntology + ?Sized>(
    patient: &TermSet,
    region: Option<&Region>,
    genes: &IndexedSet<Gene>,
    ontology: &O,
) -> ScoreType {
    region
        .map(|r| {
            genes
                .overlapping(r)
                .into_iter()
                .map(|gene| ontology.similarity(patient, gene.phenotypes()))
                .fold(0.0, ScoreType::max)
        })
        .unwrap_or(0.0)
}

/// Score of the overlapped genes only.
pub fn overlap_score<O: PhenotypeOntology + ?Sized>(
    patient: &TermSet,
    annotation: &GeneAnnotation,
    genes: &GenomicSet<Gene>,
    ontology: &O,
) -> ScoreType {
    gene_set_score(patient, &annotation.overlapped, genes, ontology)
}

/// Scores of the left and right adjacent genes.
pub fn adjacent_scores<O: PhenotypeOntology + ?Sized>(
    patient: &TermSet,
    annotation: &GeneAnnotation,
    genes: &GenomicSet<Gene>,
    ontology: &O,
) -> (ScoreType, ScoreType) {
    (
        gene_set_score(patient, &annotation.left_adjacent, genes, ontology),
        gene_set_score(patient, &annotation.right_adjacent, genes, ontology),
    )
}

/// All three scores of a CNV.
pub fn phenogram_scores<O: PhenotypeOntology + ?Sized>(
    patient: &TermSet,
    annotation: &GeneAnnotation,
    genes: &GenomicSet<Gene>,
    ontology: &O,
) -> PhenogramScores {
    let (left_adjacent, right_adjacent) =
        adjacent_scores(patient, annotation, genes, ontology);
    PhenogramScores {
        overlap: overlap_score(patient, annotation, genes, ontology),
        left_adjacent,
        right_adjacent,
    }
}
