//! Small hand-made data set shared by the unit tests.
//!
//! Everything lies on `chr1`:
//!
//! ```text
//! pos        0    5    10   15   20   25   30   35   40   45   50   55   60
//! domains    [d1--------)  [d2-----------------------)  [d3------------------)
//! boundaries             b_1                          b_2
//! genes               B     D         A                        C
//! enhancers     e_1                        e_2            e_3
//! ```
//!
//! The ontology is a two-level tree under `EP:01`:
//! `EP:02 -> {EP:03, EP:04}` and `EP:05 -> {EP:06, EP:07, EP:08}`. Eight
//! genes are annotated, four of which (A-D) are placed on the genome.
//! Patients carry `{EP:03, EP:06}`, which scores gene A at
//! `ln 4 + ln(8/6)` and genes B, C, D at `ln(8/6)`.

use indexmap::IndexMap;

use crate::annotation::AnnotatedCnv;
use crate::data_structs::coords::{
    GenomicInterval,
    IndexedSet,
    Region,
};
use crate::data_structs::typedef::NameStr;
use crate::data_structs::{
    Cnv,
    Gene,
    GenomicSet,
    Strand,
};
use crate::phenotype::{
    Ontology,
    PhenotypeData,
    TargetGenes,
    Term,
    TermId,
    TermSet,
};

pub const TARGET_TERM: &str = "EP:03";

pub fn region(
    start: u32,
    end: u32,
    name: &str,
) -> Region {
    Region::new("chr1".into(), start, end, name.into())
}

pub fn terms(ids: &[&str]) -> TermSet {
    ids.iter().map(|id| TermId::from(*id)).collect()
}

pub fn ontology() -> Ontology {
    let term = |id: &str, parents: &[&str]| {
        Term::new(id.into(), format!("term {id}").into())
            .with_parents(parents.iter().map(|p| TermId::from(*p)).collect())
    };
    Ontology::from_iter([
        term("EP:01", &[]),
        term("EP:02", &["EP:01"]),
        term("EP:03", &["EP:02"]),
        term("EP:04", &["EP:02"]),
        term("EP:05", &["EP:01"]),
        term("EP:06", &["EP:05"]),
        term("EP:07", &["EP:05"]),
        term("EP:08", &["EP:05"]),
    ])
}

pub fn gene_annotations() -> IndexMap<NameStr, TermSet> {
    [
        ("geneA", terms(&["EP:03", "EP:07"])),
        ("geneB", terms(&["EP:04"])),
        ("geneC", terms(&["EP:08"])),
        ("geneD", terms(&["EP:04"])),
        ("geneE", terms(&["EP:03", "EP:08"])),
        ("geneF", terms(&["EP:04", "EP:08"])),
        ("geneG", terms(&["EP:04", "EP:08"])),
        ("geneH", terms(&["EP:08"])),
    ]
    .into_iter()
    .map(|(gene, terms)| (NameStr::from(gene), terms))
    .collect()
}

pub fn phenotype_data() -> PhenotypeData {
    PhenotypeData::new(ontology(), gene_annotations())
}

pub fn patient_terms() -> TermSet {
    terms(&["EP:03", "EP:06"])
}

pub fn target_genes(data: &PhenotypeData) -> TargetGenes {
    TargetGenes::from_annotations(data, [&TermId::from(TARGET_TERM)])
}

pub fn genes(data: &PhenotypeData) -> IndexedSet<Gene> {
    [
        region(25, 28, "geneA"),
        region(10, 11, "geneB"),
        region(50, 55, "geneC"),
        region(16, 18, "geneD"),
    ]
    .into_iter()
    .map(|r| {
        let phenotypes = data.gene_phenotypes(r.name()).cloned().unwrap_or_default();
        let symbol = r.name().clone();
        Gene::new(r, Strand::Forward, symbol).with_phenotypes(phenotypes)
    })
    .collect::<GenomicSet<_>>()
    .into()
}

pub fn enhancers() -> IndexedSet<Region> {
    GenomicSet::from_iter([
        region(6, 8, "e_1"),
        region(30, 32, "e_2"),
        region(41, 43, "e_3"),
    ])
    .into()
}

pub fn domains() -> GenomicSet<Region> {
    GenomicSet::from_iter([
        region(0, 12, "d1"),
        region(15, 37, "d2"),
        region(40, 60, "d3"),
    ])
}

fn cnv(
    start: u32,
    end: u32,
    name: &str,
    kind: &str,
    target: &str,
) -> AnnotatedCnv {
    Cnv::new(region(start, end, name), kind)
        .with_phenotypes(patient_terms())
        .with_target_term(Some(target.into()))
        .into()
}

/// Deletions `cnv1`-`cnv4`.
pub fn cnvs() -> GenomicSet<AnnotatedCnv> {
    GenomicSet::from_iter([
        cnv(9, 19, "cnv1", "DEL", TARGET_TERM),
        cnv(8, 33, "cnv2", "DEL", TARGET_TERM),
        cnv(12, 19, "cnv3", "DEL", TARGET_TERM),
        cnv(14, 16, "cnv4", "DEL", "EP:06"),
    ])
}

pub fn duplications() -> GenomicSet<AnnotatedCnv> {
    GenomicSet::from_iter([
        cnv(5, 20, "dup1", "DUP", TARGET_TERM),
        cnv(20, 30, "dup2", "DUP", TARGET_TERM),
    ])
}

pub fn inversions() -> GenomicSet<AnnotatedCnv> {
    GenomicSet::from_iter([
        cnv(33, 45, "inv1", "INV", TARGET_TERM),
        cnv(11, 17, "inv2", "INV", TARGET_TERM),
        cnv(36, 41, "inv3", "INV", TARGET_TERM),
    ])
}
