//! Pathogenic-mechanism classifiers.
//!
//! Each classifier is a pure function over the annotation it needs
//! ([`classify_tdbd`], [`classify_ea`], ...) producing a typed label. The
//! collection-level passes below run a classifier over every CNV and store
//! the result under its [`Mechanism`] key in [`AnnotatedCnv::effects`],
//! replacing only that key.
//!
//! | key        | labels                                   |
//! |------------|------------------------------------------|
//! | `TDBD`     | `TDBD`, `Mixed`, `GDE`, `NoData`         |
//! | `newTDBD`  | `TDBD`, `Mixed`, `GDE`, `NoData`         |
//! | `EA`       | `EA`, `EA+GDE`, `onlyGDE`, `NoData`      |
//! | `EAlowG`   | `EAlowG`, `EA+GDE`, `onlyGDE`, `NoData`  |
//! | `TanDupEA` | `TanDupEA`, `onlyGDE`, `NoData`, `NA`    |
//! | `InvEA`    | `EnhancerInvEA`, `GeneInvEA`, `noInvEA`, `NA` |

mod content;
mod effect;
mod enhancer_adoption;
mod inversion;
mod tandem_duplication;
mod tdbd;

pub use content::{
    FlankContent,
    RegionContent,
};
pub use effect::{
    EaClass,
    EaLowGClass,
    Effect,
    EffectMechanisms,
    InvEaClass,
    Mechanism,
    TanDupEaClass,
    TdbdClass,
};
pub use enhancer_adoption::{
    classify_ea,
    classify_ea_low_g,
    AdoptionSides,
};
pub use inversion::classify_inversion;
pub use tandem_duplication::classify_tandem_duplication;
pub use tdbd::{
    classify_tdbd,
    classify_tdbd_by_score,
};

use indexmap::IndexMap;
use log::debug;

use crate::annotation::AnnotatedCnv;
use crate::data_structs::coords::{
    IndexedSet,
    Region,
};
use crate::data_structs::{
    Gene,
    GenomicSet,
};
use crate::phenotype::{
    PhenotypeOntology,
    TargetGenes,
};

type Cnvs = GenomicSet<AnnotatedCnv>;

fn log_counts(
    cnvs: &Cnvs,
    mechanism: Mechanism,
) {
    let counts = cnvs
        .iter()
        .filter_map(|c| c.effects.label(mechanism))
        .fold(IndexMap::<&str, usize>::new(), |mut acc, label| {
            *acc.entry(label).or_default() += 1;
            acc
        });
    debug!("{mechanism}: {counts:?}");
}

/// Requires boundary overlap, overlapped and adjacent genes.
pub fn annotate_tdbd(
    cnvs: &mut Cnvs,
    targets: &TargetGenes,
) {
    for cnv in cnvs.iter_mut() {
        let class = classify_tdbd(
            &cnv.boundaries,
            &cnv.genes,
            targets.targets_for(cnv.cnv().target_term()),
        );
        cnv.effects.set(Effect::Tdbd(class));
    }
    log_counts(cnvs, Mechanism::Tdbd);
}

/// Requires boundary overlap and phenogram scores.
pub fn annotate_tdbd_by_score(cnvs: &mut Cnvs) {
    for cnv in cnvs.iter_mut() {
        let class = classify_tdbd_by_score(&cnv.boundaries, &cnv.scores);
        cnv.effects.set(Effect::NewTdbd(class));
    }
    log_counts(cnvs, Mechanism::NewTdbd);
}

/// Requires boundary overlap, genes and adjacent enhancers.
pub fn annotate_enhancer_adoption(
    cnvs: &mut Cnvs,
    targets: &TargetGenes,
) {
    for cnv in cnvs.iter_mut() {
        let class = classify_ea(
            &cnv.boundaries,
            &cnv.genes,
            &cnv.enhancers,
            targets.targets_for(cnv.cnv().target_term()),
        );
        cnv.effects.set(Effect::Ea(class));
    }
    log_counts(cnvs, Mechanism::Ea);
}

/// Requires boundary overlap, genes, adjacent enhancers and phenogram
/// scores.
pub fn annotate_enhancer_adoption_low_g(
    cnvs: &mut Cnvs,
    targets: &TargetGenes,
) {
    for cnv in cnvs.iter_mut() {
        let class = classify_ea_low_g(
            &cnv.boundaries,
            &cnv.genes,
            &cnv.enhancers,
            &cnv.scores,
            targets.targets_for(cnv.cnv().target_term()),
        );
        cnv.effects.set(Effect::EaLowG(class));
    }
    log_counts(cnvs, Mechanism::EaLowG);
}

/// Requires boundary overlap, overlapped-domain regions and the overlap
/// score.
pub fn annotate_tandem_duplication_ea<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
    enhancers: &IndexedSet<Region>,
    ontology: &O,
) {
    for cnv in cnvs.iter_mut() {
        let overlapped = if cnv.overlapped_domains.both().is_some() {
            Some(FlankContent::overlapped_domains(
                cnv, genes, enhancers, ontology,
            ))
        }
        else {
            None
        };
        let class = classify_tandem_duplication(
            cnv.cnv().variant(),
            &cnv.boundaries,
            overlapped.as_ref(),
            cnv.scores.overlap,
        );
        cnv.effects.set(Effect::TanDupEa(class));
    }
    log_counts(cnvs, Mechanism::TanDupEa);
}

/// Requires boundary overlap, adjacent and overlapped-domain regions,
/// adjacent enhancers and adjacent scores.
pub fn annotate_inversion_ea<O: PhenotypeOntology + ?Sized>(
    cnvs: &mut Cnvs,
    genes: &IndexedSet<Gene>,
    enhancers: &IndexedSet<Region>,
    ontology: &O,
) {
    for cnv in cnvs.iter_mut() {
        let overlapped = FlankContent::overlapped_domains(cnv, genes, enhancers, ontology);
        let adjacent = FlankContent::adjacent(cnv);
        let class = classify_inversion(
            cnv.cnv().variant(),
            &cnv.boundaries,
            &overlapped,
            &adjacent,
        );
        cnv.effects.set(Effect::InvEa(class));
    }
    log_counts(cnvs, Mechanism::InvEa);
}
