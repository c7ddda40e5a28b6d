use anyhow::bail;
use hashbrown::HashMap;
use indexmap::IndexMap;
use log::{
    debug,
    info,
};

use super::domains::{
    derive_boundaries,
    Domains,
    MAX_BOUNDARY_SIZE,
};
use super::overlap::{
    annotate_enhancers,
    annotate_genes,
    overlapped_boundaries,
};
use super::record::AnnotatedCnv;
use super::regions::{
    adjacent_regions_by_distance,
    adjacent_regions_by_domains,
    overlapped_domain_regions,
};
use super::scoring::phenogram_scores;
use crate::data_structs::coords::{
    IndexedSet,
    Region,
};
use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    Gene,
    GenomicSet,
};
use crate::mechanism::{
    classify_ea,
    classify_ea_low_g,
    classify_inversion,
    classify_tandem_duplication,
    classify_tdbd,
    classify_tdbd_by_score,
    Effect,
    FlankContent,
    Mechanism,
};
use crate::phenotype::{
    PhenotypeOntology,
    TargetGenes,
    TermId,
};
use crate::{
    getter_fn,
    with_field_fn,
};

/// How adjacent regions are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionMode {
    /// Up to the ends of the neighbouring domains.
    #[default]
    Domains,
    /// A fixed distance on each side.
    Distance,
}

/// Settings of an [`Annotator`] run.
#[derive(Debug, Clone)]
pub struct AnnotationConfig {
    region_mode:       RegionMode,
    region_size:       PosType,
    max_boundary_size: PosType,
    mechanisms:        Vec<Mechanism>,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            region_mode:       RegionMode::Domains,
            region_size:       1_000_000,
            max_boundary_size: MAX_BOUNDARY_SIZE,
            mechanisms:        Mechanism::ALL.to_vec(),
        }
    }
}

impl AnnotationConfig {
    getter_fn!(region_mode, RegionMode);
    getter_fn!(region_size, PosType);
    getter_fn!(max_boundary_size, PosType);
    getter_fn!(mechanisms, Vec<Mechanism>);

    with_field_fn!(region_mode, RegionMode);
    with_field_fn!(region_size, PosType);
    with_field_fn!(max_boundary_size, PosType);
    with_field_fn!(mechanisms, Vec<Mechanism>);

    /// Selected mechanisms, deduplicated, in output order.
    pub fn sorted_mechanisms(&self) -> Vec<Mechanism> {
        let mut res = self.mechanisms.clone();
        res.sort();
        res.dedup();
        res
    }
}

/// Reference data an [`Annotator`] is built from.
#[derive(Debug, Clone, Default)]
pub struct AnnotationInputs {
    pub domains:        GenomicSet<Region>,
    /// Boundaries read from a file; derived from `domains` when absent.
    pub boundaries:     Option<GenomicSet<Region>>,
    pub genes:          GenomicSet<Gene>,
    /// Enhancers used for CNVs without a term-specific set.
    pub enhancers:      GenomicSet<Region>,
    /// Enhancers specific to a target term (e.g. tissue-specific sets).
    pub term_enhancers: IndexMap<TermId, GenomicSet<Region>>,
    pub target_genes:   Option<TargetGenes>,
}

/// Runs the whole annotation and classification for single CNVs or whole
/// collections.
pub struct Annotator<'a, O: PhenotypeOntology + ?Sized> {
    config:         AnnotationConfig,
    mechanisms:     Vec<Mechanism>,
    domains:        Domains,
    boundaries:     IndexedSet<Region>,
    genes:          IndexedSet<Gene>,
    enhancers:      IndexedSet<Region>,
    term_enhancers: HashMap<TermId, IndexedSet<Region>>,
    target_genes:   TargetGenes,
    ontology:       &'a O,
}

impl<'a, O: PhenotypeOntology + ?Sized> Annotator<'a, O> {
    /// Indexes the reference data.
    ///
    /// Fails when a selected mechanism needs target genes and none are
    /// given.
    pub fn new(
        config: AnnotationConfig,
        inputs: AnnotationInputs,
        ontology: &'a O,
    ) -> anyhow::Result<Self> {
        let mechanisms = config.sorted_mechanisms();
        if inputs.target_genes.is_none() {
            if let Some(m) = mechanisms.iter().find(|m| m.needs_target_genes()) {
                bail!("Mechanism {m} requires target genes, but none were provided");
            }
        }

        let domains = Domains::new(&inputs.domains);
        let boundaries = match inputs.boundaries {
            Some(boundaries) => boundaries,
            None => {
                let derived = derive_boundaries(&domains, config.max_boundary_size);
                info!(
                    "Derived {} boundaries from {} domains",
                    derived.boundaries.len(),
                    domains.len()
                );
                derived.boundaries
            },
        };

        let term_enhancers = inputs
            .term_enhancers
            .into_iter()
            .map(|(term, set)| (term, IndexedSet::from(set)))
            .collect::<HashMap<_, _>>();
        debug!(
            "Annotator ready: {} genes, {} enhancers, {} term-specific enhancer sets",
            inputs.genes.len(),
            inputs.enhancers.len(),
            term_enhancers.len()
        );

        Ok(Self {
            config,
            mechanisms,
            domains,
            boundaries: boundaries.into(),
            genes: inputs.genes.into(),
            enhancers: inputs.enhancers.into(),
            term_enhancers,
            target_genes: inputs.target_genes.unwrap_or_default(),
            ontology,
        })
    }

    pub fn config(&self) -> &AnnotationConfig {
        &self.config
    }

    /// Mechanisms run by [`Annotator::annotate`], in output order.
    pub fn mechanisms(&self) -> &[Mechanism] {
        &self.mechanisms
    }

    pub fn boundaries(&self) -> &GenomicSet<Region> {
        self.boundaries.set()
    }

    /// The enhancer set used for CNVs with the given target term.
    pub fn enhancers_for(
        &self,
        term: Option<&TermId>,
    ) -> &IndexedSet<Region> {
        term.and_then(|t| self.term_enhancers.get(t))
            .unwrap_or(&self.enhancers)
    }

    /// Annotates and classifies one CNV, replacing any earlier results.
    pub fn annotate(
        &self,
        cnv: &mut AnnotatedCnv,
    ) {
        let enhancers = self.enhancers_for(cnv.cnv().target_term());

        cnv.boundaries = overlapped_boundaries(&*cnv, &self.boundaries);
        cnv.adjacent = match self.config.region_mode {
            RegionMode::Domains => adjacent_regions_by_domains(&*cnv, &self.domains),
            RegionMode::Distance => {
                adjacent_regions_by_distance(&*cnv, self.config.region_size)
            },
        };
        cnv.overlapped_domains = overlapped_domain_regions(&*cnv, &self.domains);
        cnv.genes = annotate_genes(&*cnv, &cnv.adjacent, &self.genes);
        cnv.enhancers = annotate_enhancers(&cnv.adjacent, enhancers);
        cnv.scores = phenogram_scores(
            cnv.cnv().phenotypes(),
            &cnv.genes,
            self.genes.set(),
            self.ontology,
        );

        for mechanism in self.mechanisms.iter() {
            let effect = self.classify(cnv, *mechanism, enhancers);
            cnv.effects.set(effect);
        }
    }

    /// Annotates every CNV of the collection.
    pub fn run(
        &self,
        cnvs: &mut GenomicSet<AnnotatedCnv>,
    ) {
        for cnv in cnvs.iter_mut() {
            self.annotate(cnv);
        }
        info!("Annotated {} CNVs", cnvs.len());
    }

    fn classify(
        &self,
        cnv: &AnnotatedCnv,
        mechanism: Mechanism,
        enhancers: &IndexedSet<Region>,
    ) -> Effect {
        let targets = self.target_genes.targets_for(cnv.cnv().target_term());

        match mechanism {
            Mechanism::Tdbd => {
                Effect::Tdbd(classify_tdbd(&cnv.boundaries, &cnv.genes, targets))
            },
            Mechanism::NewTdbd => {
                Effect::NewTdbd(classify_tdbd_by_score(&cnv.boundaries, &cnv.scores))
            },
            Mechanism::Ea => {
                Effect::Ea(classify_ea(
                    &cnv.boundaries,
                    &cnv.genes,
                    &cnv.enhancers,
                    targets,
                ))
            },
            Mechanism::EaLowG => {
                Effect::EaLowG(classify_ea_low_g(
                    &cnv.boundaries,
                    &cnv.genes,
                    &cnv.enhancers,
                    &cnv.scores,
                    targets,
                ))
            },
            Mechanism::TanDupEa => {
                let overlapped = cnv.overlapped_domains.both().map(|_| {
                    FlankContent::overlapped_domains(
                        cnv,
                        &self.genes,
                        enhancers,
                        self.ontology,
                    )
                });
                Effect::TanDupEa(classify_tandem_duplication(
                    cnv.cnv().variant(),
                    &cnv.boundaries,
                    overlapped.as_ref(),
                    cnv.scores.overlap,
                ))
            },
            Mechanism::InvEa => {
                let overlapped = FlankContent::overlapped_domains(
                    cnv,
                    &self.genes,
                    enhancers,
                    self.ontology,
                );
                Effect::InvEa(classify_inversion(
                    cnv.cnv().variant(),
                    &cnv.boundaries,
                    &overlapped,
                    &FlankContent::adjacent(cnv),
                ))
            },
        }
    }
}
