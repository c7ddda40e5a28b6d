use super::regions::{
    AdjacentRegions,
    OverlappedDomains,
};
use crate::data_structs::coords::GenomicInterval;
use crate::data_structs::typedef::{
    NameStr,
    PosType,
    ScoreType,
};
use crate::data_structs::Cnv;
use crate::mechanism::EffectMechanisms;

/// Genes hit by a CNV and by its adjacent regions, in reference-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneAnnotation {
    pub overlapped:     Vec<NameStr>,
    pub left_adjacent:  Vec<NameStr>,
    pub right_adjacent: Vec<NameStr>,
}

impl GeneAnnotation {
    /// Genes of both adjacent regions.
    pub fn adjacent(&self) -> impl Iterator<Item = &NameStr> {
        self.left_adjacent.iter().chain(self.right_adjacent.iter())
    }
}

/// Enhancers in the adjacent regions of a CNV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnhancerAnnotation {
    pub left_adjacent:  Vec<NameStr>,
    pub right_adjacent: Vec<NameStr>,
}

/// Phenogram scores of the overlapped and adjacent gene sets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhenogramScores {
    pub overlap:        ScoreType,
    pub left_adjacent:  ScoreType,
    pub right_adjacent: ScoreType,
}

impl PhenogramScores {
    pub fn adjacent(&self) -> ScoreType {
        self.left_adjacent.max(self.right_adjacent)
    }
}

/// A CNV together with everything derived for it by the annotation passes.
///
/// Fields start empty (scores at 0.0) and are filled by the passes in
/// [`crate::annotation`] and [`crate::mechanism`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedCnv {
    cnv: Cnv,
    /// Boundaries lying fully inside the CNV.
    pub boundaries: Vec<NameStr>,
    pub adjacent: AdjacentRegions,
    pub overlapped_domains: OverlappedDomains,
    pub genes: GeneAnnotation,
    pub enhancers: EnhancerAnnotation,
    pub scores: PhenogramScores,
    pub effects: EffectMechanisms,
}

impl From<Cnv> for AnnotatedCnv {
    fn from(cnv: Cnv) -> Self {
        Self::new(cnv)
    }
}

impl AnnotatedCnv {
    pub fn new(cnv: Cnv) -> Self {
        Self {
            cnv,
            boundaries: Vec::new(),
            adjacent: AdjacentRegions::default(),
            overlapped_domains: OverlappedDomains::default(),
            genes: GeneAnnotation::default(),
            enhancers: EnhancerAnnotation::default(),
            scores: PhenogramScores::default(),
            effects: EffectMechanisms::default(),
        }
    }

    pub fn cnv(&self) -> &Cnv {
        &self.cnv
    }

    pub fn has_boundary_overlap(&self) -> bool {
        !self.boundaries.is_empty()
    }
}

impl GenomicInterval for AnnotatedCnv {
    fn chr(&self) -> &NameStr {
        self.cnv.chr()
    }

    fn start(&self) -> PosType {
        self.cnv.start()
    }

    fn end(&self) -> PosType {
        self.cnv.end()
    }

    fn name(&self) -> &NameStr {
        self.cnv.name()
    }
}
