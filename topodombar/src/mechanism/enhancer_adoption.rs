use hashbrown::HashSet;

use super::effect::{
    EaClass,
    EaLowGClass,
};
use crate::annotation::{
    EnhancerAnnotation,
    GeneAnnotation,
    PhenogramScores,
};
use crate::data_structs::typedef::{
    NameStr,
    ScoreType,
};

/// Adjacent sides whose target gene faces an enhancer on the other side of
/// a disrupted boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdoptionSides {
    pub left:  bool,
    pub right: bool,
}

impl AdoptionSides {
    pub fn find(
        boundaries: &[NameStr],
        genes: &GeneAnnotation,
        enhancers: &EnhancerAnnotation,
        targets: &HashSet<NameStr>,
    ) -> Self {
        if boundaries.is_empty() {
            return Self::default();
        }
        let has_target = |names: &[NameStr]| names.iter().any(|g| targets.contains(g));
        Self {
            left:  has_target(&genes.left_adjacent) && !enhancers.right_adjacent.is_empty(),
            right: has_target(&genes.right_adjacent) && !enhancers.left_adjacent.is_empty(),
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right
    }

    /// Best adjacent score among the configured sides.
    pub fn best_score(
        &self,
        scores: &PhenogramScores,
    ) -> ScoreType {
        let left = if self.left { scores.left_adjacent } else { 0.0 };
        let right = if self.right { scores.right_adjacent } else { 0.0 };
        left.max(right)
    }
}

pub fn classify_ea(
    boundaries: &[NameStr],
    genes: &GeneAnnotation,
    enhancers: &EnhancerAnnotation,
    targets: &HashSet<NameStr>,
) -> EaClass {
    let sides = AdoptionSides::find(boundaries, genes, enhancers, targets);
    let overlap_target = genes.overlapped.iter().any(|g| targets.contains(g));

    match (sides.any(), overlap_target) {
        (true, false) => EaClass::Ea,
        (true, true) => EaClass::EaGde,
        (false, true) => EaClass::OnlyGde,
        (false, false) => EaClass::NoData,
    }
}

/// Enhancer adoption where the overlapped genes explain the phenotype worse
/// than the adopting gene.
pub fn classify_ea_low_g(
    boundaries: &[NameStr],
    genes: &GeneAnnotation,
    enhancers: &EnhancerAnnotation,
    scores: &PhenogramScores,
    targets: &HashSet<NameStr>,
) -> EaLowGClass {
    let sides = AdoptionSides::find(boundaries, genes, enhancers, targets);

    if sides.any() {
        if scores.overlap < sides.best_score(scores) {
            EaLowGClass::EaLowG
        }
        else {
            EaLowGClass::EaGde
        }
    }
    else if scores.overlap > 0.0 {
        EaLowGClass::OnlyGde
    }
    else {
        EaLowGClass::NoData
    }
}
