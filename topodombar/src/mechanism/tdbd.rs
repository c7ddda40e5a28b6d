use hashbrown::HashSet;

use super::effect::TdbdClass;
use crate::annotation::{
    GeneAnnotation,
    PhenogramScores,
};
use crate::data_structs::typedef::NameStr;

/// Target-gene based TDBD classification.
///
/// An adjacent target gene only counts when the CNV disrupts a boundary.
pub fn classify_tdbd(
    boundaries: &[NameStr],
    genes: &GeneAnnotation,
    targets: &HashSet<NameStr>,
) -> TdbdClass {
    let overlap_target = genes.overlapped.iter().any(|g| targets.contains(g));
    let adjacent_target =
        !boundaries.is_empty() && genes.adjacent().any(|g| targets.contains(g));

    match (adjacent_target, overlap_target) {
        (true, false) => TdbdClass::Tdbd,
        (true, true) => TdbdClass::Mixed,
        (false, true) => TdbdClass::Gde,
        (false, false) => TdbdClass::NoData,
    }
}

/// Score-based TDBD classification.
///
/// The adjacent score (the better side) is only used when the CNV disrupts a
/// boundary; it is then compared with the overlap score.
pub fn classify_tdbd_by_score(
    boundaries: &[NameStr],
    scores: &PhenogramScores,
) -> TdbdClass {
    let adjacent = if boundaries.is_empty() {
        0.0
    }
    else {
        scores.adjacent()
    };
    let overlap = scores.overlap;

    if adjacent > overlap {
        TdbdClass::Tdbd
    }
    else if adjacent > 0.0 && adjacent == overlap {
        TdbdClass::Mixed
    }
    else if overlap > 0.0 {
        TdbdClass::Gde
    }
    else {
        TdbdClass::NoData
    }
}
