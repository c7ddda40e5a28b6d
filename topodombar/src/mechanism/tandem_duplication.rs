use super::content::FlankContent;
use super::effect::TanDupEaClass;
use crate::data_structs::typedef::{
    NameStr,
    ScoreType,
};
use crate::data_structs::VariantType;

/// Enhancer adoption by tandem duplication.
///
/// `overlapped` holds the contents of both overlapped-domain regions, or
/// `None` when the CNV lacks one of them. A duplication spanning a boundary
/// with an enhancer in one of these regions and a phenotype-relevant gene
/// in the other can bring the two together in the duplicated copy.
pub fn classify_tandem_duplication(
    variant: VariantType,
    boundaries: &[NameStr],
    overlapped: Option<&FlankContent>,
    overlap_score: ScoreType,
) -> TanDupEaClass {
    if variant != VariantType::Duplication {
        return TanDupEaClass::NotApplicable;
    }

    let configured = !boundaries.is_empty()
        && overlapped.is_some_and(|ov| {
            (ov.left.has_enhancer && ov.right.has_relevant_gene())
                || (ov.right.has_enhancer && ov.left.has_relevant_gene())
        });

    if configured {
        TanDupEaClass::TanDupEa
    }
    else if overlap_score > 0.0 {
        TanDupEaClass::OnlyGde
    }
    else {
        TanDupEaClass::NoData
    }
}
