use super::content::FlankContent;
use super::effect::InvEaClass;
use crate::data_structs::typedef::NameStr;
use crate::data_structs::VariantType;

/// Enhancer adoption by inversion.
///
/// An inversion spanning a boundary swaps the content of an overlapped-domain
/// region into the opposite side. Either an enhancer moves next to a relevant
/// gene in the opposite adjacent region, or a relevant gene moves next to an
/// enhancer there. The enhancer case is checked first.
pub fn classify_inversion(
    variant: VariantType,
    boundaries: &[NameStr],
    overlapped: &FlankContent,
    adjacent: &FlankContent,
) -> InvEaClass {
    if variant != VariantType::Inversion {
        return InvEaClass::NotApplicable;
    }
    if boundaries.is_empty() {
        return InvEaClass::NoInvEa;
    }

    let enhancer_moves = (overlapped.left.has_enhancer && adjacent.right.has_relevant_gene())
        || (overlapped.right.has_enhancer && adjacent.left.has_relevant_gene());
    let gene_moves = (overlapped.left.has_relevant_gene() && adjacent.right.has_enhancer)
        || (overlapped.right.has_relevant_gene() && adjacent.left.has_enhancer);

    if enhancer_moves {
        InvEaClass::EnhancerInvEa
    }
    else if gene_moves {
        InvEaClass::GeneInvEa
    }
    else {
        InvEaClass::NoInvEa
    }
}
