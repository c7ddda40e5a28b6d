use super::coords::{
    GenomicInterval,
    Region,
};
use super::enums::VariantType;
use super::typedef::{
    NameStr,
    PosType,
};
use crate::phenotype::{
    TermId,
    TermSet,
};

/// A copy-number variant of one patient.
#[derive(Debug, Clone, PartialEq)]
pub struct Cnv {
    region:      Region,
    variant:     VariantType,
    type_label:  NameStr,
    phenotypes:  TermSet,
    target_term: Option<TermId>,
}

impl Cnv {
    /// Creates a CNV from its interval and the free-form type label of the
    /// input file.
    pub fn new(
        region: Region,
        type_label: &str,
    ) -> Self {
        Self {
            region,
            variant: type_label.parse().unwrap_or_default(),
            type_label: type_label.into(),
            phenotypes: TermSet::new(),
            target_term: None,
        }
    }

    pub fn with_phenotypes(
        mut self,
        phenotypes: TermSet,
    ) -> Self {
        self.phenotypes = phenotypes;
        self
    }

    pub fn with_target_term(
        mut self,
        target_term: Option<TermId>,
    ) -> Self {
        self.target_term = target_term;
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn variant(&self) -> VariantType {
        self.variant
    }

    pub fn type_label(&self) -> &NameStr {
        &self.type_label
    }

    pub fn phenotypes(&self) -> &TermSet {
        &self.phenotypes
    }

    pub fn target_term(&self) -> Option<&TermId> {
        self.target_term.as_ref()
    }
}

impl GenomicInterval for Cnv {
    fn chr(&self) -> &NameStr {
        self.region.chr()
    }

    fn start(&self) -> PosType {
        self.region.start()
    }

    fn end(&self) -> PosType {
        self.region.end()
    }

    fn name(&self) -> &NameStr {
        self.region.name()
    }
}
