use super::coords::{
    GenomicInterval,
    Region,
};
use super::enums::Strand;
use super::typedef::{
    NameStr,
    PosType,
};
use crate::phenotype::TermSet;

/// A gene locus with its phenotype annotation.
///
/// The name is the gene identifier used to look up phenotype annotations
/// (Entrez ID in the usual inputs); `symbol` is the display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Gene {
    region:     Region,
    strand:     Strand,
    symbol:     NameStr,
    phenotypes: TermSet,
}

impl Gene {
    pub fn new(
        region: Region,
        strand: Strand,
        symbol: NameStr,
    ) -> Self {
        Self {
            region,
            strand,
            symbol,
            phenotypes: TermSet::new(),
        }
    }

    pub fn with_phenotypes(
        mut self,
        phenotypes: TermSet,
    ) -> Self {
        self.phenotypes = phenotypes;
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn symbol(&self) -> &NameStr {
        &self.symbol
    }

    pub fn phenotypes(&self) -> &TermSet {
        &self.phenotypes
    }
}

impl GenomicInterval for Gene {
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
