pub use crate::annotation::{
    derive_boundaries,
    AnnotatedCnv,
    AnnotationConfig,
    AnnotationInputs,
    Annotator,
    Domains,
    RegionMode,
};
pub use crate::data_structs::coords::{
    GenomicInterval,
    IndexedSet,
    IntervalIndex,
    Region,
};
pub use crate::data_structs::typedef::*;
pub use crate::data_structs::{
    Cnv,
    GenomicSet,
    Gene,
    Strand,
    VariantType,
};
pub use crate::io::{
    write_cnvs,
    TabFileParser,
};
pub use crate::mechanism::{
    Effect,
    EffectMechanisms,
    Mechanism,
};
pub use crate::phenotype::{
    Ontology,
    PhenotypeData,
    PhenotypeOntology,
    TargetGenes,
    TermId,
    TermSet,
};
