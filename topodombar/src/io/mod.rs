//! Readers and writers for the file formats of the annotation.
//!
//! - [`TabFileParser`]: tab-separated intervals, genes, CNVs and target
//!   terms.
//! - [`read_obo`], [`read_gene_annotations`]: the phenotype ontology and the
//!   gene-to-phenotype annotations.
//! - [`write_cnvs`], [`write_regions`]: tab-separated output.

mod obo;
mod parser;
mod writer;

pub use obo::{
    read_gene_annotations,
    read_obo,
    read_phenotype_data,
};
pub use parser::{
    IdCounter,
    TabFileParser,
    TargetTerm,
    DEFAULT_NAME,
    DEFAULT_TYPE,
};
pub use writer::{
    populated_mechanisms,
    write_cnvs,
    write_cnvs_to,
    write_regions,
    BASE_COLUMNS,
    EMPTY_FIELD,
};
