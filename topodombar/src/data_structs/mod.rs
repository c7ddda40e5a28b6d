//! Core data structures: the interval model and the located elements the
//! annotation works on.
//!
//! - [`coords`]: the [`GenomicInterval`](coords::GenomicInterval) trait,
//!   [`Region`](coords::Region) and interval indexes.
//! - [`GenomicSet`]: ordered, name-keyed collections of elements.
//! - [`Gene`] and [`Cnv`]: genes with phenotype annotations and patient
//!   variants.
//! - [`typedef`]: coordinate, score and name aliases.

mod cnv;
pub mod coords;
mod enums;
mod gene;
mod genomic_set;
pub mod typedef;


pub use cnv::Cnv;
pub use enums::{
    Strand,
    VariantType,
};
pub use gene::Gene;
pub use genomic_set::GenomicSet;
