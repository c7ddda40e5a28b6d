//! Genomic coordinates.
//!
//! - [`GenomicInterval`]: the trait every located element implements
//!   (regions, genes, CNVs, annotated CNVs). Coordinates are 0-based and
//!   half-open.
//! - [`Region`]: the plain named interval used for domains, boundaries,
//!   enhancers and derived regions.
//! - [`IntervalIndex`] / [`IndexedSet`]: per-chromosome interval indexes for
//!   overlap queries against reference sets.

mod interval;
mod interval_map;
mod region;

pub use interval::{
    start_coordinate_order,
    GenomicInterval,
};
pub use interval_map::{
    IndexedSet,
    IntervalIndex,
};
pub use region::Region;

#[cfg(test)]
mod tests;
