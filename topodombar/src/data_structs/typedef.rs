use arcstr::ArcStr;

/// Genomic coordinate (0-based, half-open intervals).
pub type PosType = u32;
/// Phenogram and similarity scores.
pub type ScoreType = f64;
/// Shared chromosome and element names.
pub type NameStr = ArcStr;
