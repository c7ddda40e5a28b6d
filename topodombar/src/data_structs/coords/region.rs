use std::cmp::Ordering;
use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use super::GenomicInterval;
use crate::data_structs::typedef::{
    NameStr,
    PosType,
};

/// A named genomic interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    chr:   NameStr,
    start: PosType,
    end:   PosType,
    name:  NameStr,
}

impl Region {
    /// Creates a new `Region`.
    ///
    /// Zero-length regions are allowed.
    pub fn new(
        chr: NameStr,
        start: PosType,
        end: PosType,
        name: NameStr,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self {
            chr,
            start,
            end,
            name,
        }
    }
}

impl GenomicInterval for Region {
    fn chr(&self) -> &NameStr {
        &self.chr
    }

    fn start(&self) -> PosType {
        self.start
    }

    fn end(&self) -> PosType {
        self.end
    }

    fn name(&self) -> &NameStr {
        &self.name
    }
}

impl PartialOrd for Region {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Region {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.chr
            .cmp(&other.chr)
            .then(self.start.cmp(&other.start))
            .then(self.end.cmp(&other.end))
            .then(self.name.cmp(&other.name))
    }
}

impl Display for Region {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}
