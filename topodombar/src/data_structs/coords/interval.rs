use std::cmp::Ordering;

use anyhow::bail;

use super::Region;
use crate::data_structs::typedef::{
    NameStr,
    PosType,
};

/// A named, located genomic element.
///
/// Only the four accessors are required; the interval predicates are
/// provided and work across any two implementors, so a [`Cnv`] can be
/// tested against a [`Gene`] or a [`Region`] directly.
///
/// [`Cnv`]: crate::data_structs::Cnv
/// [`Gene`]: crate::data_structs::Gene
pub trait GenomicInterval {
    fn chr(&self) -> &NameStr;
    fn start(&self) -> PosType;
    fn end(&self) -> PosType;
    fn name(&self) -> &NameStr;

    fn length(&self) -> PosType {
        self.end() - self.start()
    }

    /// Any shared base on the same chromosome.
    fn overlaps<O: GenomicInterval + ?Sized>(
        &self,
        other: &O,
    ) -> bool {
        self.chr() == other.chr()
            && self.start() < other.end()
            && other.start() < self.end()
    }

    /// `other` lies fully inside `self`.
    fn contains<O: GenomicInterval + ?Sized>(
        &self,
        other: &O,
    ) -> bool {
        self.chr() == other.chr()
            && self.start() <= other.start()
            && other.end() <= self.end()
    }

    /// `self` lies fully inside `other`.
    fn is_contained_in<O: GenomicInterval + ?Sized>(
        &self,
        other: &O,
    ) -> bool {
        other.contains(self)
    }

    /// Gap between the nearer ends of two elements, 0 if they overlap.
    ///
    /// Fails for elements on different chromosomes.
    fn distance<O: GenomicInterval + ?Sized>(
        &self,
        other: &O,
    ) -> anyhow::Result<PosType> {
        if self.chr() != other.chr() {
            bail!(
                "Cannot measure distance between {} ({}) and {} ({})",
                self.name(),
                self.chr(),
                other.name(),
                other.chr()
            );
        }
        if self.overlaps(other) {
            Ok(0)
        }
        else if self.end() <= other.start() {
            Ok(other.start() - self.end())
        }
        else {
            Ok(self.start().saturating_sub(other.end()))
        }
    }

    /// Copies the coordinates into a new [`Region`] with the given name.
    fn to_region(
        &self,
        name: &str,
    ) -> Region {
        Region::new(self.chr().clone(), self.start(), self.end(), name.into())
    }
}

/// Orders elements by their start coordinate only.
///
/// Used to sort elements of one chromosome; elements with equal starts
/// compare equal, so a stable sort keeps their input order.
pub fn start_coordinate_order<A, B>(
    a: &A,
    b: &B,
) -> Ordering
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized, {
    a.start().cmp(&b.start())
}
