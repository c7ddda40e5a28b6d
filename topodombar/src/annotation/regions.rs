use super::domains::Domains;
use crate::data_structs::coords::{
    GenomicInterval,
    Region,
};
use crate::data_structs::typedef::PosType;

pub const LEFT_ADJACENT: &str = "leftAdjacentRegion";
pub const RIGHT_ADJACENT: &str = "rightAdjacentRegion";
pub const LEFT_OVERLAPPED: &str = "leftOverlapped";
pub const RIGHT_OVERLAPPED: &str = "rightOverlapped";

/// Regions flanking a CNV on either side. They never overlap the CNV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentRegions {
    pub left:  Option<Region>,
    pub right: Option<Region>,
}

/// Parts of the CNV falling into a domain that starts or ends inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlappedDomains {
    pub left:  Option<Region>,
    pub right: Option<Region>,
}

impl OverlappedDomains {
    pub fn both(&self) -> Option<(&Region, &Region)> {
        self.left.as_ref().zip(self.right.as_ref())
    }
}

/// Adjacent regions reaching to the ends of the neighbouring domains.
///
/// The left region lies in the domain with the greatest start before the
/// CNV start and stops at the CNV start; the right one lies in the domain
/// with the smallest end after the CNV end and starts no earlier than the
/// CNV end.
pub fn adjacent_regions_by_domains<C: GenomicInterval + ?Sized>(
    cnv: &C,
    domains: &Domains,
) -> AdjacentRegions {
    let chr_domains = domains.on_chromosome(cnv.chr());

    let left = chr_domains
        .iter()
        .filter(|d| d.start() < cnv.start())
        .max_by_key(|d| d.start())
        .map(|d| {
            Region::new(
                cnv.chr().clone(),
                d.start(),
                d.end().min(cnv.start()),
                LEFT_ADJACENT.into(),
            )
        });

    let right = chr_domains
        .iter()
        .filter(|d| d.end() > cnv.end())
        .min_by_key(|d| d.end())
        .map(|d| {
            Region::new(
                cnv.chr().clone(),
                d.start().max(cnv.end()),
                d.end(),
                RIGHT_ADJACENT.into(),
            )
        });

    AdjacentRegions { left, right }
}

/// Adjacent regions of a fixed size on both sides, clipped at position 0.
pub fn adjacent_regions_by_distance<C: GenomicInterval + ?Sized>(
    cnv: &C,
    size: PosType,
) -> AdjacentRegions {
    let left = Region::new(
        cnv.chr().clone(),
        cnv.start().saturating_sub(size),
        cnv.start(),
        LEFT_ADJACENT.into(),
    );
    let right = Region::new(
        cnv.chr().clone(),
        cnv.end(),
        cnv.end().saturating_add(size),
        RIGHT_ADJACENT.into(),
    );
    AdjacentRegions {
        left:  Some(left),
        right: Some(right),
    }
}

/// Overlapped-domain regions of a CNV.
///
/// Left: the domain holding the CNV start and ending inside the CNV gives
/// `[cnv.start, domain.end)`. Right: the domain holding the last CNV base
/// and starting inside the CNV gives `[domain.start, cnv.end)`.
pub fn overlapped_domain_regions<C: GenomicInterval + ?Sized>(
    cnv: &C,
    domains: &Domains,
) -> OverlappedDomains {
    let chr_domains = domains.on_chromosome(cnv.chr());

    let left = chr_domains
        .iter()
        .find(|d| {
            d.start() <= cnv.start() && cnv.start() < d.end() && d.end() <= cnv.end()
        })
        .map(|d| {
            Region::new(
                cnv.chr().clone(),
                cnv.start(),
                d.end(),
                LEFT_OVERLAPPED.into(),
            )
        });

    let right = chr_domains
        .iter()
        .find(|d| {
            d.start() < cnv.end() && cnv.end() <= d.end() && d.start() >= cnv.start()
        })
        .map(|d| {
            Region::new(
                cnv.chr().clone(),
                d.start(),
                cnv.end(),
                RIGHT_OVERLAPPED.into(),
            )
        });

    OverlappedDomains { left, right }
}
