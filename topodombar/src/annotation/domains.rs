use indexmap::IndexMap;
use log::{
    debug,
    warn,
};

use crate::data_structs::coords::{
    start_coordinate_order,
    GenomicInterval,
    Region,
};
use crate::data_structs::typedef::{
    NameStr,
    PosType,
};
use crate::data_structs::GenomicSet;

/// Largest gap between two consecutive domains that still counts as a
/// boundary.
pub const MAX_BOUNDARY_SIZE: PosType = 400_000;

/// Topological domains grouped by chromosome and sorted by start.
///
/// Chromosomes keep the order in which they first appear in the input set;
/// domains with equal starts keep their input order.
#[derive(Debug, Clone, Default)]
pub struct Domains {
    by_chr: IndexMap<NameStr, Vec<Region>>,
}

impl From<&GenomicSet<Region>> for Domains {
    fn from(set: &GenomicSet<Region>) -> Self {
        let by_chr = set
            .by_chromosome()
            .into_iter()
            .map(|(chr, group)| {
                let mut group = group.into_iter().cloned().collect::<Vec<_>>();
                group.sort_by(start_coordinate_order);
                (chr, group)
            })
            .collect();
        Self { by_chr }
    }
}

impl Domains {
    pub fn new(set: &GenomicSet<Region>) -> Self {
        set.into()
    }

    /// Domains of one chromosome, sorted by start. Empty for unknown
    /// chromosomes.
    pub fn on_chromosome(
        &self,
        chr: &str,
    ) -> &[Region] {
        self.by_chr.get(chr).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &NameStr> {
        self.by_chr.keys()
    }

    pub fn len(&self) -> usize {
        self.by_chr.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Boundaries derived from a domain set and the next free `b_N` counter.
#[derive(Debug, Clone)]
pub struct BoundaryDerivation {
    pub boundaries: GenomicSet<Region>,
    pub next_id:    usize,
}

/// Derives boundaries `b_1, b_2, ...` from the gaps between consecutive
/// domains.
pub fn derive_boundaries(
    domains: &Domains,
    max_boundary_size: PosType,
) -> BoundaryDerivation {
    derive_boundaries_from(domains, max_boundary_size, 1)
}

/// Like [`derive_boundaries`], numbering from `first_id`.
///
/// A gap of at most `max_boundary_size` between consecutive domains yields
/// the boundary `[prev.end, next.start)`. Touching domains produce a
/// one-base boundary `[prev.end, prev.end + 1)` so that every boundary can
/// be hit by an overlap query. Numbering runs across chromosomes in the
/// order they are stored.
pub fn derive_boundaries_from(
    domains: &Domains,
    max_boundary_size: PosType,
    first_id: usize,
) -> BoundaryDerivation {
    let mut boundaries = GenomicSet::new();
    let mut next_id = first_id;

    for chr in domains.chromosomes() {
        for pair in domains.on_chromosome(chr).windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start() < prev.end() {
                warn!(
                    "Domains {} and {} overlap on {}; no boundary derived",
                    prev.name(),
                    next.name(),
                    chr
                );
                continue;
            }
            if next.start() - prev.end() > max_boundary_size {
                continue;
            }

            let end = if next.start() == prev.end() {
                prev.end() + 1
            }
            else {
                next.start()
            };
            let name = format!("b_{next_id}");
            boundaries.insert(Region::new(
                chr.clone(),
                prev.end(),
                end,
                name.into(),
            ));
            next_id += 1;
        }
    }

    debug!(
        "Derived {} boundaries from {} domains",
        boundaries.len(),
        domains.len()
    );
    BoundaryDerivation {
        boundaries,
        next_id,
    }
}
