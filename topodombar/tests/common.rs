#![allow(dead_code)]
use std::path::PathBuf;

use topodombar::prelude::*;

pub fn data_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(relative)
}

pub fn annotated(cnvs: GenomicSet<Cnv>) -> GenomicSet<AnnotatedCnv> {
    cnvs.into_iter().map(AnnotatedCnv::from).collect()
}

/// `(name, label)` pairs of the given CNVs for one mechanism.
pub fn labels<'a>(
    cnvs: &'a GenomicSet<AnnotatedCnv>,
    names: &[&str],
    mechanism: Mechanism,
) -> Vec<(&'a str, &'static str)> {
    names
        .iter()
        .filter_map(|name| cnvs.get(name))
        .map(|cnv| {
            (
                cnv.name().as_str(),
                cnv.effects.label(mechanism).unwrap_or("-"),
            )
        })
        .collect()
}
