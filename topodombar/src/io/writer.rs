use std::io::Write;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use log::info;

use crate::annotation::AnnotatedCnv;
use crate::data_structs::coords::{
    GenomicInterval,
    Region,
};
use crate::data_structs::typedef::NameStr;
use crate::data_structs::GenomicSet;
use crate::mechanism::Mechanism;

/// Placeholder for empty list columns.
pub const EMPTY_FIELD: &str = ".";

/// Columns written for every CNV, before the mechanism columns.
pub const BASE_COLUMNS: &[&str] = &[
    "chr",
    "start",
    "end",
    "name",
    "type",
    "phenotypes",
    "target_term",
    "boundaries",
    "left_adjacent_region",
    "right_adjacent_region",
    "left_overlapped_domain",
    "right_overlapped_domain",
    "overlapped_genes",
    "left_adjacent_genes",
    "right_adjacent_genes",
    "left_adjacent_enhancers",
    "right_adjacent_enhancers",
    "overlap_score",
    "left_adjacent_score",
    "right_adjacent_score",
];

fn join_names<'a>(names: impl IntoIterator<Item = &'a NameStr>) -> String {
    let joined = names.into_iter().join(";");
    if joined.is_empty() {
        EMPTY_FIELD.to_string()
    }
    else {
        joined
    }
}

/// `chr:start-end` of a derived region, or [`EMPTY_FIELD`].
fn region_field(region: Option<&Region>) -> String {
    region
        .map(ToString::to_string)
        .unwrap_or_else(|| EMPTY_FIELD.to_string())
}

/// Mechanisms populated on at least one CNV, in declaration order.
pub fn populated_mechanisms(cnvs: &GenomicSet<AnnotatedCnv>) -> Vec<Mechanism> {
    Mechanism::ALL
        .iter()
        .copied()
        .filter(|m| cnvs.iter().any(|cnv| cnv.effects.get(*m).is_some()))
        .collect()
}

fn cnv_row(
    cnv: &AnnotatedCnv,
    mechanisms: &[Mechanism],
) -> Vec<String> {
    let base = cnv.cnv();
    let phenotypes = base.phenotypes().iter().join(";");

    let mut row = vec![
        cnv.chr().to_string(),
        cnv.start().to_string(),
        cnv.end().to_string(),
        cnv.name().to_string(),
        base.type_label().to_string(),
        if phenotypes.is_empty() {
            EMPTY_FIELD.to_string()
        }
        else {
            phenotypes
        },
        base.target_term()
            .map(ToString::to_string)
            .unwrap_or_else(|| EMPTY_FIELD.to_string()),
        join_names(&cnv.boundaries),
        region_field(cnv.adjacent.left.as_ref()),
        region_field(cnv.adjacent.right.as_ref()),
        region_field(cnv.overlapped_domains.left.as_ref()),
        region_field(cnv.overlapped_domains.right.as_ref()),
        join_names(&cnv.genes.overlapped),
        join_names(&cnv.genes.left_adjacent),
        join_names(&cnv.genes.right_adjacent),
        join_names(&cnv.enhancers.left_adjacent),
        join_names(&cnv.enhancers.right_adjacent),
        cnv.scores.overlap.to_string(),
        cnv.scores.left_adjacent.to_string(),
        cnv.scores.right_adjacent.to_string(),
    ];
    row.extend(mechanisms.iter().map(|m| {
        cnv.effects
            .label(*m)
            .unwrap_or(EMPTY_FIELD)
            .to_string()
    }));
    row
}

/// Writes annotated CNVs as a tab-separated table with header.
///
/// One column follows the base columns for every mechanism populated on
/// any CNV, named after the mechanism. CNVs lacking a result for such a
/// mechanism get [`EMPTY_FIELD`].
pub fn write_cnvs_to<W: Write>(
    writer: W,
    cnvs: &GenomicSet<AnnotatedCnv>,
) -> anyhow::Result<()> {
    let mechanisms = populated_mechanisms(cnvs);
    let mut csv_writer = csv::WriterBuilder::default()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    let header = BASE_COLUMNS
        .iter()
        .copied()
        .chain(mechanisms.iter().map(|m| m.as_str()))
        .collect_vec();
    csv_writer.write_record(&header)?;

    for cnv in cnvs.iter() {
        csv_writer.write_record(cnv_row(cnv, &mechanisms))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes annotated CNVs to `path`. See [`write_cnvs_to`].
pub fn write_cnvs(
    path: impl AsRef<Path>,
    cnvs: &GenomicSet<AnnotatedCnv>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_cnvs_to(file, cnvs)
        .with_context(|| format!("Failed to write CNVs to {}", path.display()))?;
    info!("Wrote {} CNVs to {}", cnvs.len(), path.display());
    Ok(())
}

/// Writes intervals as headerless `chr start end name` lines.
pub fn write_regions(
    path: impl AsRef<Path>,
    regions: &GenomicSet<Region>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut csv_writer = csv::WriterBuilder::default()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for region in regions.iter() {
        csv_writer.serialize((
            region.chr().as_str(),
            region.start(),
            region.end(),
            region.name().as_str(),
        ))?;
    }
    csv_writer.flush()?;
    info!("Wrote {} regions to {}", regions.len(), path.display());
    Ok(())
}
