use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
};
use std::path::Path;

use anyhow::{
    bail,
    Context,
};
use indexmap::IndexMap;
use log::{
    info,
    warn,
};

use crate::data_structs::typedef::NameStr;
use crate::phenotype::{
    Ontology,
    PhenotypeData,
    Term,
    TermId,
    TermSet,
};

/// Fields of one `[Term]` stanza.
#[derive(Debug, Default)]
struct Stanza {
    id:          Option<TermId>,
    name:        Option<String>,
    parents:     Vec<TermId>,
    alt_ids:     Vec<TermId>,
    obsolete:    bool,
    replaced_by: Option<TermId>,
}

impl Stanza {
    fn into_term(self) -> Option<Term> {
        let id = self.id?;
        Some(
            Term::new(id, self.name.unwrap_or_default().into())
                .with_parents(self.parents)
                .with_alt_ids(self.alt_ids)
                .with_obsolete(self.obsolete)
                .with_replaced_by(self.replaced_by),
        )
    }
}

/// Value of a tag line with trailing modifiers and comments removed.
///
/// `is_a: HP:0000118 ! Phenotypic abnormality` yields `HP:0000118`.
fn tag_value(value: &str) -> &str {
    let value = value.split(" ! ").next().unwrap_or(value);
    let value = value.split(" {").next().unwrap_or(value);
    value.trim()
}

/// Reads the `[Term]` stanzas of an OBO file.
///
/// Only the tags used for similarity scoring are kept: `id`, `name`,
/// `alt_id`, `is_a`, `is_obsolete` and `replaced_by`. Other stanza types
/// (`[Typedef]`, `[Instance]`) and the header are skipped.
pub fn read_obo(path: impl AsRef<Path>) -> anyhow::Result<Ontology> {
    let path = path.as_ref();
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
    );

    let mut terms = Vec::new();
    let mut current: Option<Stanza> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }

        if line.starts_with('[') {
            if let Some(term) = current.take().and_then(Stanza::into_term) {
                terms.push(term);
            }
            if line == "[Term]" {
                current = Some(Stanza::default());
            }
            continue;
        }

        let Some(stanza) = current.as_mut()
        else {
            continue;
        };
        let Some((tag, value)) = line
            .split_once(':')
            .filter(|(tag, _)| !tag.is_empty() && !tag.contains(char::is_whitespace))
        else {
            bail!("{}:{}: malformed tag line '{}'", path.display(), idx + 1, line);
        };
        let value = tag_value(value);
        match tag {
            "id" => stanza.id = Some(value.into()),
            "name" => stanza.name = Some(value.to_string()),
            "alt_id" => stanza.alt_ids.push(value.into()),
            "is_a" => stanza.parents.push(value.into()),
            "is_obsolete" => stanza.obsolete = value == "true",
            "replaced_by" => stanza.replaced_by = Some(value.into()),
            _ => {},
        }
    }
    if let Some(term) = current.and_then(Stanza::into_term) {
        terms.push(term);
    }

    info!("Read {} terms from {}", terms.len(), path.display());
    Ok(terms.into_iter().collect())
}

/// Reads gene-to-phenotype annotations:
/// `gene_id  gene_symbol  term_name  term_id`.
///
/// Term IDs are resolved through the ontology; unknown IDs are counted and
/// dropped. Genes keep the order of their first appearance.
pub fn read_gene_annotations(
    path: impl AsRef<Path>,
    ontology: &Ontology,
) -> anyhow::Result<IndexMap<NameStr, TermSet>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::default()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut annotations: IndexMap<NameStr, TermSet> = IndexMap::new();
    let mut unknown = 0usize;
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
        if record.len() < 4 {
            bail!(
                "{}:{}: expected 4 columns, found {}",
                path.display(),
                record.position().map(|p| p.line()).unwrap_or_default(),
                record.len()
            );
        }

        let terms = annotations.entry(record[0].into()).or_default();
        match ontology.resolve(&record[3]) {
            Some(term) => {
                terms.insert(term);
            },
            None => unknown += 1,
        }
    }

    if unknown > 0 {
        warn!(
            "{} annotations in {} reference unknown terms",
            unknown,
            path.display()
        );
    }
    info!(
        "Read phenotype annotations of {} genes from {}",
        annotations.len(),
        path.display()
    );
    Ok(annotations)
}

/// Reads an ontology and its gene annotations into [`PhenotypeData`].
pub fn read_phenotype_data(
    obo_path: impl AsRef<Path>,
    annotation_path: impl AsRef<Path>,
) -> anyhow::Result<PhenotypeData> {
    let ontology = read_obo(obo_path)?;
    let annotations = read_gene_annotations(annotation_path, &ontology)?;
    Ok(PhenotypeData::new(ontology, annotations))
}
