use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    bail,
    Context,
};
use csv::StringRecord;
use hashbrown::{
    HashMap,
    HashSet,
};
use log::{
    debug,
    info,
    warn,
};

use crate::annotation::{
    derive_boundaries,
    Domains,
};
use crate::data_structs::coords::{
    GenomicInterval,
    Region,
};
use crate::data_structs::typedef::{
    NameStr,
    PosType,
};
use crate::data_structs::{
    Cnv,
    GenomicSet,
    Gene,
    Strand,
};
use crate::phenotype::{
    PhenotypeData,
    PhenotypeOntology,
    TermId,
    TermSet,
};

/// Name given to elements of files without a name column.
pub const DEFAULT_NAME: &str = "ID";
/// Type label of CNVs whose file has no type column.
pub const DEFAULT_TYPE: &str = ".";

/// Counts occurrences of element names and hands out `name_N` IDs.
///
/// Counting starts at 1 for every distinct base name.
#[derive(Debug, Clone, Default)]
pub struct IdCounter {
    counts: HashMap<String, usize>,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(
        &mut self,
        base: &str,
    ) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;
        format!("{base}_{count}")
    }
}

/// A target term with the enhancers active in its tissue.
#[derive(Debug, Clone)]
pub struct TargetTerm {
    pub term:      TermId,
    pub name:      NameStr,
    pub enhancers: GenomicSet<Region>,
}

/// Reader for the tab-separated inputs of the annotation.
///
/// All files are read without header; lines starting with `#` are skipped
/// and coordinates are 0-based half-open. Element names come from the
/// fourth column. When that column is missing on any line or its values
/// are not unique, every element is renamed `name_N` (or `ID_N`).
#[derive(Debug, Clone)]
pub struct TabFileParser {
    path: PathBuf,
}

impl TabFileParser {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn records(&self) -> anyhow::Result<Vec<StringRecord>> {
        let mut reader = csv::ReaderBuilder::default()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        debug!("Read {} lines from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn line_of(record: &StringRecord) -> u64 {
        record.position().map(|p| p.line()).unwrap_or_default()
    }

    fn require_columns(
        &self,
        record: &StringRecord,
        min_columns: usize,
    ) -> anyhow::Result<()> {
        if record.len() < min_columns {
            bail!(
                "{}:{}: expected at least {} columns, found {}",
                self.path.display(),
                Self::line_of(record),
                min_columns,
                record.len()
            );
        }
        Ok(())
    }

    fn region(
        &self,
        record: &StringRecord,
        name: NameStr,
    ) -> anyhow::Result<Region> {
        let position = |idx: usize| -> anyhow::Result<PosType> {
            let field = &record[idx];
            field.parse::<PosType>().with_context(|| {
                format!(
                    "{}:{}: invalid coordinate '{}'",
                    self.path.display(),
                    Self::line_of(record),
                    field
                )
            })
        };
        let (start, end) = (position(1)?, position(2)?);
        if start >= end {
            bail!(
                "{}:{}: start {} is not before end {}",
                self.path.display(),
                Self::line_of(record),
                start,
                end
            );
        }
        Ok(Region::new(record[0].into(), start, end, name))
    }

    /// Element names of all records, made unique if necessary.
    fn names(
        &self,
        records: &[StringRecord],
    ) -> Vec<NameStr> {
        let mut seen = HashSet::new();
        let unique = records
            .iter()
            .all(|r| r.get(3).is_some_and(|name| seen.insert(name)));
        if unique {
            return records.iter().map(|r| r[3].into()).collect();
        }

        debug!(
            "Element names in {} are missing or not unique; appending counters",
            self.path.display()
        );
        let mut counter = IdCounter::new();
        records
            .iter()
            .map(|r| counter.next_id(r.get(3).unwrap_or(DEFAULT_NAME)).into())
            .collect()
    }

    fn parse_with<T>(
        &self,
        min_columns: usize,
        mut make: impl FnMut(&StringRecord, Region) -> anyhow::Result<T>,
    ) -> anyhow::Result<GenomicSet<T>>
    where
        T: GenomicInterval, {
        let records = self.records()?;
        for record in records.iter() {
            self.require_columns(record, min_columns)?;
        }
        let names = self.names(&records);

        let mut set = GenomicSet::with_capacity(records.len());
        for (record, name) in records.iter().zip(names) {
            let region = self.region(record, name)?;
            set.insert(make(record, region)?);
        }
        info!("Parsed {} elements from {}", set.len(), self.path.display());
        Ok(set)
    }

    /// Reads plain intervals: `chr start end [name]`.
    pub fn parse_regions(&self) -> anyhow::Result<GenomicSet<Region>> {
        self.parse_with(3, |_, region| Ok(region))
    }

    /// Reads genes: `chr start end gene_id [strand [symbol]]`.
    ///
    /// The symbol defaults to the gene ID.
    pub fn parse_genes(&self) -> anyhow::Result<GenomicSet<Gene>> {
        self.parse_with(4, |record, region| {
            let strand = record
                .get(4)
                .map(|s| s.parse::<Strand>().unwrap_or_default())
                .unwrap_or_default();
            let symbol = record
                .get(5)
                .map(NameStr::from)
                .unwrap_or_else(|| region.name().clone());
            Ok(Gene::new(region, strand, symbol))
        })
    }

    /// Reads genes and attaches their phenotype annotations.
    ///
    /// Genes without annotation get an empty term set.
    pub fn parse_genes_with_terms(
        &self,
        data: &PhenotypeData,
    ) -> anyhow::Result<GenomicSet<Gene>> {
        let genes = self.parse_genes()?;
        let mut unannotated = 0usize;
        let genes = genes
            .into_iter()
            .map(|gene| {
                let terms = match data.gene_phenotypes(gene.region().name()) {
                    Some(terms) => terms.clone(),
                    None => {
                        unannotated += 1;
                        TermSet::new()
                    },
                };
                gene.with_phenotypes(terms)
            })
            .collect::<GenomicSet<_>>();
        debug!(
            "{} of {} genes carry no phenotype annotation",
            unannotated,
            genes.len()
        );
        Ok(genes)
    }

    /// Reads CNVs without phenotype columns: `chr start end name [type]`.
    pub fn parse_cnvs(&self) -> anyhow::Result<GenomicSet<Cnv>> {
        self.parse_with(4, |record, region| {
            Ok(Cnv::new(region, record.get(4).unwrap_or(DEFAULT_TYPE)))
        })
    }

    /// Reads CNVs with patient phenotypes:
    /// `chr start end name type phenotypes target`.
    ///
    /// Phenotypes are `;`-separated term IDs. IDs are resolved through the
    /// ontology (alternative and replaced IDs map to the primary term);
    /// unknown IDs are dropped with a warning.
    pub fn parse_cnvs_with_phenotypes(
        &self,
        ontology: &impl PhenotypeOntology,
    ) -> anyhow::Result<GenomicSet<Cnv>> {
        self.parse_with(7, |record, region| {
            let phenotypes = resolve_term_list(ontology, &record[5], region.name());
            let target = resolve_or_warn(ontology, &record[6], region.name());
            Ok(Cnv::new(region, &record[4])
                .with_phenotypes(phenotypes)
                .with_target_term(target))
        })
    }

    /// Reads CNVs with patient phenotypes but without type or target:
    /// `chr start end name phenotypes`.
    ///
    /// Phenotypes are resolved as in [`Self::parse_cnvs_with_phenotypes`];
    /// the type is [`DEFAULT_TYPE`].
    pub fn parse_cnvs_with_terms(
        &self,
        ontology: &impl PhenotypeOntology,
    ) -> anyhow::Result<GenomicSet<Cnv>> {
        self.parse_with(5, |record, region| {
            let phenotypes = resolve_term_list(ontology, &record[4], region.name());
            Ok(Cnv::new(region, DEFAULT_TYPE).with_phenotypes(phenotypes))
        })
    }

    /// Reads CNVs and gives every one of them `term` as both its phenotype
    /// and its target term.
    pub fn parse_cnvs_with_global_term(
        &self,
        term: &TermId,
    ) -> anyhow::Result<GenomicSet<Cnv>> {
        let phenotypes = TermSet::from([term.clone()]);
        self.parse_with(4, |record, region| {
            Ok(Cnv::new(region, record.get(4).unwrap_or(DEFAULT_TYPE))
                .with_phenotypes(phenotypes.clone())
                .with_target_term(Some(term.clone())))
        })
    }

    /// Distinct target terms of a CNV file (seventh column).
    pub fn parse_target_term_set(
        &self,
        ontology: &impl PhenotypeOntology,
    ) -> anyhow::Result<TermSet> {
        let records = self.records()?;
        let mut terms = TermSet::new();
        for record in records.iter() {
            self.require_columns(record, 7)?;
            if let Some(term) = resolve_or_warn(ontology, &record[6], &record[3]) {
                terms.insert(term);
            }
        }
        Ok(terms)
    }

    /// Reads a target-term file: `term_id name enhancer_file`.
    ///
    /// Relative enhancer paths are taken relative to the directory of this
    /// file. Terms unknown to the ontology are skipped with a warning.
    pub fn parse_target_terms(
        &self,
        ontology: &impl PhenotypeOntology,
    ) -> anyhow::Result<Vec<TargetTerm>> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut targets = Vec::new();
        for record in self.records()? {
            self.require_columns(&record, 3)?;
            let Some(term) = ontology.resolve(&record[0])
            else {
                warn!(
                    "{}:{}: unknown target term {}; skipped",
                    self.path.display(),
                    Self::line_of(&record),
                    &record[0]
                );
                continue;
            };

            let enhancer_path = PathBuf::from(&record[2]);
            let enhancer_path = if enhancer_path.is_absolute() {
                enhancer_path
            }
            else {
                dir.join(enhancer_path)
            };
            let enhancers = TabFileParser::new(&enhancer_path)
                .parse_regions()
                .with_context(|| {
                    format!("Failed to read enhancers of target term {term}")
                })?;

            targets.push(TargetTerm {
                term,
                name: record[1].into(),
                enhancers,
            });
        }
        Ok(targets)
    }

    /// Reads a domain file and derives the boundaries between consecutive
    /// domains.
    pub fn parse_boundaries_from_domains(
        &self,
        max_boundary_size: PosType,
    ) -> anyhow::Result<GenomicSet<Region>> {
        let domains = self.parse_regions()?;
        Ok(derive_boundaries(&Domains::new(&domains), max_boundary_size).boundaries)
    }
}

/// Resolves a `;`-separated list of term IDs, dropping unknown ones.
fn resolve_term_list(
    ontology: &impl PhenotypeOntology,
    ids: &str,
    element: &str,
) -> TermSet {
    ids.split(';')
        .filter(|id| !id.trim().is_empty())
        .filter_map(|id| resolve_or_warn(ontology, id, element))
        .collect()
}

fn resolve_or_warn(
    ontology: &impl PhenotypeOntology,
    id: &str,
    element: &str,
) -> Option<TermId> {
    let resolved = ontology.resolve(id);
    if resolved.is_none() {
        warn!("Unknown term {} of {} dropped", id.trim(), element);
    }
    resolved
}
