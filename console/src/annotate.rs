use std::path::PathBuf;

use anyhow::{
    anyhow,
    bail,
};
use clap::{
    Args,
    ValueEnum,
};
use console::style;
use itertools::Itertools;
use log::info;
use topodombar::annotation::MAX_BOUNDARY_SIZE;
use topodombar::io::read_phenotype_data;
use topodombar::prelude::*;

use crate::strings::annotate as strings;
use crate::utils::UtilsArgs;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum CliRegionMode {
    Domains,
    Distance,
}

impl From<CliRegionMode> for RegionMode {
    fn from(value: CliRegionMode) -> Self {
        match value {
            CliRegionMode::Domains => RegionMode::Domains,
            CliRegionMode::Distance => RegionMode::Distance,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct AnnotateArgs {
    #[arg(required = true, help = strings::CNVS)]
    cnvs: PathBuf,

    #[arg(short, long, required = true, help = strings::DOMAINS)]
    domains: PathBuf,

    #[arg(short, long, required = true, help = strings::GENES)]
    genes: PathBuf,

    #[arg(long, required = true, help = strings::OBO)]
    obo: PathBuf,

    #[arg(short, long, required = true, help = strings::ANNOTATIONS)]
    annotations: PathBuf,

    #[arg(short, long, help = strings::ENHANCERS)]
    enhancers: Option<PathBuf>,

    #[arg(short, long, help = strings::TARGET_TERMS)]
    target_terms: Option<PathBuf>,

    #[arg(short, long, help = strings::BOUNDARIES)]
    boundaries: Option<PathBuf>,

    #[arg(long, help = strings::GLOBAL_TERM)]
    global_term: Option<String>,

    #[arg(long, value_enum, default_value_t = CliRegionMode::Domains, help = strings::MODE)]
    mode: CliRegionMode,

    #[arg(long, default_value_t = 1_000_000, help = strings::REGION_SIZE)]
    region_size: u32,

    #[arg(long, default_value_t = MAX_BOUNDARY_SIZE, help = strings::MAX_BOUNDARY_SIZE)]
    max_boundary_size: u32,

    #[arg(short, long, num_args = 1.., value_delimiter = ',', help = strings::MECHANISMS)]
    mechanisms: Option<Vec<Mechanism>>,

    #[arg(short, long, required = true, help = strings::OUTPUT)]
    output: PathBuf,
}

impl AnnotateArgs {
    fn config(&self) -> AnnotationConfig {
        AnnotationConfig::default()
            .with_region_mode(self.mode.into())
            .with_region_size(self.region_size)
            .with_max_boundary_size(self.max_boundary_size)
            .with_mechanisms(
                self.mechanisms
                    .clone()
                    .unwrap_or_else(|| Mechanism::ALL.to_vec()),
            )
    }

    fn validate(&self) -> anyhow::Result<()> {
        for path in [
            &self.cnvs,
            &self.domains,
            &self.genes,
            &self.obo,
            &self.annotations,
        ]
        .into_iter()
        .chain(self.enhancers.iter())
        .chain(self.target_terms.iter())
        .chain(self.boundaries.iter())
        {
            if !path.is_file() {
                bail!("Input file {} does not exist", path.display());
            }
        }
        Ok(())
    }

    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        self.validate()?;
        let data = read_phenotype_data(&self.obo, &self.annotations)?;

        let cnv_parser = TabFileParser::new(&self.cnvs);
        let (cnvs, target_terms) = match self.global_term.as_deref() {
            Some(id) => {
                let term = data
                    .resolve(id)
                    .ok_or_else(|| anyhow!("Unknown global term {id}"))?;
                let cnvs = cnv_parser.parse_cnvs_with_global_term(&term)?;
                (cnvs, TermSet::from([term]))
            },
            None => {
                (
                    cnv_parser.parse_cnvs_with_phenotypes(&data)?,
                    cnv_parser.parse_target_term_set(&data)?,
                )
            },
        };
        let target_genes = TargetGenes::from_annotations(&data, target_terms.iter());
        info!(
            "Collected target genes of {} target terms",
            target_genes.len()
        );

        let term_enhancers = match self.target_terms.as_ref() {
            Some(path) => {
                TabFileParser::new(path)
                    .parse_target_terms(&data)?
                    .into_iter()
                    .map(|t| (t.term, t.enhancers))
                    .collect()
            },
            None => Default::default(),
        };
        let inputs = AnnotationInputs {
            domains: TabFileParser::new(&self.domains).parse_regions()?,
            boundaries: self
                .boundaries
                .as_ref()
                .map(|path| TabFileParser::new(path).parse_regions())
                .transpose()?,
            genes: TabFileParser::new(&self.genes).parse_genes_with_terms(&data)?,
            enhancers: self
                .enhancers
                .as_ref()
                .map(|path| TabFileParser::new(path).parse_regions())
                .transpose()?
                .unwrap_or_default(),
            term_enhancers,
            target_genes: Some(target_genes),
        };

        let annotator = Annotator::new(self.config(), inputs, &data)?;
        let mut cnvs: GenomicSet<AnnotatedCnv> =
            cnvs.into_iter().map(AnnotatedCnv::from).collect();

        let progress_bar = utils.pbar(cnvs.len())?;
        for cnv in cnvs.iter_mut() {
            progress_bar.set_message(format!(
                "{}{}",
                style(format!("{}:", cnv.chr())).blue(),
                style(format!("{}-{}", cnv.start(), cnv.end())).green(),
            ));
            annotator.annotate(cnv);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        write_cnvs(&self.output, &cnvs)?;

        for mechanism in annotator.mechanisms() {
            let counts = cnvs
                .iter()
                .filter_map(|cnv| cnv.effects.label(*mechanism))
                .counts();
            let summary = counts
                .into_iter()
                .sorted()
                .map(|(label, count)| format!("{label}: {count}"))
                .join(", ");
            println!(
                "{} {}",
                style(format!("{mechanism}:")).bold(),
                summary
            );
        }
        println!(
            "{}",
            style(format!(
                "Annotated {} CNVs, written to {}",
                cnvs.len(),
                self.output.display()
            ))
            .green()
            .bold()
        );
        Ok(())
    }
}
