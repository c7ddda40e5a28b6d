use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use console::style;
use topodombar::annotation::MAX_BOUNDARY_SIZE;
use topodombar::io::write_regions;
use topodombar::prelude::*;

use crate::strings::boundaries as strings;
use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct BoundariesArgs {
    #[arg(required = true, help = strings::DOMAINS)]
    domains: PathBuf,

    #[arg(long, default_value_t = MAX_BOUNDARY_SIZE, help = strings::MAX_BOUNDARY_SIZE)]
    max_boundary_size: u32,

    #[arg(short, long, required = true, help = strings::OUTPUT)]
    output: PathBuf,
}

impl BoundariesArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        if !self.domains.is_file() {
            bail!("Input file {} does not exist", self.domains.display());
        }

        let boundaries = TabFileParser::new(&self.domains)
            .parse_boundaries_from_domains(self.max_boundary_size)?;
        write_regions(&self.output, &boundaries)?;

        println!(
            "{}",
            style(format!(
                "Derived {} boundaries, written to {}",
                boundaries.len(),
                self.output.display()
            ))
            .green()
            .bold()
        );
        Ok(())
    }
}
