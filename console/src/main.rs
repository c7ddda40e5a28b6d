mod annotate;
mod boundaries;
mod strings;
mod utils;

use annotate::AnnotateArgs;
use boundaries::BoundariesArgs;
use clap::{
    Parser,
    Subcommand,
};
use utils::UtilsArgs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Annotate CNVs and classify them by pathogenic mechanism.
    Annotate {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  AnnotateArgs,
    },

    /// Derive domain boundaries from a domain file.
    Boundaries {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  BoundariesArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        MainMenu::Annotate { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Boundaries { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
