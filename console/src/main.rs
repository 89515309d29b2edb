mod convert;
mod summarize;
mod utils;

use clap::{Parser, Subcommand};
use convert::ConvertArgs;
use summarize::SummarizeArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

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
    #[command(about = "Aggregate a mods table into a genome-wide summary.")]
    Summarize {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  SummarizeArgs,
    },

    #[command(about = "Reshape a mods table into the methylKit format.")]
    Convert {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ConvertArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Summarize { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Convert { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
