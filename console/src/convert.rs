use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use log::info;
use methpost::prelude::*;

use crate::utils::{
    check_input,
    init_hidden,
    init_spinner,
    resolve_output_path,
    UtilsArgs,
};

/// Suffix of the derived output filename, replacing the input
/// extension.
const METHYLKIT_SUFFIX: &str = "_methylkit.tsv";

#[derive(Args, Debug, Clone)]
pub(crate) struct ConvertArgs {
    #[arg(help = "Path of the input mods table.")]
    input: PathBuf,

    #[arg(
        short = 'o',
        long,
        help = "Path for the generated output file."
    )]
    output: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        conflicts_with = "output",
        help = "Directory for the generated output file, named after the \
                input. Created if absent."
    )]
    output_dir: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        check_input(&self.input);
        let output = resolve_output_path(
            &self.input,
            self.output.as_deref(),
            self.output_dir.as_deref(),
            METHYLKIT_SUFFIX,
        )?;

        let pbar = if std::io::stdin().is_terminal() && !utils.quiet {
            init_spinner()?
        }
        else {
            init_hidden()?
        };

        let reader = ModsReaderBuilder::default().build(self.input.clone())?;

        let mut writer = MethylKitWriter::new(AtomicSink::new(&output)?);
        let mut rows = 0u64;
        for record in reader {
            let record = record?;
            writer.write_row(&MethylKitRow::from(&record))?;
            rows += 1;
            pbar.inc(1);
        }
        writer.finish()?.persist()?;
        pbar.finish_and_clear();

        info!("converted {} rows", rows);
        println!("Output saved to: {}", output.display());
        Ok(())
    }
}
