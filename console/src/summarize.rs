use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
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
const SUMMARY_SUFFIX: &str = ".summary";

#[derive(Debug, Clone, Copy, ValueEnum, Eq, PartialEq)]
pub(crate) enum GenotypeMode {
    /// Homozygous C/C and G/G calls only.
    Homozygous,
    /// Every record, regardless of genotype.
    All,
}

impl From<GenotypeMode> for GenotypeFilter {
    fn from(value: GenotypeMode) -> Self {
        match value {
            GenotypeMode::Homozygous => GenotypeFilter::HomozygousReference,
            GenotypeMode::All => GenotypeFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Eq, PartialEq)]
pub(crate) enum CoveredBy {
    /// Positions with mod + unmod > 0.
    InformativeDepth,
    /// Positions with coverage > 0.
    ReportedCoverage,
}

impl From<CoveredBy> for CoveragePredicate {
    fn from(value: CoveredBy) -> Self {
        match value {
            CoveredBy::InformativeDepth => CoveragePredicate::InformativeDepth,
            CoveredBy::ReportedCoverage => CoveragePredicate::ReportedCoverage,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SummarizeArgs {
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

    #[clap(
        long,
        value_enum,
        default_value_t = GenotypeMode::Homozygous,
        help = "Which genotype calls the summary includes."
    )]
    genotypes: GenotypeMode,

    #[clap(
        long,
        value_enum,
        default_value_t = CoveredBy::InformativeDepth,
        help = "Depth signal that marks a position as covered."
    )]
    covered_by: CoveredBy,
}

impl SummarizeArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        check_input(&self.input);
        let output = resolve_output_path(
            &self.input,
            self.output.as_deref(),
            self.output_dir.as_deref(),
            SUMMARY_SUFFIX,
        )?;

        let pbar = if std::io::stdin().is_terminal() && !utils.quiet {
            init_spinner()?
        }
        else {
            init_hidden()?
        };

        let mut reader_builder = ModsReaderBuilder::default();
        if self.genotypes == GenotypeMode::Homozygous {
            reader_builder = reader_builder.with_required_column("genotype");
        }
        let reader = reader_builder.build(self.input.clone())?;

        let mut summary = ModsSummary::new()
            .with_genotype_filter(self.genotypes.into())
            .with_coverage_predicate(self.covered_by.into());

        for record in reader {
            summary.add_record(&record?);
            pbar.inc(1);
        }
        pbar.finish_and_clear();

        info!(
            "total_mod={} total_unmod={} covered_positions={}",
            summary.total_mod(),
            summary.total_unmod(),
            summary.covered_positions()
        );

        let sink = AtomicSink::new(&output)?;
        SummaryWriter::new(sink)
            .write(&summary.finalize())?
            .persist()?;

        println!("Output saved to: {}", output.display());
        Ok(())
    }
}
