use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Verbosity level (-v: info, -vv: debug)."
    )]
    pub verbose: u8,

    #[arg(long, default_value_t = false, help = "Do not display progress.")]
    pub quiet: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()?;
        Ok(())
    }
}

pub(crate) fn init_spinner() -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos:>7.green} rows {msg}")?,
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

pub(crate) fn init_hidden() -> anyhow::Result<ProgressBar> {
    Ok(ProgressBar::hidden())
}

/// Exits with a message when the input path is not a readable file.
pub(crate) fn check_input(path: &Path) {
    if !path.exists() {
        eprintln!(
            "Error: input file {} not found.",
            style(path.display()).red()
        );
        std::process::exit(1);
    }
    if !path.is_file() {
        eprintln!(
            "Error: input file {} is not a file.",
            style(path.display()).red()
        );
        std::process::exit(1);
    }
}

/// Resolves the output path for a run.
///
/// An explicit `--output` wins. Otherwise the name is the input's stem
/// plus `suffix`, placed next to the input or, when `--output-dir` is
/// given, inside that directory (created if absent).
pub(crate) fn resolve_output_path(
    input: &Path,
    output: Option<&Path>,
    output_dir: Option<&Path>,
    suffix: &str,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let stem = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_string_lossy();
    let file_name = format!("{stem}{suffix}");

    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| {
                format!("failed to create output directory {}", dir.display())
            })?;
            Ok(dir.join(file_name))
        },
        None => Ok(input.with_file_name(file_name)),
    }
}
