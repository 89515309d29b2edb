use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use itertools::Itertools;
use log::debug;

use crate::data_structs::record::ModsRecord;
use crate::io::report::schema::ReportType;

/// Fatal conditions raised while reading a mods table.
///
/// Either kind aborts the run: a genome-wide result computed from a
/// partially read table would be silently wrong.
#[derive(Debug)]
pub enum ReportError {
    /// A data row whose fields could not be parsed into a record.
    MalformedRecord { row: u64, source: csv::Error },
    /// Required columns absent from the header row, all reported at
    /// once.
    MissingColumns { columns: Vec<String> },
}

impl fmt::Display for ReportError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ReportError::MalformedRecord { row, source } => {
                write!(f, "malformed record at data row {row}: {source}")
            },
            ReportError::MissingColumns { columns } => {
                write!(
                    f,
                    "input table is missing required columns: {}",
                    columns.iter().join(", ")
                )
            },
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::MalformedRecord { source, .. } => Some(source),
            ReportError::MissingColumns { .. } => None,
        }
    }
}

/// Configures a [`ModsReader`].
///
/// The default required columns are the minimum any transform needs
/// ([`ReportType::required_cols`]); callers whose operation consumes
/// further columns add them with
/// [`ModsReaderBuilder::with_required_column`] so a wrong input file
/// fails before any row is processed.
#[derive(Debug, Clone)]
pub struct ModsReaderBuilder {
    required_columns: Vec<String>,
}

impl Default for ModsReaderBuilder {
    fn default() -> Self {
        Self {
            required_columns: ReportType::Mods
                .required_cols()
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl ModsReaderBuilder {
    pub fn with_required_column(
        mut self,
        column: impl Into<String>,
    ) -> Self {
        let column = column.into();
        if !self.required_columns.contains(&column) {
            self.required_columns.push(column);
        }
        self
    }

    /// Builds a reader over an already open source.
    ///
    /// The header row is read and validated here, before the first
    /// record is available.
    pub fn build_from_handle<R: Read>(
        self,
        handle: R,
    ) -> anyhow::Result<ModsReader<R>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .from_reader(handle);

        let headers = csv_reader
            .headers()
            .context("failed to read the header row")?;
        let missing = self
            .required_columns
            .iter()
            .filter(|column| {
                !headers.iter().any(|header| header == column.as_str())
            })
            .cloned()
            .collect_vec();
        if !missing.is_empty() {
            return Err(ReportError::MissingColumns { columns: missing }.into());
        }
        debug!("header validated: {} columns", headers.len());

        Ok(ModsReader {
            records: csv_reader.into_deserialize(),
            row: 0,
        })
    }

    pub fn build(
        self,
        path: PathBuf,
    ) -> anyhow::Result<ModsReader<File>> {
        let handle = File::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        self.build_from_handle(handle)
    }
}

/// Lazy, header-bound reader over a tab-delimited mods table.
///
/// Yields records in input order; restartable only by re-opening the
/// source. The first malformed row ends the stream with a
/// [`ReportError::MalformedRecord`].
pub struct ModsReader<R: Read> {
    records: csv::DeserializeRecordsIntoIter<R, ModsRecord>,
    row: u64,
}

impl<R: Read> std::fmt::Debug for ModsReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModsReader").field("row", &self.row).finish_non_exhaustive()
    }
}

impl<R: Read> Iterator for ModsReader<R> {
    type Item = anyhow::Result<ModsRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.row += 1;
        let row = self.row;
        self.records.next().map(|result| {
            result.map_err(|source| {
                ReportError::MalformedRecord { row, source }.into()
            })
        })
    }
}
