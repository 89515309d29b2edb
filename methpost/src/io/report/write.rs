use std::io::Write;

use anyhow::Context;
use log::debug;
use serde::{
    Serialize,
    Serializer,
};

use crate::data_structs::record::ModsRecord;
use crate::data_structs::Strand;
use crate::data_structs::summary::SummaryRow;
use crate::data_structs::typedef::{
    CountType,
    PosType,
    RateType,
};

fn serialize_methylkit_strand<S>(
    strand: &Strand,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer, {
    serializer.serialize_char(strand.methylkit_symbol())
}

/// One row of the methylKit interchange layout.
///
/// Derived from a single mods record; rows are independent of each
/// other, so the conversion carries no cross-row state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethylKitRow {
    /// `<chr>:<start>` position label.
    #[serde(rename = "chrBase")]
    pub chr_base: String,
    pub chr: String,
    pub base: PosType,
    #[serde(serialize_with = "serialize_methylkit_strand")]
    pub strand: Strand,
    pub coverage: CountType,
    /// Percent methylated, the methylKit reading of this column.
    #[serde(rename = "freqC")]
    pub freq_c: RateType,
    #[serde(rename = "freqT")]
    pub freq_t: RateType,
}

impl From<&ModsRecord> for MethylKitRow {
    fn from(record: &ModsRecord) -> Self {
        MethylKitRow {
            chr_base: format!("{}:{}", record.chr, record.start),
            chr: record.chr.clone(),
            base: record.start,
            strand: record.strand,
            coverage: record.coverage,
            freq_c: record.freq_modified(),
            freq_t: record.freq_unmodified(),
        }
    }
}

/// Writes methylKit rows to a sink as tab-delimited text, header
/// included.
pub struct MethylKitWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> MethylKitWriter<W> {
    pub fn new(sink: W) -> Self {
        debug!("creating methylKit writer");
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_row(
        &mut self,
        row: &MethylKitRow,
    ) -> anyhow::Result<()> {
        self.writer
            .serialize(row)
            .context("failed to write methylKit row")
    }

    /// Flushes buffered rows and returns the sink.
    pub fn finish(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush output: {}", e))
    }
}

/// Writes the single-row genome-wide summary, header included.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(sink);
        Self { writer }
    }

    /// Writes the summary row, flushes, and returns the sink.
    pub fn write(
        mut self,
        row: &SummaryRow,
    ) -> anyhow::Result<W> {
        self.writer
            .serialize(row)
            .context("failed to write summary row")?;
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush output: {}", e))
    }
}
