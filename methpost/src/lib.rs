//! # methpost
//!
//! `methpost` post-processes per-CpG methylation call tables ("mods"
//! tables) produced by a methylation caller: one row per genomic
//! position, carrying modified/unmodified read counts, coverage, a
//! genotype call and strand. Two independent single-pass pipelines are
//! provided:
//!
//! * **Summarize** — stream the table once, filter out positions
//!   without a confident homozygous genotype call, and accumulate a
//!   single genome-wide methylation summary
//!   ([`ModsSummary`](data_structs::ModsSummary)).
//! * **Convert** — reshape every row into the methylKit interchange
//!   layout (`chrBase, chr, base, strand, coverage, freqC, freqT`)
//!   consumed by downstream methylation analysis
//!   ([`MethylKitRow`](io::report::MethylKitRow)).
//!
//! Both pipelines read records lazily through
//! [`ModsReader`](io::report::ModsReader), which binds columns by
//! header name rather than position, and write through sinks that only
//! commit an output file once the whole run has succeeded
//! ([`AtomicSink`](io::sink::AtomicSink)).
//!
//! ## Structure
//!
//! * [`data_structs`]: the typed mods record, the summary accumulator
//!   and its policy enums, and common enumerations such as [`Strand`]
//!   (re-exported at the crate root via [`prelude`]).
//! * [`io`]: tab-delimited report reading and writing, plus the atomic
//!   output sink.
//! * [`utils`]: small numeric helpers shared across modules.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use methpost::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader =
//!         ModsReaderBuilder::default().build(PathBuf::from("sample.mods.tsv"))?;
//!
//!     let mut summary = ModsSummary::new();
//!     for record in reader {
//!         summary.add_record(&record?);
//!     }
//!
//!     println!("genome-wide rate: {}", summary.methylation_rate());
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod io;
pub mod prelude;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
