//! Core data structures for representing per-CpG methylation calls and
//! their genome-wide aggregation.
//!
//! Key components of this module include:
//!
//! - [`ModsRecord`]: one typed row of a mods table, populated by
//!   header-name column binding at parse time and immutable afterwards.
//! - [`ModsSummary`]: the streaming accumulator behind the genome-wide
//!   summary, together with the policy enumerations
//!   [`GenotypeFilter`] and [`CoveragePredicate`].
//! - [`Strand`]: genomic strand with the total `+`/`-`/other mapping
//!   used by mods tables and the `F`/`R`/`.` encoding used by methylKit.
//! - [`typedef`]: type aliases for positions, counts and rates.

mod enums;
pub mod record;
pub mod summary;
pub mod typedef;


pub use enums::Strand;
pub use record::ModsRecord;
pub use summary::{
    CoveragePredicate,
    GenotypeFilter,
    ModsSummary,
    SummaryRow,
};
