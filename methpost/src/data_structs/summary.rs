use serde::{
    Deserialize,
    Serialize,
};

use super::record::ModsRecord;
use super::typedef::RateType;
use crate::utils::round_half_even;

/// Fractional digits kept in the reported methylation rate.
const RATE_DIGITS: u32 = 5;

/// Which records the genome-wide summary includes.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Default)]
pub enum GenotypeFilter {
    /// Only confident homozygous `C/C` or `G/G` calls, so that
    /// SNP-affected or heterozygous positions do not distort the
    /// genome-wide rate.
    #[default]
    HomozygousReference,
    /// Every record, regardless of genotype.
    All,
}

impl GenotypeFilter {
    pub fn includes(
        &self,
        record: &ModsRecord,
    ) -> bool {
        match self {
            GenotypeFilter::HomozygousReference => {
                record.is_homozygous_reference()
            },
            GenotypeFilter::All => true,
        }
    }
}

/// Which depth signal marks an included position as covered.
///
/// `coverage` also counts SNP-ambiguous reads, so
/// [`CoveragePredicate::ReportedCoverage`] can mark positions that
/// contribute nothing to the rate totals.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Default)]
pub enum CoveragePredicate {
    /// `mod + unmod > 0`.
    #[default]
    InformativeDepth,
    /// `coverage > 0`.
    ReportedCoverage,
}

impl CoveragePredicate {
    pub fn is_covered(
        &self,
        record: &ModsRecord,
    ) -> bool {
        match self {
            CoveragePredicate::InformativeDepth => {
                record.informative_depth() > 0
            },
            CoveragePredicate::ReportedCoverage => record.coverage > 0,
        }
    }
}

/// Streaming accumulator for the genome-wide methylation summary.
///
/// Starts zeroed, absorbs one record at a time via
/// [`ModsSummary::add_record`], and combines with other partial
/// summaries by addition via [`ModsSummary::merge`]. The derived rate
/// is never stored; it is computed on demand and rounded once, at
/// [`ModsSummary::finalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModsSummary {
    total_mod: u64,
    total_unmod: u64,
    covered_positions: u64,
    genotypes: GenotypeFilter,
    covered_by: CoveragePredicate,
}

impl ModsSummary {
    /// Creates an empty summary with the default policies.
    pub fn new() -> Self {
        Self {
            total_mod: 0,
            total_unmod: 0,
            covered_positions: 0,
            genotypes: GenotypeFilter::default(),
            covered_by: CoveragePredicate::default(),
        }
    }

    pub fn with_genotype_filter(
        mut self,
        genotypes: GenotypeFilter,
    ) -> Self {
        self.genotypes = genotypes;
        self
    }

    pub fn with_coverage_predicate(
        mut self,
        covered_by: CoveragePredicate,
    ) -> Self {
        self.covered_by = covered_by;
        self
    }

    /// Absorbs a single record.
    ///
    /// Records rejected by the genotype filter leave the summary
    /// untouched; included records add their counts to the totals and
    /// bump `covered_positions` when the coverage predicate holds.
    pub fn add_record(
        &mut self,
        record: &ModsRecord,
    ) {
        if !self.genotypes.includes(record) {
            return;
        }

        self.total_mod += record.modified as u64;
        self.total_unmod += record.unmod as u64;

        if self.covered_by.is_covered(record) {
            self.covered_positions += 1;
        }
    }

    /// Merges another partial summary into this one.
    ///
    /// Summation is plain addition, so summaries built over disjoint
    /// chunks of the same table merge into the same result as a single
    /// pass. Both sides must have been built with the same policies.
    pub fn merge(
        &mut self,
        other: &ModsSummary,
    ) {
        debug_assert_eq!(self.genotypes, other.genotypes);
        debug_assert_eq!(self.covered_by, other.covered_by);

        self.total_mod += other.total_mod;
        self.total_unmod += other.total_unmod;
        self.covered_positions += other.covered_positions;
    }

    pub fn total_mod(&self) -> u64 {
        self.total_mod
    }

    pub fn total_unmod(&self) -> u64 {
        self.total_unmod
    }

    pub fn covered_positions(&self) -> u64 {
        self.covered_positions
    }

    /// Fraction of informative reads supporting the modified state,
    /// unrounded. 0 when no informative reads were accumulated.
    pub fn methylation_rate(&self) -> RateType {
        let depth = self.total_mod + self.total_unmod;
        if depth == 0 {
            0.0
        }
        else {
            self.total_mod as RateType / depth as RateType
        }
    }

    /// Produces the single output row, rounding the rate to five
    /// fractional digits (ties to even).
    pub fn finalize(&self) -> SummaryRow {
        SummaryRow {
            total_mod: self.total_mod,
            total_unmod: self.total_unmod,
            methylation_rate: round_half_even(
                self.methylation_rate(),
                RATE_DIGITS,
            ),
            covered_positions: self.covered_positions,
        }
    }
}

impl Default for ModsSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// The single data row of the summarize pipeline, in output column
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub total_mod: u64,
    pub total_unmod: u64,
    pub methylation_rate: RateType,
    pub covered_positions: u64,
}
