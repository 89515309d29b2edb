use serde::Deserialize;

use super::enums::Strand;
use super::typedef::{
    CountType,
    PosType,
    RateType,
};

/// One row of a mods table: a single CpG position with its read counts
/// and genotype call.
///
/// Fields bind to the input by header name, so column order in the
/// source file does not matter. Columns outside the required minimum
/// (`#chr`, `start`, `mod`, `unmod`, `coverage`) fall back to their
/// default when absent. A record is immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModsRecord {
    /// Reference sequence name. The leading `#` marks the header row.
    #[serde(rename = "#chr")]
    pub chr: String,
    /// 0-based position of the cytosine.
    pub start: PosType,
    /// Interval end, `start + 1` for single-base calls.
    #[serde(default)]
    pub end: PosType,
    /// Opaque label.
    #[serde(default)]
    pub name: String,
    /// Pre-computed beta value, passed through unmodified.
    #[serde(default)]
    pub beta_est: String,
    #[serde(default)]
    pub strand: Strand,
    /// Reads supporting the unmodified (converted) state.
    pub unmod: CountType,
    /// Reads supporting the modified (protected) state.
    #[serde(rename = "mod")]
    pub modified: CountType,
    #[serde(default)]
    pub no_snp: CountType,
    #[serde(default)]
    pub snp: CountType,
    /// Total informative reads at this position. May exceed
    /// `mod + unmod`, since SNP-ambiguous reads count towards coverage
    /// but carry no modification call.
    pub coverage: CountType,
    /// Observed genotype call, e.g. `C/C` or `C/T`.
    #[serde(default)]
    pub genotype: String,
    #[serde(default)]
    pub gt_p_score: i64,
    #[serde(default)]
    pub gt_conf_score: i64,
}

impl ModsRecord {
    /// Methylation-informative depth: reads with an unambiguous
    /// modified/unmodified call.
    pub fn informative_depth(&self) -> CountType {
        self.modified + self.unmod
    }

    /// Whether the genotype call is one of the homozygous
    /// reference/complement genotypes expected at an unperturbed CpG.
    pub fn is_homozygous_reference(&self) -> bool {
        matches!(self.genotype.as_str(), "C/C" | "G/G")
    }

    /// Percent of informative reads supporting the modified state,
    /// 0 when the position has no informative reads.
    pub fn freq_modified(&self) -> RateType {
        percent(self.modified, self.informative_depth())
    }

    /// Percent of informative reads supporting the unmodified state,
    /// 0 when the position has no informative reads.
    pub fn freq_unmodified(&self) -> RateType {
        percent(self.unmod, self.informative_depth())
    }
}

fn percent(
    count: CountType,
    total: CountType,
) -> RateType {
    if total == 0 {
        0.0
    }
    else {
        100.0 * count as RateType / total as RateType
    }
}
