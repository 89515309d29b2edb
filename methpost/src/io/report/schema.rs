use std::fmt::Display;

/// Tabular layouts handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    /// Per-CpG mods table produced by the methylation caller.
    Mods,
    /// methylKit-compatible interchange layout.
    MethylKit,
}

impl Display for ReportType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let str = match self {
            ReportType::Mods => String::from("mods"),
            ReportType::MethylKit => String::from("methylkit"),
        };
        write!(f, "{}", str)
    }
}

impl ReportType {
    /// Returns column names for this report format, in output order.
    pub const fn col_names(&self) -> &[&'static str] {
        match self {
            Self::Mods => {
                &[
                    "#chr",
                    "start",
                    "end",
                    "name",
                    "beta_est",
                    "strand",
                    "unmod",
                    "mod",
                    "no_snp",
                    "snp",
                    "coverage",
                    "genotype",
                    "gt_p_score",
                    "gt_conf_score",
                ]
            },
            Self::MethylKit => {
                &[
                    "chrBase", "chr", "base", "strand", "coverage", "freqC",
                    "freqT",
                ]
            },
        }
    }

    /// Columns that must be present in the header before a transform
    /// over this format may start.
    pub const fn required_cols(&self) -> &[&'static str] {
        match self {
            Self::Mods => &["#chr", "start", "mod", "unmod", "coverage"],
            Self::MethylKit => self.col_names(),
        }
    }
}
