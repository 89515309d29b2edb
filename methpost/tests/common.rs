#![allow(dead_code)]

pub const MODS_HEADER: &str = "#chr\tstart\tend\tname\tbeta_est\tstrand\tunmod\t\
                               mod\tno_snp\tsnp\tcoverage\tgenotype\t\
                               gt_p_score\tgt_conf_score";

/// Formats one full fourteen-column mods row.
pub fn mods_row(
    chr: &str,
    start: u32,
    strand: &str,
    unmod: u32,
    modified: u32,
    coverage: u32,
    genotype: &str,
) -> String {
    format!(
        "{chr}\t{start}\t{end}\tCpG\t0.5\t{strand}\t{unmod}\t{modified}\t0\t0\t\
         {coverage}\t{genotype}\t30\t40",
        end = start + 1
    )
}

/// Joins a header and data rows into a complete tab-delimited table.
pub fn mods_table(rows: &[String]) -> String {
    let mut table = String::from(MODS_HEADER);
    for row in rows {
        table.push('\n');
        table.push_str(row);
    }
    table.push('\n');
    table
}
