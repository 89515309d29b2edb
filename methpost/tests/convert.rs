use std::fs;

use methpost::prelude::*;

mod common;
use common::{
    mods_row,
    mods_table,
    MODS_HEADER,
};

fn convert(table: &str) -> anyhow::Result<String> {
    let reader = ModsReaderBuilder::default()
        .build_from_handle(table.as_bytes())?;

    let mut writer = MethylKitWriter::new(Vec::new());
    for record in reader {
        writer.write_row(&MethylKitRow::from(&record?))?;
    }
    Ok(String::from_utf8(writer.finish()?)?)
}

#[test]
fn test_output_layout_and_values() -> anyhow::Result<()> {
    let table = mods_table(&[
        mods_row("chr1", 100, "+", 2, 8, 10, "C/C"),
        mods_row("chr1", 200, "-", 0, 0, 0, "C/T"),
    ]);

    assert_eq!(
        convert(&table)?,
        "chrBase\tchr\tbase\tstrand\tcoverage\tfreqC\tfreqT\n\
         chr1:100\tchr1\t100\tF\t10\t80.0\t20.0\n\
         chr1:200\tchr1\t200\tR\t0\t0.0\t0.0\n"
    );
    Ok(())
}

#[test]
fn test_row_count_and_order_preserved() -> anyhow::Result<()> {
    let rows = vec![
        mods_row("chr2", 300, "+", 1, 1, 2, "C/C"),
        mods_row("chr1", 100, "-", 0, 4, 4, "C/T"),
        mods_row("chr1", 50, ".", 3, 0, 3, "G/G"),
    ];
    let output = convert(&mods_table(&rows))?;
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines.len(), rows.len() + 1);
    // Input order survives, including SNP-affected rows: the
    // conversion never filters.
    assert!(lines[1].starts_with("chr2:300\t"));
    assert!(lines[2].starts_with("chr1:100\t"));
    assert!(lines[3].starts_with("chr1:50\t"));
    Ok(())
}

#[test]
fn test_strand_mapping_is_total() -> anyhow::Result<()> {
    let strands = ["+", "-", ".", "", "unknown_token"];
    let rows: Vec<_> = strands
        .iter()
        .enumerate()
        .map(|(i, strand)| {
            mods_row("chr1", 100 + i as u32, strand, 1, 1, 2, "C/C")
        })
        .collect();

    let output = convert(&mods_table(&rows))?;
    let mapped: Vec<_> = output
        .lines()
        .skip(1)
        .map(|line| line.split('\t').nth(3).unwrap().to_string())
        .collect();

    assert_eq!(mapped, ["F", "R", ".", ".", "."]);
    Ok(())
}

#[test]
fn test_zero_depth_row_has_zero_freqs() -> anyhow::Result<()> {
    let table = mods_table(&[mods_row("chr1", 100, "+", 0, 0, 7, "C/T")]);
    let output = convert(&table)?;
    let fields: Vec<_> = output.lines().nth(1).unwrap().split('\t').collect();

    assert_eq!(fields[4], "7");
    assert_eq!(fields[5], "0.0");
    assert_eq!(fields[6], "0.0");
    Ok(())
}

#[test]
fn test_missing_column_aborts_before_output() {
    let header = MODS_HEADER.replace("\tcoverage", "");
    let table = format!("{header}\n{}", mods_row("chr1", 1, "+", 1, 1, 2, "C/C"));

    let err = ModsReaderBuilder::default()
        .build_from_handle(table.as_bytes())
        .unwrap_err();
    match err.downcast_ref::<ReportError>() {
        Some(ReportError::MissingColumns { columns }) => {
            assert_eq!(columns, &["coverage".to_string()]);
        },
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_persisted_output_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let dest = dir.path().join("sample_methylkit.tsv");
    let table = mods_table(&[mods_row("chr1", 100, "+", 2, 8, 10, "C/C")]);

    let reader = ModsReaderBuilder::default()
        .build_from_handle(table.as_bytes())?;
    let mut writer = MethylKitWriter::new(AtomicSink::new(&dest)?);
    for record in reader {
        writer.write_row(&MethylKitRow::from(&record?))?;
    }
    writer.finish()?.persist()?;

    let written = fs::read_to_string(&dest)?;
    assert!(written.starts_with("chrBase\t"));
    assert!(written.contains("chr1:100\t"));
    // Only the persisted output remains in the directory.
    assert_eq!(fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_aborted_run_leaves_no_output() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let dest = dir.path().join("sample_methylkit.tsv");
    let table = mods_table(&[
        mods_row("chr1", 100, "+", 2, 8, 10, "C/C"),
        mods_row("chr1", 200, "+", 0, 0, 0, "C/C")
            .replace("\t0\t0\t0\t0\t", "\t0\tbad\t0\t0\t"),
    ]);

    let reader = ModsReaderBuilder::default()
        .build_from_handle(table.as_bytes())?;
    let mut writer = MethylKitWriter::new(AtomicSink::new(&dest)?);
    let mut failed = false;
    for record in reader {
        match record {
            Ok(record) => {
                writer.write_row(&MethylKitRow::from(&record))?
            },
            Err(_) => {
                failed = true;
                break;
            },
        }
    }
    drop(writer);

    assert!(failed);
    assert!(!dest.exists());
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}
