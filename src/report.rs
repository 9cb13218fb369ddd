use crate::dataset::DatasetIndex;
use crate::haplogroup::Namespace;
use crate::snp::SnpEntry;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tab-separated report of the individuals a search selected: the original
/// query's points plus the found ancestor's, one row each, ready for a
/// downstream plotting tool.
pub fn write_points_report(
    path: &Path,
    namespace: Namespace,
    query: &str,
    ancestor: &str,
    query_records: &[usize],
    ancestor_records: &[usize],
    dataset: &DatasetIndex,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# haplomap points report")?;
    writeln!(writer, "# chromosome: {}", namespace)?;
    writeln!(writer, "# query: {}\tclosest: {}", query, ancestor)?;
    writeln!(writer, "# generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(
        writer,
        "Role\tHaplogroup\tId\tCountry\tLocality\tLat\tLong\tAge_interval"
    )?;
    for &idx in query_records {
        write_point_row(&mut writer, "query", query, idx, dataset)?;
    }
    for &idx in ancestor_records {
        write_point_row(&mut writer, "closest", ancestor, idx, dataset)?;
    }
    Ok(())
}

fn write_point_row(
    writer: &mut impl Write,
    role: &str,
    label: &str,
    idx: usize,
    dataset: &DatasetIndex,
) -> Result<()> {
    let record = dataset.record(idx);
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        role,
        label,
        record.id,
        record.country.as_deref().unwrap_or(""),
        record.locality.as_deref().unwrap_or(""),
        record.lat.map(|v| v.to_string()).unwrap_or_default(),
        record.long.map(|v| v.to_string()).unwrap_or_default(),
        record.age_interval.as_deref().unwrap_or(""),
    )?;
    Ok(())
}

/// Plain-text report for one SNP lookup, mirroring the original tool's
/// `<mutation>.report.txt`.
pub fn write_snp_report(
    path: &Path,
    mutation: &str,
    entry: &SnpEntry,
    individual_count: usize,
    dataset_name: &str,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Query mutation name: {}", mutation)?;
    writeln!(writer, "Haplogroup Name: {}", entry.subgroup)?;
    writeln!(writer, "GRCh37 (Build 37 number): {}", entry.build37)?;
    writeln!(
        writer,
        "GRCh38 (Build 38 number): {}",
        entry
            .build38
            .map(|v| v.to_string())
            .unwrap_or_else(|| "None".to_string())
    )?;
    writeln!(
        writer,
        "Mutation information: {}",
        entry.mutation.as_deref().unwrap_or("Not specified")
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Found {} individual(s) in the {} dataset.",
        individual_count, dataset_name
    )?;
    Ok(())
}

/// Frequency table for one country: main haplogroup, count, relative
/// frequency.
pub fn write_frequency_report(
    path: &Path,
    namespace: Namespace,
    country: &str,
    rows: &[(String, usize, f64)],
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# haplomap frequency report")?;
    writeln!(writer, "# chromosome: {}\tcountry: {}", namespace, country)?;
    writeln!(writer, "# generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer, "Main_haplogroup\tCount\tFrequency")?;
    for (main, count, freq) in rows {
        writeln!(writer, "{}\t{}\t{:.4}", main, count, freq)?;
    }
    Ok(())
}
