use crate::dataset::MatchIndex;
use crate::haplogroup::Namespace;
use crate::report;
use crate::snp::SnpIndex;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(mutation: String, dataset_path: PathBuf, index_path: Option<PathBuf>) -> Result<()> {
    let snp_index = match &index_path {
        Some(path) => SnpIndex::load(path)?,
        None => SnpIndex::bundled()?,
    };

    let entry = match snp_index.lookup(&mutation) {
        Some(entry) => entry,
        None => {
            println!(
                "The mutation {} is not included in the SNP index.\n\
                 It may be misspelled, or it is not a named Y-chromosome mutation.",
                mutation
            );
            return Ok(());
        }
    };

    println!("\nQuery mutation name: {}", mutation);
    println!("Haplogroup Name: {}", entry.subgroup);
    println!("GRCh37 (Build 37 number): {}", entry.build37);
    println!(
        "GRCh38 (Build 38 number): {}",
        entry
            .build38
            .map(|v| v.to_string())
            .unwrap_or_else(|| "None".to_string())
    );
    println!(
        "Mutation information: {}",
        entry.mutation.as_deref().unwrap_or("Not specified")
    );

    let dataset = super::load_dataset(&dataset_path)?;
    let individuals = dataset.records_for(Namespace::Y, &entry.subgroup);
    let dataset_name = dataset_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dataset_path.display().to_string());
    println!(
        "\nFound {} individual(s) in the {} dataset.",
        individuals.len(),
        dataset_name
    );

    let report_path = PathBuf::from(format!("{}.report.txt", mutation));
    report::write_snp_report(
        &report_path,
        &mutation,
        entry,
        individuals.len(),
        &dataset_name,
    )?;
    println!("The report was written to {}", report_path.display());

    Ok(())
}
