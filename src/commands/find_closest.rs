use crate::config::Config;
use crate::haplogroup::{search, Forest, Namespace, SearchResult};
use crate::report;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn run(
    namespace: Namespace,
    haplogroup: String,
    dataset_path: PathBuf,
    output_file: Option<PathBuf>,
    max_attempts: Option<u32>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load();
    let max_attempts = max_attempts.unwrap_or(config.max_attempts);

    let forest = load_forest(data_dir.or(config.data_dir).as_deref())?;
    let dataset = super::load_dataset(&dataset_path)?;

    let on = match namespace {
        Namespace::Y => "chromosome Y",
        Namespace::Mt => "mtDNA",
    };
    println!("\nYou have selected {} on {}", haplogroup, on);

    let result = search(&forest, &dataset, namespace, &haplogroup, max_attempts);

    match &result {
        SearchResult::Found {
            ancestor,
            ancestor_records,
            query_records,
            hops,
        } => {
            if query_records.is_empty() {
                println!(
                    "No individuals belong to {} itself in the dataset.",
                    haplogroup
                );
            }
            println!(
                "The closest haplogroup {} was found after {} search(es).",
                ancestor, hops
            );
            println!(
                "Found {} individual(s) in the haplogroup {}",
                ancestor_records.len(),
                ancestor
            );

            let out_path = output_file.unwrap_or_else(|| {
                PathBuf::from(format!("{}_{}.tsv", namespace.name(), ancestor))
            });
            report::write_points_report(
                &out_path,
                namespace,
                &haplogroup,
                ancestor,
                query_records,
                ancestor_records,
                &dataset,
            )?;
            println!("The points report was written to {}", out_path.display());
        }
        SearchResult::RootReached { namespace } => match namespace {
            Namespace::Y => println!(
                "The search reached the end: Y-chromosome Adam! Please try another haplogroup."
            ),
            Namespace::Mt => println!(
                "The search reached the end: mitochondrial Eve (mt-MRCA)! Please try another haplogroup."
            ),
        },
        SearchResult::Exhausted {
            last_candidate,
            attempts,
        } => {
            println!(
                "Only the top {} closest haplogroups are searched (last candidate: {}). No matched individuals!",
                attempts, last_candidate
            );
        }
        SearchResult::Unresolvable { label, reason } => {
            println!("Cannot resolve an ancestor for {}: {}", label, reason);
        }
        SearchResult::MalformedLabel { label } => {
            println!(
                "The haplogroup input '{}' is in the wrong format. Please check it again!",
                label
            );
        }
    }

    Ok(())
}

fn load_forest(data_dir: Option<&Path>) -> Result<Forest> {
    match data_dir {
        Some(dir) => Forest::load_from_dir(dir),
        None => Forest::bundled(),
    }
}
