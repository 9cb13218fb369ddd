use crate::dataset::Record;
use crate::haplogroup::Namespace;
use crate::report;
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

pub fn run(
    namespace: Namespace,
    country: String,
    dataset_path: PathBuf,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let dataset = super::load_dataset(&dataset_path)?;

    let rows = main_haplogroup_frequencies(dataset.records(), namespace, &country);
    if rows.is_empty() {
        println!(
            "No individuals with a {} haplogroup were found for {}.",
            namespace, country
        );
        return Ok(());
    }

    println!(
        "\nMain {} haplogroup frequencies for {}:",
        namespace, country
    );
    println!("{:<16} {:>8} {:>10}", "Main haplogroup", "Count", "Frequency");
    for (main, count, freq) in &rows {
        println!("{:<16} {:>8} {:>10.4}", main, count, freq);
    }

    if let Some(out_path) = output_file {
        report::write_frequency_report(&out_path, namespace, &country, &rows)?;
        println!("The frequency report was written to {}", out_path.display());
    }

    Ok(())
}

/// Tally the main haplogroups (the leading run of uppercase letters of each
/// individual's label) for one country, as (main, count, relative frequency)
/// sorted by descending count.
pub fn main_haplogroup_frequencies(
    records: &[Record],
    namespace: Namespace,
    country: &str,
) -> Vec<(String, usize, f64)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    for record in records {
        if record.country.as_deref() != Some(country) {
            continue;
        }
        let Some(label) = record.haplogroup(namespace) else {
            continue;
        };
        let Some(main) = main_haplogroup(label) else {
            continue;
        };
        *counts.entry(main.to_string()).or_default() += 1;
        total += 1;
    }

    let mut rows: Vec<(String, usize, f64)> = counts
        .into_iter()
        .map(|(main, count)| {
            let freq = count as f64 / total as f64;
            (main, count, freq)
        })
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Leading run of uppercase letters, e.g. `R1a1a1` -> `R`, `HV0a` -> `HV`.
fn main_haplogroup(label: &str) -> Option<&str> {
    let len = label
        .bytes()
        .take_while(|b| b.is_ascii_uppercase())
        .count();
    if len == 0 {
        None
    } else {
        Some(&label[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, y: Option<&str>, mt: Option<&str>) -> Record {
        Record {
            id: "test".to_string(),
            lat: None,
            long: None,
            locality: None,
            country: Some(country.to_string()),
            y_haplogroup: y.map(String::from),
            mt_haplogroup: mt.map(String::from),
            age_interval: None,
        }
    }

    #[test]
    fn main_group_is_leading_uppercase_run() {
        assert_eq!(main_haplogroup("R1a1a1b1a1"), Some("R"));
        assert_eq!(main_haplogroup("HV0a"), Some("HV"));
        assert_eq!(main_haplogroup("L1'2'3'4'5'6"), Some("L"));
        assert_eq!(main_haplogroup("123abc"), None);
    }

    #[test]
    fn frequencies_are_scoped_to_country_and_namespace() {
        let records = vec![
            record("Sweden", Some("R1a1"), None),
            record("Sweden", Some("R1b1a"), Some("U5a1")),
            record("Sweden", Some("I1a"), None),
            record("Norway", Some("R1a1a"), None),
            record("Sweden", None, Some("HV0")),
        ];
        let rows = main_haplogroup_frequencies(&records, Namespace::Y, "Sweden");
        assert_eq!(
            rows,
            vec![
                ("R".to_string(), 2, 2.0 / 3.0),
                ("I".to_string(), 1, 1.0 / 3.0),
            ]
        );

        let rows = main_haplogroup_frequencies(&records, Namespace::Mt, "Sweden");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|(m, c, _)| m == "U" && *c == 1));
        assert!(rows.iter().any(|(m, c, _)| m == "HV" && *c == 1));
    }
}
