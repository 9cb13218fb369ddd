use crate::haplogroup::Namespace;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One individual from the cleaned population dataset. Produced by the
/// external cleaning pipeline (missing-value normalization, label scrubbing,
/// 1000-year birth-era binning); consumed here strictly read-only.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub y_haplogroup: Option<String>,
    #[serde(default)]
    pub mt_haplogroup: Option<String>,
    #[serde(default)]
    pub age_interval: Option<String>,
}

impl Record {
    pub fn haplogroup(&self, namespace: Namespace) -> Option<&str> {
        match namespace {
            Namespace::Y => self.y_haplogroup.as_deref(),
            Namespace::Mt => self.mt_haplogroup.as_deref(),
        }
    }
}

/// Read-only presence check the search runs against. A trait so tests (and
/// future backends) can substitute the snapshot behind the search.
pub trait MatchIndex {
    /// Indices of the records carrying `label` in `namespace`.
    fn records_for(&self, namespace: Namespace, label: &str) -> &[usize];
}

/// In-memory snapshot of the cleaned dataset with per-namespace
/// label -> record-indices maps, built once at load.
#[derive(Debug, Default)]
pub struct DatasetIndex {
    records: Vec<Record>,
    y_index: HashMap<String, Vec<usize>>,
    mt_index: HashMap<String, Vec<usize>>,
}

impl DatasetIndex {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut y_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut mt_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if let Some(label) = &record.y_haplogroup {
                y_index.entry(label.clone()).or_default().push(i);
            }
            if let Some(label) = &record.mt_haplogroup {
                mt_index.entry(label.clone()).or_default().push(i);
            }
        }
        DatasetIndex {
            records,
            y_index,
            mt_index,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        let records: Vec<Record> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse dataset {}", path.display()))?;
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, idx: usize) -> &Record {
        &self.records[idx]
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl MatchIndex for DatasetIndex {
    fn records_for(&self, namespace: Namespace, label: &str) -> &[usize] {
        let index = match namespace {
            Namespace::Y => &self.y_index,
            Namespace::Mt => &self.mt_index,
        };
        index.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}
