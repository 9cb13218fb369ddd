use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One row of the cleaned ISOGG SNP index: the haplogroup the mutation
/// defines plus its reference positions. Rows without a Build 37 position
/// are dropped by the external cleaning step, so `build37` is mandatory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SnpEntry {
    pub subgroup: String,
    pub build37: u64,
    #[serde(default)]
    pub build38: Option<u64>,
    #[serde(default)]
    pub mutation: Option<String>,
}

/// Static Y-DNA mutation-name -> haplogroup table. A flat lookup, not a
/// tree search; loaded once and read-only afterwards.
#[derive(Debug)]
pub struct SnpIndex {
    entries: HashMap<String, SnpEntry>,
}

/// Bundled sample of the ISOGG SNP index; a full index can be supplied at
/// runtime with `--index`.
const SNP_INDEX_JSON: &str = include_str!("../data/snp_index.json");

impl SnpIndex {
    pub fn bundled() -> Result<Self> {
        Self::from_json(SNP_INDEX_JSON)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read SNP index {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, SnpEntry> =
            serde_json::from_str(json).context("failed to parse SNP index")?;
        Ok(SnpIndex { entries })
    }

    pub fn lookup(&self, mutation: &str) -> Option<&SnpEntry> {
        self.entries.get(mutation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let index = SnpIndex::from_json(
            r#"{"M269": {"subgroup": "R1b1a1b", "build37": 22739367,
                         "build38": 20577481, "mutation": "C->T"}}"#,
        )
        .unwrap();
        let entry = index.lookup("M269").unwrap();
        assert_eq!(entry.subgroup, "R1b1a1b");
        assert_eq!(entry.build38, Some(20577481));
        assert!(index.lookup("M270").is_none());
    }

    #[test]
    fn bundled_index_parses() {
        let index = SnpIndex::bundled().unwrap();
        assert!(!index.is_empty());
        assert!(index.lookup("L21").is_some());
    }
}
