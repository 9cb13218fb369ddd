pub mod find_closest;
pub mod frequency;
pub mod snp_lookup;

use crate::dataset::DatasetIndex;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Load the cleaned dataset snapshot behind a spinner.
pub(crate) fn load_dataset(path: &Path) -> Result<DatasetIndex> {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    progress.set_message("Loading dataset...");

    let dataset = DatasetIndex::load(path)?;

    progress.finish_with_message(format!("Loaded {} individuals", dataset.len()));
    Ok(dataset)
}
