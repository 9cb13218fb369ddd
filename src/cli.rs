use crate::haplogroup::Namespace;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Chromosome selector as the user types it (`y` or `mt`).
#[derive(Clone, Copy, ValueEnum)]
pub enum Chromosome {
    Y,
    Mt,
}

impl From<Chromosome> for Namespace {
    fn from(value: Chromosome) -> Self {
        match value {
            Chromosome::Y => Namespace::Y,
            Chromosome::Mt => Namespace::Mt,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the closest ancestral haplogroup with individuals in the dataset
    FindClosest {
        /// Chromosome of the query haplogroup
        #[arg(short, long, value_enum)]
        chromosome: Chromosome,
        /// Query haplogroup name (e.g. R1a1a1b1a1 or U5a1a1a)
        #[arg(short = 'g', long)]
        haplogroup: String,
        /// Cleaned dataset snapshot (JSON)
        dataset: PathBuf,
        /// Output file for the matched individuals report
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
        /// Maximum number of ancestor hops before giving up (default: 3)
        #[arg(long)]
        max_attempts: Option<u32>,
        /// Directory with y_tree.json / mt_tree.json overriding the bundled trees
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Look up a Y-DNA mutation (SNP) and report its haplogroup's individuals
    SnpLookup {
        /// Mutation name (e.g. V1023)
        mutation: String,
        /// Cleaned dataset snapshot (JSON)
        dataset: PathBuf,
        /// SNP index file overriding the bundled sample index
        #[arg(long)]
        index: Option<PathBuf>,
    },

    /// Report main-haplogroup frequencies for one country
    Frequency {
        /// Chromosome to aggregate
        #[arg(short, long, value_enum)]
        chromosome: Chromosome,
        /// Country name as recorded in the dataset
        country: String,
        /// Cleaned dataset snapshot (JSON)
        dataset: PathBuf,
        /// Output file for the frequency report
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
    },
}
