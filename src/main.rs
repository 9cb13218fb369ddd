use clap::Parser;
use haplomap::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::FindClosest {
            chromosome,
            haplogroup,
            dataset,
            output_file,
            max_attempts,
            data_dir,
        } => commands::find_closest::run(
            chromosome.into(),
            haplogroup,
            dataset,
            output_file,
            max_attempts,
            data_dir,
        ),
        cli::Commands::SnpLookup {
            mutation,
            dataset,
            index,
        } => commands::snp_lookup::run(mutation, dataset, index),
        cli::Commands::Frequency {
            chromosome,
            country,
            dataset,
            output_file,
        } => commands::frequency::run(chromosome.into(), country, dataset, output_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
