//! Keep only the year in the `review_date` column of `data/coffee_analysis.csv`
//!
//! ```bash
//! split-year      # rewrites data/coffee_analysis.csv in place
//! ```

use clap::Parser;
use data_prep::paths::{data_file, COFFEE_ANALYSIS};
use data_prep::split_year::REVIEW_DATE;
use data_prep::{init_logging, split_year_in_place, SplitSummary};

#[derive(Parser)]
#[command(name = "split-year", version)]
#[command(about = "Reduce review_date in data/coffee_analysis.csv to its year", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = data_file(COFFEE_ANALYSIS);
    log::debug!("Dataset: {}", path.display());

    let result: Result<(), Box<dyn std::error::Error>> = split_year_in_place(&path)
        .map_err(Into::into)
        .and_then(|summary| report(&summary));

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn report(summary: &SplitSummary) -> Result<(), Box<dyn std::error::Error>> {
    println!("✅ Updated {}", summary.path.display());
    println!("✅ Extracted year from {} column", REVIEW_DATE);
    println!("✅ Sample values: {}", serde_json::to_string(&summary.samples)?);
    Ok(())
}
