//! Extract PassengerId and Age from `data/titanic-data.csv`
//!
//! ```bash
//! extract-passengerid-age      # writes data/titanic_passengerid_age.csv
//! ```
//!
//! Empty Age fields are preserved as empty strings.

use clap::Parser;
use data_prep::paths::{data_file, TITANIC_INPUT, TITANIC_OUTPUT};
use data_prep::{extract_passengerid_age, init_logging};

#[derive(Parser)]
#[command(name = "extract-passengerid-age", version)]
#[command(about = "Write data/titanic_passengerid_age.csv with header PassengerId,Age", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = data_file(TITANIC_INPUT);
    let output = data_file(TITANIC_OUTPUT);
    log::debug!("Input: {}", input.display());
    log::debug!("Output: {}", output.display());

    match extract_passengerid_age(&input, &output) {
        Ok(summary) => {
            println!(
                "Wrote: {} (rows: ~{})",
                summary.output.display(),
                summary.approx_rows
            );
        }
        Err(e) => {
            eprintln!("{}", e);
            if e.is_not_found() {
                eprintln!("Run this from the repo root or ensure the data file exists.");
            }
            std::process::exit(1);
        }
    }
}
