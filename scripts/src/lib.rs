//! # data-prep - CSV reshaping for the visualization datasets
//!
//! Two independent tools, each a single read-transform-write pass:
//!
//! ```text
//! data/titanic-data.csv   ──extract──▶  data/titanic_passengerid_age.csv
//! data/coffee_analysis.csv ──split-year──▶ data/coffee_analysis.csv (in place)
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`paths`] - Dataset locations relative to the repository root
//! - [`parser`] - CSV loading with encoding detection
//! - [`extract`] - PassengerId/Age projection
//! - [`split_year`] - `review_date` year extraction

pub mod error;
pub mod paths;

// Parsing
pub mod parser;

// Tools
pub mod extract;
pub mod split_year;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CsvError, ToolError, ToolResult, TransformError};

pub use parser::{decode_content, detect_encoding, load_table, parse_bytes, parse_str, Table};

pub use extract::{extract_passengerid_age, project, ExtractSummary, PassengerAge};

pub use split_year::{last_token, split_column, split_year_in_place, SplitSummary};

/// Initialise `env_logger` for the binaries.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    // try_init only fails when a logger is already installed.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
