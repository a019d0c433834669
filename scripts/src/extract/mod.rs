//! PassengerId/Age extraction from the Titanic passenger list.
//!
//! Projects every input row onto `PassengerId,Age`. Values are copied as
//! strings, so empty ages stay empty and nothing is parsed as a number.

use crate::error::{CsvError, CsvResult, ToolResult};
use crate::parser::{load_table, Table};
use csv::{StringRecord, Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Canonical id column.
pub const PASSENGER_ID: &str = "PassengerId";

/// Lowercase id column accepted when the canonical one is absent or empty.
pub const PASSENGER_ID_FALLBACK: &str = "passengerid";

/// Age column, copied verbatim.
pub const AGE: &str = "Age";

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerAge {
    #[serde(rename = "PassengerId")]
    pub passenger_id: String,
    #[serde(rename = "Age")]
    pub age: String,
}

/// Outcome of a successful extraction.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    /// File that was written
    pub output: PathBuf,
    /// Output line count minus the header
    pub approx_rows: usize,
}

/// First non-empty of `PassengerId`, `passengerid`; empty when neither has a value.
pub fn resolve_passenger_id<'a>(table: &Table, row: &'a StringRecord) -> &'a str {
    [PASSENGER_ID, PASSENGER_ID_FALLBACK]
        .iter()
        .filter_map(|key| table.get(row, key))
        .find(|v| !v.is_empty())
        .unwrap_or("")
}

/// Project one row onto `PassengerId,Age`.
pub fn project_row(table: &Table, row: &StringRecord) -> PassengerAge {
    PassengerAge {
        passenger_id: resolve_passenger_id(table, row).to_string(),
        age: table.get(row, AGE).unwrap_or("").to_string(),
    }
}

/// Project every row, keeping input order.
pub fn project(table: &Table) -> Vec<PassengerAge> {
    table.rows.iter().map(|row| project_row(table, row)).collect()
}

/// Count lines in a file and subtract the header.
pub fn count_data_lines<P: AsRef<Path>>(path: P) -> CsvResult<usize> {
    let file = File::open(path.as_ref())?;
    let mut lines = 0usize;
    for line in BufReader::new(file).lines() {
        line.map_err(CsvError::IoError)?;
        lines += 1;
    }
    Ok(lines.saturating_sub(1))
}

/// Read `input`, write `PassengerId,Age` for each row to `output`.
///
/// The input is checked before `output` is touched, so a missing input never
/// leaves an output file behind.
pub fn extract_passengerid_age<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> ToolResult<ExtractSummary> {
    let output = output.as_ref();
    let table = load_table(input)?;

    if table.column_index(AGE).is_none() {
        log::debug!("No '{}' column, every age will be empty", AGE);
    }

    let records = project(&table);

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_path(output)?;
        writer.write_record([PASSENGER_ID, AGE])?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    log::debug!("Wrote {} records to {}", records.len(), output.display());

    let approx_rows = count_data_lines(output)?;

    Ok(ExtractSummary {
        output: output.to_path_buf(),
        approx_rows,
    })
}
