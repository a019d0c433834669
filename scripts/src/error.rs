//! Error types for the data-prep tools.
//!
//! - [`CsvError`] - reading and parsing input files
//! - [`TransformError`] - column-level transformation errors
//! - [`ToolError`] - top-level errors returned by each tool
//!
//! Conversion is automatic via `From` implementations,
//! so `?` works across module boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while loading a CSV file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file does not exist.
    #[error("Input CSV not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid CSV format.
    #[error("Invalid CSV format: {0}")]
    ParseError(#[from] csv::Error),

    /// No header row.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while transforming a loaded table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Required column is absent from the header.
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Tool Errors (top-level)
// =============================================================================

/// Top-level error returned by the extractor and the year splitter.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Loading the input failed.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// Transformation failed.
    #[error("{0}")]
    Transform(#[from] TransformError),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    /// Writing a CSV record failed.
    #[error("Failed to write CSV record: {0}")]
    Record(#[from] csv::Error),

    /// Replacing the input file with the rewritten copy failed.
    #[error("Failed to replace {}: {}", .path.display(), .source)]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl ToolError {
    /// True when the input file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolError::Csv(CsvError::NotFound(_)))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CsvError::NotFound(PathBuf::from("/tmp/data/titanic-data.csv"));
        assert_eq!(
            err.to_string(),
            "Input CSV not found: /tmp/data/titanic-data.csv"
        );
    }

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> ToolError keeps the message verbatim
        let tool_err: ToolError = CsvError::NotFound(PathBuf::from("x.csv")).into();
        assert!(tool_err.is_not_found());
        assert_eq!(tool_err.to_string(), "Input CSV not found: x.csv");

        // TransformError -> ToolError
        let tool_err: ToolError = TransformError::MissingColumn("review_date".into()).into();
        assert!(!tool_err.is_not_found());
        assert!(tool_err.to_string().contains("review_date"));
    }
}
