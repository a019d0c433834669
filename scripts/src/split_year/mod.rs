//! Year extraction for the coffee review dataset.
//!
//! `review_date` values such as `"Some Coffee Review March 2021"` are reduced
//! to their last whitespace-delimited token (`"2021"`). The file is rewritten
//! in place; other columns are written back exactly as read.

use crate::error::{ToolError, ToolResult, TransformError, TransformResult};
use crate::parser::{load_table, write_table, Table};
use csv::{StringRecord, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Column rewritten by the splitter.
pub const REVIEW_DATE: &str = "review_date";

/// How many distinct values are echoed after a run.
pub const SAMPLE_SIZE: usize = 5;

/// Outcome of a successful rewrite.
#[derive(Debug, Clone)]
pub struct SplitSummary {
    /// File that was rewritten
    pub path: PathBuf,
    /// Rows processed
    pub rows: usize,
    /// Up to [`SAMPLE_SIZE`] distinct resulting values, first-seen order
    pub samples: Vec<String>,
}

/// Last whitespace-delimited token of `value`.
///
/// A value without whitespace comes back unchanged; an empty or
/// whitespace-only value yields `""`.
pub fn last_token(value: &str) -> &str {
    value.split_whitespace().next_back().unwrap_or("")
}

/// Replace every value of `column` with its last token.
pub fn split_column(table: &mut Table, column: &str) -> TransformResult<()> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| TransformError::MissingColumn(column.to_string()))?;

    for row in table.rows.iter_mut() {
        if idx >= row.len() {
            continue;
        }
        let rebuilt: StringRecord = row
            .iter()
            .enumerate()
            .map(|(i, field)| if i == idx { last_token(field) } else { field })
            .collect();
        *row = rebuilt;
    }

    Ok(())
}

/// Up to `limit` distinct values of `column`, in the order they first appear.
pub fn distinct_values(table: &Table, column: &str, limit: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in &table.rows {
        if seen.len() >= limit {
            break;
        }
        if let Some(value) = table.get(row, column) {
            if !seen.iter().any(|s| s == value) {
                seen.push(value.to_string());
            }
        }
    }
    seen
}

/// Rewrite `path` so `review_date` holds only the year.
///
/// The new contents go to a temporary file next to `path` which then replaces
/// it, so the original survives a failed write.
pub fn split_year_in_place<P: AsRef<Path>>(path: P) -> ToolResult<SplitSummary> {
    let path = path.as_ref();
    let mut table = load_table(path)?;
    split_column(&mut table, REVIEW_DATE)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    std::fs::set_permissions(tmp.path(), std::fs::metadata(path)?.permissions())?;
    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(tmp.as_file());
        write_table(&mut writer, &table)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|source| ToolError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Rewrote {} ({} rows)", path.display(), table.len());

    Ok(SplitSummary {
        path: path.to_path_buf(),
        rows: table.len(),
        samples: distinct_values(&table, REVIEW_DATE, SAMPLE_SIZE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_last_token() {
        assert_eq!(last_token("Some Coffee Review March 2021"), "2021");
        assert_eq!(last_token("November 2017"), "2017");
        assert_eq!(last_token("2019"), "2019");
        assert_eq!(last_token("  March\t 2020  "), "2020");
    }

    #[test]
    fn test_last_token_empty() {
        assert_eq!(last_token(""), "");
        assert_eq!(last_token("   "), "");
    }

    #[test]
    fn test_split_column_only_touches_target() {
        let mut table = parse_str(
            "name,review_date,rating\n\"Kona, Hawaii\",March 2021,94\nEthiopia,2019,92",
            "utf-8",
        )
        .unwrap();
        split_column(&mut table, REVIEW_DATE).unwrap();

        assert_eq!(table.get(&table.rows[0], "review_date"), Some("2021"));
        assert_eq!(table.get(&table.rows[0], "name"), Some("Kona, Hawaii"));
        assert_eq!(table.get(&table.rows[0], "rating"), Some("94"));
        assert_eq!(table.get(&table.rows[1], "review_date"), Some("2019"));
    }

    #[test]
    fn test_split_column_missing() {
        let mut table = parse_str("name,rating\nKona,94", "utf-8").unwrap();
        match split_column(&mut table, REVIEW_DATE) {
            Err(TransformError::MissingColumn(c)) => assert_eq!(c, "review_date"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_split_column_idempotent() {
        let mut table = parse_str("review_date\nJanuary 2018\nMay 2020", "utf-8").unwrap();
        split_column(&mut table, REVIEW_DATE).unwrap();
        let once: Vec<String> = table.rows.iter().map(|r| r[0].to_string()).collect();
        split_column(&mut table, REVIEW_DATE).unwrap();
        let twice: Vec<String> = table.rows.iter().map(|r| r[0].to_string()).collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec!["2018", "2020"]);
    }

    #[test]
    fn test_split_column_short_row_unchanged() {
        let mut table = parse_str("name,review_date\nKona\nHuila,March 2021", "utf-8").unwrap();
        split_column(&mut table, REVIEW_DATE).unwrap();

        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(&table.rows[0][0], "Kona");
        assert_eq!(table.get(&table.rows[0], "review_date"), None);
        assert_eq!(table.get(&table.rows[1], "review_date"), Some("2021"));
    }

    #[test]
    fn test_distinct_values_limit_and_order() {
        let table = parse_str(
            "review_date\n2021\n2020\n2021\n2019\n2018\n2017\n2016",
            "utf-8",
        )
        .unwrap();
        assert_eq!(
            distinct_values(&table, REVIEW_DATE, 5),
            vec!["2021", "2020", "2019", "2018", "2017"]
        );
        assert!(distinct_values(&table, "absent", 5).is_empty());
    }
}
