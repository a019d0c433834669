//! CSV loading and writing shared by both tools.
//!
//! Files are read fully into memory. Valid UTF-8 is used as-is; anything else
//! goes through charset detection before it reaches the `csv` reader.

use crate::error::{CsvError, CsvResult};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::io::Write;
use std::path::Path;

/// A parsed CSV file: header row plus data rows in file order.
#[derive(Debug, Clone)]
pub struct Table {
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows (may be shorter or longer than the header)
    pub rows: Vec<StringRecord>,
    /// Encoding the file was decoded from
    pub encoding: String,
}

impl Table {
    /// Position of `name` in the header, exact match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Value of column `name` in `row`, if the column exists and the row reaches it.
    pub fn get<'a>(&self, row: &'a StringRecord, name: &str) -> Option<&'a str> {
        self.column_index(name).and_then(|i| row.get(i))
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the file has a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 short-circuits; anything else gets chardet's lowercased label.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    chardet::detect(bytes).0.to_lowercase()
}

/// Decode bytes using a WHATWG encoding label.
///
/// `iso-8859-1` and `latin1` resolve to Windows-1252, so bytes in `0x80-0x9F`
/// become punctuation rather than C1 controls. Unknown labels fall back to
/// lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding_rs::Encoding::for_label(encoding.trim().as_bytes()) {
        Some(enc) => enc.decode_without_bom_handling(bytes).0.into_owned(),
        None => {
            log::warn!("Unsupported encoding '{}', decoding as lossy UTF-8", encoding);
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Parse CSV text with a header row.
///
/// # Example
/// ```
/// use data_prep::parser::parse_str;
///
/// let table = parse_str("name,age\nAlice,30\nBob,", "utf-8").unwrap();
/// assert_eq!(table.headers, vec!["name", "age"]);
/// assert_eq!(table.get(&table.rows[1], "age"), Some(""));
/// ```
pub fn parse_str(content: &str, encoding: &str) -> CsvResult<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(CsvError::NoHeaders);
    }

    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    Ok(Table {
        headers,
        rows,
        encoding: encoding.to_string(),
    })
}

/// Parse raw bytes, detecting their encoding first.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<Table> {
    let encoding = detect_encoding(bytes);
    if encoding != "utf-8" {
        log::warn!("Input is not UTF-8, decoding as {}", encoding);
    }
    let content = decode_content(bytes, &encoding);
    parse_str(&content, &encoding)
}

/// Load a CSV file from disk.
///
/// Fails with [`CsvError::NotFound`] when the path does not exist.
pub fn load_table<P: AsRef<Path>>(path: P) -> CsvResult<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CsvError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let table = parse_bytes(&bytes)?;
    log::debug!(
        "Loaded {} ({} rows, {} columns, {})",
        path.display(),
        table.len(),
        table.headers.len(),
        table.encoding
    );
    Ok(table)
}

/// Write header and rows back out unchanged.
pub fn write_table<W: Write>(writer: &mut Writer<W>, table: &Table) -> csv::Result<()> {
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
