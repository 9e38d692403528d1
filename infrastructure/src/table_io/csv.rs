//! CSV reading and writing for tables.
//!
//! A header row is required on input; every record must match its width.
//! Quoting follows the common RFC-4180 conventions: fields containing a
//! comma, quote or line break are wrapped in double quotes, embedded quotes
//! are doubled. Cells are read as text — typing is irrelevant to enrichment.

use duet_domain::{CellValue, DomainError, Row, Table};
use std::path::Path;
use thiserror::Error;

/// Errors from CSV table I/O.
#[derive(Error, Debug)]
pub enum TableIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Malformed(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Read a table from a CSV file.
pub fn read_csv(path: &Path) -> Result<Table, TableIoError> {
    let text = std::fs::read_to_string(path)?;
    read_csv_str(&text)
}

/// Read a table from CSV text.
pub fn read_csv_str(text: &str) -> Result<Table, TableIoError> {
    let mut records = parse_records(text)?
        .into_iter()
        // Skip blank lines.
        .filter(|record| !(record.len() == 1 && record[0].is_empty()));

    let header = records
        .next()
        .ok_or_else(|| TableIoError::Malformed("missing header row".to_string()))?;

    let mut rows = Vec::new();
    for (index, record) in records.enumerate() {
        if record.len() != header.len() {
            return Err(TableIoError::Malformed(format!(
                "record {} has {} fields, expected {}",
                index + 2,
                record.len(),
                header.len()
            )));
        }
        rows.push(Row::new(
            header
                .iter()
                .cloned()
                .zip(record.into_iter().map(CellValue::Text))
                .collect(),
        ));
    }

    Ok(Table::new(header, rows)?)
}

/// Write a table to a CSV file, header first.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), TableIoError> {
    let mut out = String::new();
    out.push_str(&format_record(table.columns().iter().map(String::as_str)));
    out.push('\n');
    for row in table.rows() {
        let values: Vec<String> = row
            .fields()
            .iter()
            .map(|(_, value)| value.to_string())
            .collect();
        out.push_str(&format_record(values.iter().map(String::as_str)));
        out.push('\n');
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Render one CSV record, quoting fields as needed.
pub fn format_record<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    values
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split CSV text into records of fields.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>, TableIoError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(TableIoError::Malformed(
            "unterminated quoted field".to_string(),
        ));
    }
    // Final record without a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}
