//! Append-only CSV row sink.
//!
//! Implements the streaming sink port: the file is created (truncating any
//! previous run) when the header is written, then each processed row is
//! appended and flushed so a consumer can observe partial results while the
//! table is still running. Earlier records are never rewritten; rows
//! processed after a new enrichment column appears simply carry more fields
//! than the header names.

use super::csv::format_record;
use duet_application::{RowSink, SinkError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct CsvRowSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl CsvRowSink {
    /// Create the sink file, truncating an existing one.
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, values: &[String]) -> Result<(), SinkError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SinkError::Rejected("sink writer poisoned".to_string()))?;
        writeln!(
            writer,
            "{}",
            format_record(values.iter().map(String::as_str))
        )?;
        writer.flush()?;
        Ok(())
    }
}

impl RowSink for CsvRowSink {
    fn write_header(&self, columns: &[String]) -> Result<(), SinkError> {
        self.write_record(columns)
    }

    fn append_row(&self, values: &[String]) -> Result<(), SinkError> {
        self.write_record(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_then_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stream.csv");
        let sink = CsvRowSink::create(&path).unwrap();

        sink.write_header(&["name".to_string(), "ai_decision".to_string()])
            .unwrap();
        sink.append_row(&["Ada".to_string(), "valid".to_string(), "UK".to_string()])
            .unwrap();
        sink.append_row(&["Grace, Hopper".to_string(), "invalid".to_string()])
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "name,ai_decision\nAda,valid,UK\n\"Grace, Hopper\",invalid\n"
        );
    }

    #[test]
    fn test_rows_are_observable_before_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stream.csv");
        let sink = CsvRowSink::create(&path).unwrap();

        sink.write_header(&["a".to_string()]).unwrap();
        sink.append_row(&["1".to_string()]).unwrap();

        // Flushed per record: visible while the sink is still open.
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a\n1\n");
        drop(sink);
    }
}
