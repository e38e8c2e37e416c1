//! CSV file reader with delimiter sniffing
//!
//! Reads delimited text files with a header row. The delimiter is not
//! configured but sniffed from the file content: every non-empty line must
//! agree on a nonzero count of one of the candidate delimiters `,` `;` `|`
//! `~`, tried in that order.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::reader::{Reader, Table};
use crate::{ChartqlError, Result, DELIMITERS};

/// Reader for delimited text files with a header row.
#[derive(Debug, Default)]
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> Self {
        Self
    }
}

impl Reader for CsvReader {
    fn read(&self, path: &Path) -> Result<Table> {
        // Read the whole file up front so the handle is released before any
        // sniffing or parsing failure surfaces.
        let content = fs::read_to_string(path)
            .map_err(|e| ChartqlError::ReaderError(format!("{}: {}", path.display(), e)))?;

        let delimiter = sniff_delimiter(&content)?;
        debug!(delimiter = %(delimiter as char), path = %path.display(), "sniffed delimiter");

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(content.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| ChartqlError::ReaderError(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| ChartqlError::ReaderError(e.to_string()))?;
            records.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(Table { headers, records })
    }
}

/// Auto-detect which candidate delimiter the content uses.
///
/// A candidate matches when every non-empty line contains it the same
/// nonzero number of times. Candidates are tried in `DELIMITERS` order and
/// the first match wins.
fn sniff_delimiter(content: &str) -> Result<u8> {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(ChartqlError::Delimiter);
    }

    for candidate in DELIMITERS.chars() {
        let first_count = lines[0].matches(candidate).count();
        if first_count == 0 {
            continue;
        }
        if lines
            .iter()
            .all(|line| line.matches(candidate).count() == first_count)
        {
            return Ok(candidate as u8);
        }
    }

    Err(ChartqlError::Delimiter)
}
