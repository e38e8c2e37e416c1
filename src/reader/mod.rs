//! Data source abstraction layer for chartql
//!
//! The reader module provides a pluggable interface for loading tabular data
//! from external sources and returning it as string-typed rows for the
//! data-source resolver to bind columns from.
//!
//! # Architecture
//!
//! All readers implement the `Reader` trait, which provides:
//! - path → [`Table`] conversion (header row + records)
//! - source-specific failure reporting (`ChartqlError::ReaderError`)
//!
//! # Example
//!
//! ```rust,ignore
//! use chartql::reader::{Reader, CsvReader};
//!
//! let table = CsvReader::new().read(Path::new("data.csv"))?;
//! let xs = table.column("x")?;
//! ```

use std::path::Path;

use crate::{ChartqlError, Result};

pub mod csv;

pub use self::csv::CsvReader;

/// Tabular data loaded from an external source.
///
/// All fields are kept as raw text; numeric conversion is the resolver's
/// business, not the reader's.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names from the header row, in file order
    pub headers: Vec<String>,
    /// Data rows, each aligned with `headers`
    pub records: Vec<Vec<String>>,
}

impl Table {
    /// Values of the named column, in record order.
    ///
    /// # Errors
    ///
    /// Returns `ChartqlError::UnknownColumn` naming the column when it is
    /// absent from the header row.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ChartqlError::UnknownColumn(name.to_string()))?;

        Ok(self
            .records
            .iter()
            .map(|record| record.get(index).map(String::as_str).unwrap_or(""))
            .collect())
    }
}

/// Trait for tabular data source readers
///
/// Readers load a file and return its rows. They provide a uniform
/// interface for different delimited-text dialects and future sources.
pub trait Reader {
    /// Load the file at `path` and return its rows.
    ///
    /// # Errors
    ///
    /// Returns `ChartqlError::ReaderError` when the file cannot be opened or
    /// parsed, or `ChartqlError::Delimiter` when the dialect cannot be
    /// determined.
    fn read(&self, path: &Path) -> Result<Table>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table {
            headers: vec!["x".to_string(), "y".to_string()],
            records: vec![
                vec!["0".to_string(), "1".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ],
        }
    }

    #[test]
    fn test_column_selects_by_header_name() {
        assert_eq!(table().column("y").unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_column_reports_unknown_name() {
        let err = table().column("foo").unwrap_err();
        assert_eq!(err.to_string(), "Unknown column `foo` specified");
    }
}
