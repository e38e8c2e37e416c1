//! Data source resolution
//!
//! Turns the data-source clause of a parsed statement into concrete
//! (x-series, y-series) values, either from the inline literal arrays or by
//! loading a CSV file through a [`Reader`] and binding the requested columns.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::chart::{strip_quotes, AxisValue};
use crate::parser::{DataSource, Literal};
use crate::reader::Reader;
use crate::{ChartqlError, Result};

/// Column name used for the x series when no `FOR` clause is given.
const DEFAULT_X_COLUMN: &str = "x";
/// Column name used for the y series when no `BY` clause is given.
const DEFAULT_Y_COLUMN: &str = "y";

/// Resolve a data-source clause into (x-series, y-series).
///
/// Value order follows the literal elements or file rows. The two series are
/// not required to have equal lengths; backends zip them at render time.
pub fn resolve(source: &DataSource, reader: &dyn Reader) -> Result<(Vec<AxisValue>, Vec<f64>)> {
    match source {
        DataSource::Inline { x, y } => Ok((x.iter().map(resolve_literal).collect(), y.clone())),
        DataSource::Csv {
            path,
            x_column,
            y_column,
        } => resolve_csv(
            path,
            x_column.as_deref().unwrap_or(DEFAULT_X_COLUMN),
            y_column.as_deref().unwrap_or(DEFAULT_Y_COLUMN),
            reader,
        ),
    }
}

fn resolve_literal(literal: &Literal) -> AxisValue {
    match literal {
        Literal::Number(value) => AxisValue::Number(*value),
        Literal::Text(raw) => AxisValue::Text(strip_quotes(raw)),
    }
}

fn resolve_csv(
    path: &str,
    x_column: &str,
    y_column: &str,
    reader: &dyn Reader,
) -> Result<(Vec<AxisValue>, Vec<f64>)> {
    let path = resolve_path(path)?;
    debug!(path = %path.display(), x_column, y_column, "loading csv data source");

    let table = reader.read(&path)?;

    // x before y: the first missing column name wins the error
    let x_values = table
        .column(x_column)?
        .into_iter()
        .map(AxisValue::sanitize)
        .collect();

    let y_values = table
        .column(y_column)?
        .into_iter()
        .map(|field| {
            field.trim().parse::<f64>().map_err(|_| {
                ChartqlError::ReaderError(format!(
                    "invalid numeric value `{}` in column `{}`",
                    field, y_column
                ))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok((x_values, y_values))
}

/// Strip the quotes from a path literal and make it absolute relative to the
/// current working directory.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(strip_quotes(raw));
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().map_err(|e| ChartqlError::ReaderError(e.to_string()))?;
    Ok(cwd.join(path))
}
