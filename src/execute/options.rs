//! Chart options resolution
//!
//! Extracts the option clauses of a parsed statement into a typed mapping.
//! The grammar allows at most one `TYPE` clause per statement today, but the
//! contract accepts zero-or-more clauses for forward compatibility.

use std::collections::HashMap;

use crate::chart::{ChartType, OptionValue, CHART_TYPE_KEY};
use crate::parser::ChartOptions;
use crate::{ChartqlError, Result};

/// Resolve option clauses into an option-name → option-value mapping.
///
/// The chart-type keyword is looked up by name with interior whitespace
/// replaced by underscores (`"HORIZONTAL BAR"` → `HORIZONTAL_BAR`). No
/// clauses yields an empty mapping; the LINE default is applied by readers
/// of the finished spec, not here.
pub fn resolve(option_nodes: &[ChartOptions]) -> Result<HashMap<String, OptionValue>> {
    let mut options = HashMap::new();

    for node in option_nodes {
        // The grammar admits only known chart-type keywords, so a failed
        // lookup is a programming error, not user input.
        let chart_type = ChartType::from_keyword(&node.chart_type).ok_or_else(|| {
            ChartqlError::InternalError(format!("unknown chart type keyword `{}`", node.chart_type))
        })?;
        options.insert(
            CHART_TYPE_KEY.to_string(),
            OptionValue::ChartType(chart_type),
        );
    }

    Ok(options)
}
