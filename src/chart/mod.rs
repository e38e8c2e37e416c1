//! Chart specification types for chartql
//!
//! This module defines the backend-agnostic output of the pipeline: the
//! [`ChartSpec`] record handed to writers, the closed [`ChartType`]
//! enumeration, and the semantic validation the grammar cannot express.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{ChartqlError, Result};

// =============================================================================
// Chart Types
// =============================================================================

/// The closed set of supported chart types.
///
/// Each member carries the symbolic rendering-method name it maps to in a
/// plotting backend. BAR and HORIZONTAL_BAR form the "bar family": categorical
/// axis charts that reject purely numeric x values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    Line,
    Scatter,
    Bar,
    HorizontalBar,
}

impl ChartType {
    /// Look up a chart type by its DSL keyword with interior whitespace
    /// replaced by underscores (`"HORIZONTAL BAR"` → `HORIZONTAL_BAR`).
    pub fn from_keyword(keyword: &str) -> Option<ChartType> {
        let chart_type = match keyword.replace(' ', "_").as_str() {
            "LINE" => ChartType::Line,
            "SCATTER" => ChartType::Scatter,
            "BAR" => ChartType::Bar,
            "HORIZONTAL_BAR" => ChartType::HorizontalBar,
            _ => return None,
        };
        Some(chart_type)
    }

    /// The symbolic plotting-method name a backend resolves this type to.
    pub fn method_name(&self) -> &'static str {
        match self {
            ChartType::Line => "plot",
            ChartType::Scatter => "scatter",
            ChartType::Bar => "bar",
            ChartType::HorizontalBar => "barh",
        }
    }

    /// The DSL-facing name, underscores replaced by spaces, as used in
    /// error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Line => "LINE",
            ChartType::Scatter => "SCATTER",
            ChartType::Bar => "BAR",
            ChartType::HorizontalBar => "HORIZONTAL BAR",
        }
    }

    /// True for the bar family (BAR, HORIZONTAL BAR).
    pub fn is_bar(&self) -> bool {
        matches!(self, ChartType::Bar | ChartType::HorizontalBar)
    }
}

// =============================================================================
// Axis Values
// =============================================================================

/// A resolved x-axis value: numeric or categorical.
///
/// y-axis values are always numeric, so they are plain `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl AxisValue {
    /// Sanitize a raw literal: numeric text becomes a number; anything else
    /// is treated as quoted text with the surrounding quotes stripped.
    pub fn sanitize(raw: &str) -> AxisValue {
        match raw.parse::<f64>() {
            Ok(value) => AxisValue::Number(value),
            Err(_) => AxisValue::Text(strip_quotes(raw)),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AxisValue::Number(_))
    }
}

/// Strip one surrounding quote character from each end, when present.
pub(crate) fn strip_quotes(raw: &str) -> String {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
        .to_string()
}

// =============================================================================
// Options
// =============================================================================

/// Value of a resolved chart option.
///
/// `chart_type` is the only option today; the enum leaves room for more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    ChartType(ChartType),
}

/// Option key under which the chart type is stored.
pub const CHART_TYPE_KEY: &str = "chart_type";

// =============================================================================
// Chart Specification
// =============================================================================

/// The resolved, validated description of what to plot.
///
/// This is the one value that crosses the core/backend boundary. x and y
/// series may legitimately differ in length (mismatched CSV columns);
/// backends zip them, truncating to the shorter series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title, quotes stripped
    pub label: String,
    /// x-axis series, in source order
    pub x_values: Vec<AxisValue>,
    /// y-axis series, in source order
    pub y_values: Vec<f64>,
    /// Resolved options; empty when the script carried no TYPE clause
    pub options: HashMap<String, OptionValue>,
}

impl ChartSpec {
    /// Combine label, series, and options into a specification, enforcing
    /// the one semantic rule the grammar cannot express: bar-family charts
    /// are categorical-axis charts and must not have purely numeric x values.
    pub fn assemble(
        label: &str,
        x_values: Vec<AxisValue>,
        y_values: Vec<f64>,
        options: HashMap<String, OptionValue>,
    ) -> Result<ChartSpec> {
        let chart_type = resolved_chart_type(&options);
        if chart_type.is_bar() && x_values.iter().all(AxisValue::is_numeric) {
            return Err(ChartqlError::IncompatibleChartType(chart_type));
        }

        Ok(ChartSpec {
            label: strip_quotes(label),
            x_values,
            y_values,
            options,
        })
    }

    /// The chart type to render with: the `chart_type` option when present,
    /// LINE otherwise. The default is applied here at the read site; the
    /// options map stays un-defaulted.
    pub fn chart_type(&self) -> ChartType {
        resolved_chart_type(&self.options)
    }
}

fn resolved_chart_type(options: &HashMap<String, OptionValue>) -> ChartType {
    match options.get(CHART_TYPE_KEY) {
        Some(OptionValue::ChartType(chart_type)) => *chart_type,
        None => ChartType::Line,
    }
}
