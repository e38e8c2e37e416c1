//! Vega-Lite JSON writer implementation
//!
//! Converts chart specifications into Vega-Lite JSON format for web-based
//! visualizations.
//!
//! # Mapping Strategy
//!
//! - chart type → Vega-Lite mark type (LINE → `line`, SCATTER → `point`,
//!   BAR → `bar`, HORIZONTAL BAR → `bar` with x/y encodings swapped)
//! - x/y series → inline data values, zipped row by row (truncating to the
//!   shorter series when lengths differ)
//! - label → chart title
//!
//! # Example
//!
//! ```rust,ignore
//! use chartql::writer::{Writer, VegaLiteWriter};
//!
//! let writer = VegaLiteWriter::new();
//! let vega_json = writer.render(&spec, true)?;
//! // Can be rendered in browser with vega-embed
//! ```

use serde_json::{json, Value};

use crate::chart::{AxisValue, ChartType};
use crate::writer::Writer;
use crate::{ChartSpec, ChartqlError, Result};

/// Vega-Lite JSON writer
///
/// Generates Vega-Lite v5 specifications from chart specs.
pub struct VegaLiteWriter {
    /// Vega-Lite schema version
    schema: String,
}

impl VegaLiteWriter {
    /// Create a new Vega-Lite writer with default settings
    pub fn new() -> Self {
        Self {
            schema: "https://vega.github.io/schema/vega-lite/v5.json".to_string(),
        }
    }

    /// Zip the x/y series into Vega-Lite inline data values.
    fn data_values(&self, spec: &ChartSpec) -> Vec<Value> {
        spec.x_values
            .iter()
            .zip(spec.y_values.iter())
            .map(|(x, y)| {
                json!({
                    "x": axis_value_to_json(x),
                    "y": y,
                })
            })
            .collect()
    }

    /// The Vega-Lite mark type for a chart type.
    fn mark(&self, chart_type: ChartType) -> &'static str {
        match chart_type {
            ChartType::Line => "line",
            ChartType::Scatter => "point",
            ChartType::Bar | ChartType::HorizontalBar => "bar",
        }
    }

    /// Build the encoding block. Horizontal bars swap the positional
    /// channels so categories run down the y axis.
    fn encoding(&self, spec: &ChartSpec, chart_type: ChartType) -> Value {
        let x_type = if spec.x_values.iter().all(AxisValue::is_numeric) {
            "quantitative"
        } else {
            "nominal"
        };

        let x_channel = json!({"field": "x", "type": x_type});
        let y_channel = json!({"field": "y", "type": "quantitative"});

        if chart_type == ChartType::HorizontalBar {
            json!({"x": y_channel, "y": x_channel})
        } else {
            json!({"x": x_channel, "y": y_channel})
        }
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VegaLiteWriter {
    fn render(&self, spec: &ChartSpec, interactive: bool) -> Result<String> {
        self.validate(spec)?;

        let chart_type = spec.chart_type();
        let mark = if interactive {
            json!({"type": self.mark(chart_type), "tooltip": true})
        } else {
            json!(self.mark(chart_type))
        };

        let vega_spec = json!({
            "$schema": self.schema,
            "title": spec.label,
            "data": {"values": self.data_values(spec)},
            "mark": mark,
            "encoding": self.encoding(spec, chart_type),
        });

        serde_json::to_string_pretty(&vega_spec)
            .map_err(|e| ChartqlError::WriterError(e.to_string()))
    }

    fn validate(&self, _spec: &ChartSpec) -> Result<()> {
        // Every chart type has a Vega-Lite mark; nothing to reject yet
        Ok(())
    }
}

fn axis_value_to_json(value: &AxisValue) -> Value {
    match value {
        AxisValue::Number(n) => json!(n),
        AxisValue::Text(s) => json!(s),
    }
}
