//! High-level chartql API.
//!
//! Two-stage API: `prepare()` → `render()`. A script is parsed, dispatched,
//! and resolved into a [`ChartSpec`] once; the prepared result can then be
//! rendered through any writer.

use tracing::debug;

use crate::chart::{ChartSpec, ChartType};
use crate::execute::dispatch;
use crate::parser::parse;
use crate::writer::Writer;
use crate::Result;

/// Result of [`prepare`], ready for rendering.
#[derive(Debug)]
pub struct Prepared {
    /// The resolved, validated chart specification
    spec: ChartSpec,
}

impl Prepared {
    /// Render through a writer.
    pub fn render(&self, writer: &dyn Writer, interactive: bool) -> Result<String> {
        writer.render(&self.spec, interactive)
    }

    /// Get the resolved chart specification.
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// The chart type that will be rendered (LINE when the script carried
    /// no TYPE clause).
    pub fn chart_type(&self) -> ChartType {
        self.spec.chart_type()
    }
}

/// Parse a script and resolve it into a chart specification.
///
/// This runs the whole core pipeline short of rendering: lexing, parsing,
/// dispatch, data-source and option resolution, and semantic validation.
pub fn prepare(script: &str) -> Result<Prepared> {
    let statement = parse(script)?;
    let spec = dispatch(&statement).process()?;
    debug!(label = %spec.label, chart_type = ?spec.chart_type(), "prepared chart");
    Ok(Prepared { spec })
}

/// One-shot convenience: prepare a script and render it in a single call.
pub fn run(script: &str, writer: &dyn Writer, interactive: bool) -> Result<String> {
    prepare(script)?.render(writer, interactive)
}
