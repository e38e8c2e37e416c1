//! Output writer abstraction layer for chartql
//!
//! The writer module provides a pluggable interface for rendering a finished
//! [`ChartSpec`] into a visual artifact.
//!
//! # Architecture
//!
//! All writers implement the `Writer` trait, which provides:
//! - spec → artifact conversion
//! - validation for writer compatibility
//! - format-specific rendering logic
//!
//! The core hands a writer exactly one thing: the assembled, validated
//! specification. How the chart is drawn, displayed, or windowed is entirely
//! the writer's concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use chartql::writer::{Writer, VegaLiteWriter};
//!
//! let writer = VegaLiteWriter::new();
//! let json = writer.render(&spec, false)?;
//! println!("{}", json);
//! ```

use crate::{ChartSpec, Result};

pub mod vegalite;

pub use vegalite::VegaLiteWriter;

/// Trait for chart output writers
///
/// Writers take a chart specification and produce a rendered artifact
/// (JSON, code, image bytes rendered to a string, etc.). A writer resolves
/// the spec's chart type (LINE when absent) to its own plotting primitive,
/// plots x against y with it, and titles the output with the spec's label.
pub trait Writer {
    /// Render a chart specification into this writer's output format.
    ///
    /// # Arguments
    ///
    /// * `spec` - the assembled, validated chart specification
    /// * `interactive` - whether the artifact should carry interactive
    ///   affordances (tooltips, pan/zoom); writers without a notion of
    ///   interactivity may ignore this
    ///
    /// # Errors
    ///
    /// Returns `ChartqlError::WriterError` if the spec is incompatible with
    /// this writer or output generation fails.
    fn render(&self, spec: &ChartSpec, interactive: bool) -> Result<String>;

    /// Validate that a spec is compatible with this writer without
    /// generating output.
    fn validate(&self, spec: &ChartSpec) -> Result<()>;
}
