//! AST (Abstract Syntax Tree) types for the chartql DSL
//!
//! This module defines the typed AST built directly by the parser. Every
//! grammar rule maps to a tagged variant with named, typed fields, so
//! downstream consumers never walk children by position.
//!
//! # AST Structure
//!
//! ```text
//! Statement
//! └─ CreateChart
//!    ├─ label: String              (raw STRING token, quotes kept)
//!    ├─ source: DataSource         (Inline arrays | Csv binding)
//!    └─ options: Vec<ChartOptions> (0+ TYPE clauses; at most 1 today)
//! ```
//!
//! String-valued fields that come from STRING tokens keep their surrounding
//! double quotes; they are stripped at resolution/assembly time, not here.

use serde::{Deserialize, Serialize};

/// A parsed top-level statement.
///
/// The enum doubles as the dispatch registry: adding a command kind means
/// adding a variant here and an arm in [`crate::execute::dispatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    CreateChart(CreateChart),
}

/// `CREATE CHART <label> <data_source> [TYPE <chart_type>]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChart {
    /// Chart label, raw quoted string
    pub label: String,
    /// Where the x/y series come from
    pub source: DataSource,
    /// Option clauses, in source order
    pub options: Vec<ChartOptions>,
}

/// Data source clause of a `CREATE CHART` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataSource {
    /// Literal bracketed arrays (`VALUES [..] [..]` or `XVALUES`/`YVALUES`
    /// in either order, normalized here to x then y)
    Inline {
        x: Vec<Literal>,
        y: Vec<f64>,
    },
    /// `FROM CSV <path> [FOR <xcol> BY <ycol>]`
    Csv {
        /// File path, raw quoted string
        path: String,
        /// x column name, `None` when the FOR/BY clause is absent
        x_column: Option<String>,
        /// y column name, `None` when the FOR/BY clause is absent
        y_column: Option<String>,
    },
}

/// An element of an x-value list: a bare number or a quoted string.
///
/// y-value lists admit only numbers, which the parser enforces, so they are
/// plain `f64` in [`DataSource::Inline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Number(f64),
    /// Raw quoted string
    Text(String),
}

/// A `TYPE <chart_type>` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// The chart-type keyword exactly as written, interior whitespace and
    /// all (`"HORIZONTAL BAR"` keeps its space). Resolution to a
    /// [`crate::ChartType`] happens in the options resolver.
    pub chart_type: String,
}
