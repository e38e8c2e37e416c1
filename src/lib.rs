/*!
# chartql - a chart creation DSL

A small SQL-flavoured language for describing charts from inline data or CSV
files, rendered through pluggable output backends.

## Example

```text
CREATE CHART "Monthly revenue" XVALUES ["Jan","Feb","Mar"] YVALUES [10,12,9] TYPE BAR;
CREATE CHART "Trend" FROM CSV "data.csv" FOR month BY revenue;
```

## Architecture

A script moves through the pipeline in stages:

- **parsing** ([`parser`]) - lexer and recursive-descent parser produce a
  typed AST for the single statement in the script
- **execution** ([`execute`]) - the statement is dispatched to a processor
  that resolves data sources and options into a validated [`ChartSpec`]
- **reading** ([`reader`]) - data source abstraction layer (CSV files with
  delimiter sniffing)
- **writing** ([`writer`]) - output backend abstraction; the in-tree backend
  emits Vega-Lite JSON

## Core Components

- [`parser`] - script parsing and AST generation
- [`chart`] - chart specification types and semantic validation
- [`execute`] - command dispatch and resolution
- [`reader`] - data source abstraction layer
- [`writer`] - output format abstraction layer
*/

pub mod api;
pub mod chart;
pub mod execute;
pub mod parser;
pub mod reader;
pub mod writer;

// Re-export key types for convenience
pub use chart::{AxisValue, ChartSpec, ChartType, OptionValue};
pub use parser::{parse, ParseError, Statement};

/// Delimiters the CSV sniffer will consider, in priority order.
pub const DELIMITERS: &str = ",;|~";

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum ChartqlError {
    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error("Could not determine delimiter. Allowed delimiters are ,;|~")]
    Delimiter,

    #[error("Unknown column `{0}` specified")]
    UnknownColumn(String),

    #[error("{} cannot have numeric x values.", .0.display_name())]
    IncompatibleChartType(ChartType),

    #[error("Data source error: {0}")]
    ReaderError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, ChartqlError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
