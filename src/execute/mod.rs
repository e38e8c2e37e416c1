//! Statement execution module for chartql
//!
//! Provides command dispatch and the per-command processors that turn a
//! parsed statement into a validated [`ChartSpec`].
//!
//! This module is organized into submodules:
//! - `source`: data source resolution (inline arrays, CSV column binding)
//! - `options`: chart option resolution (TYPE clause → typed mapping)

pub mod options;
pub mod source;

use tracing::debug;

use crate::chart::ChartSpec;
use crate::parser::{CreateChart, Statement};
use crate::reader::{CsvReader, Reader};
use crate::Result;

/// A per-command processor, selected by [`dispatch`].
pub trait Processor {
    /// Resolve the command into a validated chart specification.
    fn process(&self) -> Result<ChartSpec>;
}

/// Select the processor for a parsed statement.
///
/// The [`Statement`] enum is the registry: the grammar only ever produces
/// registered statement kinds, so every variant has an arm here. Extension
/// means a new variant and a new processor.
pub fn dispatch(statement: &Statement) -> Box<dyn Processor + '_> {
    match statement {
        Statement::CreateChart(chart) => Box::new(CreateChartProcessor::new(chart)),
    }
}

/// Processor for `CREATE CHART` statements.
pub struct CreateChartProcessor<'a> {
    statement: &'a CreateChart,
    reader: Box<dyn Reader>,
}

impl<'a> CreateChartProcessor<'a> {
    pub fn new(statement: &'a CreateChart) -> Self {
        Self {
            statement,
            reader: Box::new(CsvReader::new()),
        }
    }

    /// Use a specific reader instead of the default CSV reader.
    pub fn with_reader(statement: &'a CreateChart, reader: Box<dyn Reader>) -> Self {
        Self { statement, reader }
    }
}

impl Processor for CreateChartProcessor<'_> {
    fn process(&self) -> Result<ChartSpec> {
        let (x_values, y_values) = source::resolve(&self.statement.source, self.reader.as_ref())?;
        let options = options::resolve(&self.statement.options)?;
        debug!(
            x_len = x_values.len(),
            y_len = y_values.len(),
            "resolved data source"
        );

        ChartSpec::assemble(&self.statement.label, x_values, y_values, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AxisValue, ChartType, OptionValue, CHART_TYPE_KEY};
    use crate::parser::parse;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn process(script: &str) -> Result<ChartSpec> {
        let statement = parse(script)?;
        // Bind the processor so it drops before the statement it borrows
        let processor = dispatch(&statement);
        processor.process()
    }

    fn chart_type_of(spec: &ChartSpec) -> Option<ChartType> {
        match spec.options.get(CHART_TYPE_KEY) {
            Some(OptionValue::ChartType(chart_type)) => Some(*chart_type),
            None => None,
        }
    }

    #[test]
    fn test_builds_chart_from_values() {
        let spec = process(r#"CREATE CHART "foo" VALUES [-1,2,3,4] [4,5,6,7];"#).unwrap();

        assert_eq!(spec.label, "foo");
        assert_eq!(
            spec.x_values,
            vec![
                AxisValue::Number(-1.0),
                AxisValue::Number(2.0),
                AxisValue::Number(3.0),
                AxisValue::Number(4.0),
            ]
        );
        assert_eq!(spec.y_values, vec![4.0, 5.0, 6.0, 7.0]);
        assert!(spec.options.is_empty());
    }

    #[test]
    fn test_clause_order_produces_identical_specs() {
        let forward = process(r#"CREATE CHART "foo" XVALUES [-1,2,3,4] YVALUES [4,5,6,7];"#);
        let reversed = process(r#"CREATE CHART "foo" YVALUES [4,5,6,7] XVALUES [-1,2,3,4];"#);

        assert_eq!(forward.unwrap(), reversed.unwrap());
    }

    #[test]
    fn test_resolves_explicit_chart_type() {
        let spec = process(r#"CREATE CHART "foo" VALUES [-1,2,3,4] [4,5,6,7] TYPE SCATTER;"#)
            .unwrap();
        assert_eq!(chart_type_of(&spec), Some(ChartType::Scatter));
    }

    #[test]
    fn test_builds_bar_chart_with_categorical_x() {
        let spec =
            process(r#"CREATE CHART "foo" XVALUES ["a", "b"] YVALUES [4,5] TYPE BAR;"#).unwrap();

        assert_eq!(
            spec.x_values,
            vec![
                AxisValue::Text("a".to_string()),
                AxisValue::Text("b".to_string()),
            ]
        );
        assert_eq!(chart_type_of(&spec), Some(ChartType::Bar));
    }

    #[test]
    fn test_bar_family_rejects_numeric_x() {
        let err =
            process(r#"CREATE CHART "foo" XVALUES [1,2] YVALUES [4,5,6,7] TYPE BAR;"#).unwrap_err();
        assert_eq!(err.to_string(), "BAR cannot have numeric x values.");

        let err = process(r#"CREATE CHART "foo" XVALUES [1,2] YVALUES [4,5,6,7] TYPE HORIZONTAL BAR;"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "HORIZONTAL BAR cannot have numeric x values."
        );
    }

    #[test]
    fn test_mismatched_series_lengths_are_not_an_error() {
        let spec = process(r#"CREATE CHART "foo" XVALUES [1,2] YVALUES [4,5,6,7];"#).unwrap();

        assert_eq!(spec.x_values.len(), 2);
        assert_eq!(spec.y_values.len(), 4);
    }

    // ------------------------------------------------------------------
    // CSV fixtures
    // ------------------------------------------------------------------

    fn csv_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn csv_script(file: &NamedTempFile, suffix: &str) -> String {
        format!(
            r#"CREATE CHART "foo" FROM CSV "{}"{};"#,
            file.path().display(),
            suffix
        )
    }

    const BASE_CSV: &str = "x,y\n0,1\n1,2\n2,3\n4,7\n8,9\n";
    const MULTI_COLUMN_CSV: &str = "x,y,z\n0,1,1\n1,2,1\n2,3,2\n4,7,1\n8,9,2\n";

    #[test]
    fn test_builds_chart_from_csv_default_columns() {
        let file = csv_fixture(BASE_CSV);

        let spec = process(&csv_script(&file, "")).unwrap();

        assert_eq!(spec.label, "foo");
        assert_eq!(
            spec.x_values,
            vec![
                AxisValue::Number(0.0),
                AxisValue::Number(1.0),
                AxisValue::Number(2.0),
                AxisValue::Number(4.0),
                AxisValue::Number(8.0),
            ]
        );
        assert_eq!(spec.y_values, vec![1.0, 2.0, 3.0, 7.0, 9.0]);
        assert!(spec.options.is_empty());
    }

    #[test]
    fn test_builds_chart_from_semicolon_separated_csv() {
        let file = csv_fixture("x;y\n0;1\n1;2\n2;3\n4;7\n8;9\n");

        let spec = process(&csv_script(&file, "")).unwrap();

        assert_eq!(spec.y_values, vec![1.0, 2.0, 3.0, 7.0, 9.0]);
    }

    #[test]
    fn test_csv_for_by_clause_selects_columns() {
        let file = csv_fixture(MULTI_COLUMN_CSV);

        let spec = process(&csv_script(&file, " FOR x BY z")).unwrap();
        assert_eq!(spec.y_values, vec![1.0, 1.0, 2.0, 1.0, 2.0]);

        let spec = process(&csv_script(&file, " FOR z BY y")).unwrap();
        assert_eq!(
            spec.x_values,
            vec![
                AxisValue::Number(1.0),
                AxisValue::Number(1.0),
                AxisValue::Number(2.0),
                AxisValue::Number(1.0),
                AxisValue::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_csv_unknown_columns_report_first_missing_name() {
        let file = csv_fixture(MULTI_COLUMN_CSV);

        let err = process(&csv_script(&file, " FOR foo BY bar")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown column `foo` specified");

        let err = process(&csv_script(&file, " FOR x BY bar")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown column `bar` specified");
    }

    #[test]
    fn test_processor_accepts_injected_reader() {
        use crate::reader::Table;
        use std::path::Path;

        struct FixedReader;
        impl Reader for FixedReader {
            fn read(&self, _path: &Path) -> Result<Table> {
                Ok(Table {
                    headers: vec!["x".to_string(), "y".to_string()],
                    records: vec![vec!["a".to_string(), "1".to_string()]],
                })
            }
        }

        let statement = parse(r#"CREATE CHART "foo" FROM CSV "anywhere.csv";"#).unwrap();
        let Statement::CreateChart(chart) = &statement;
        let spec = CreateChartProcessor::with_reader(chart, Box::new(FixedReader))
            .process()
            .unwrap();

        assert_eq!(spec.x_values, vec![AxisValue::Text("a".to_string())]);
        assert_eq!(spec.y_values, vec![1.0]);
    }

    #[test]
    fn test_csv_with_undetectable_delimiter_fails() {
        let file = csv_fixture("x:y\n0:1\n1:2\n");

        let err = process(&csv_script(&file, "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not determine delimiter. Allowed delimiters are ,;|~"
        );
    }
}
