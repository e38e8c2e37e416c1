/*!
chartql Parser Module

Turns chartql source text into a typed AST.

## Architecture

1. **Lexing**: A hand-written lexer converts the source into a token stream,
   tracking line/column positions. Whitespace is insignificant between tokens.

2. **AST Building**: A deterministic, single-token-lookahead recursive-descent
   parser builds the typed AST directly; there is no intermediate concrete
   syntax tree to walk by tag and position.

3. **Validation**: Only syntactic validation happens here. Semantic rules the
   grammar cannot express (bar charts with numeric categories) are deferred to
   chart assembly, when the data is resolved.

## Example Usage

```rust
use chartql::parser::{parse, Statement};

let statement = parse(r#"CREATE CHART "foo" VALUES [1,2,3] [4,5,6] TYPE SCATTER;"#)?;
let Statement::CreateChart(chart) = statement;
assert_eq!(chart.label, "\"foo\"");
assert_eq!(chart.options[0].chart_type, "SCATTER");
# Ok::<(), chartql::ParseError>(())
```
*/

use tracing::debug;

pub mod ast;
pub mod builder;
pub mod error;
pub mod lexer;
pub mod token;

// Re-export key types
pub use ast::*;
pub use error::ParseError;
pub use token::{Token, TokenKind};

/// Main entry point for parsing chartql scripts
///
/// Takes a single statement terminated by `;` and returns its typed AST.
/// Parsing is all-or-nothing: the first syntax error aborts with a
/// [`ParseError`] naming the offending token, its position, and the set of
/// token kinds that would have been acceptable.
pub fn parse(source: &str) -> Result<Statement, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    debug!(count = tokens.len(), "tokenized script");
    builder::Builder::new(tokens).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_chart(source: &str) -> CreateChart {
        let Statement::CreateChart(chart) = parse(source).unwrap();
        chart
    }

    #[test]
    fn test_parses_values_data_source() {
        let chart = parse_chart(r#"CREATE CHART "foo" VALUES [-1,2,3,4] [4,5,6,7];"#);

        assert_eq!(chart.label, "\"foo\"");
        assert_eq!(
            chart.source,
            DataSource::Inline {
                x: vec![
                    Literal::Number(-1.0),
                    Literal::Number(2.0),
                    Literal::Number(3.0),
                    Literal::Number(4.0),
                ],
                y: vec![4.0, 5.0, 6.0, 7.0],
            }
        );
        assert!(chart.options.is_empty());
    }

    #[test]
    fn test_xvalues_yvalues_order_does_not_matter() {
        let forward = parse_chart(r#"CREATE CHART "foo" XVALUES [-1,2] YVALUES [4,5];"#);
        let reversed = parse_chart(r#"CREATE CHART "foo" YVALUES [4,5] XVALUES [-1,2];"#);

        assert_eq!(forward, reversed);
        assert_eq!(
            forward.source,
            DataSource::Inline {
                x: vec![Literal::Number(-1.0), Literal::Number(2.0)],
                y: vec![4.0, 5.0],
            }
        );
    }

    #[test]
    fn test_quoted_strings_in_x_list_keep_quotes() {
        let chart = parse_chart(r#"CREATE CHART "foo" XVALUES ["a", "b"] YVALUES [4,5];"#);

        assert_eq!(
            chart.source,
            DataSource::Inline {
                x: vec![
                    Literal::Text("\"a\"".to_string()),
                    Literal::Text("\"b\"".to_string()),
                ],
                y: vec![4.0, 5.0],
            }
        );
    }

    #[test]
    fn test_parses_chart_type_clause() {
        let chart = parse_chart(r#"CREATE CHART "foo" VALUES [1,2] [4,5] TYPE SCATTER;"#);
        assert_eq!(chart.options.len(), 1);
        assert_eq!(chart.options[0].chart_type, "SCATTER");
    }

    #[test]
    fn test_horizontal_bar_keyword_keeps_interior_space() {
        let chart =
            parse_chart(r#"CREATE CHART "foo" XVALUES ["a"] YVALUES [4] TYPE HORIZONTAL BAR;"#);
        assert_eq!(chart.options[0].chart_type, "HORIZONTAL BAR");
    }

    #[test]
    fn test_parses_csv_data_source_with_defaults() {
        let chart = parse_chart(r#"CREATE CHART "foo" FROM CSV "data/series.csv";"#);

        assert_eq!(
            chart.source,
            DataSource::Csv {
                path: "\"data/series.csv\"".to_string(),
                x_column: None,
                y_column: None,
            }
        );
    }

    #[test]
    fn test_parses_csv_data_source_with_column_bindings() {
        let chart = parse_chart(r#"CREATE CHART "foo" FROM CSV "series.csv" FOR month BY revenue;"#);

        assert_eq!(
            chart.source,
            DataSource::Csv {
                path: "\"series.csv\"".to_string(),
                x_column: Some("month".to_string()),
                y_column: Some("revenue".to_string()),
            }
        );
    }

    #[test]
    fn test_rejects_unknown_command_keyword() {
        let err = parse("CREATE foo;").unwrap_err();

        assert_eq!(err.found, "foo");
        assert_eq!((err.line, err.column), (0, 7));
        assert_eq!(err.expected, vec!["CHART".to_string()]);
    }

    #[test]
    fn test_rejects_unknown_chart_type_keyword() {
        let err = parse(r#"CREATE CHART "foo" VALUES [-1,2,3,4] [4,5,6,7] TYPE FOO;"#).unwrap_err();

        assert_eq!(err.found, "FOO");
        assert!(err.expected.contains(&"LINE".to_string()));
        assert!(err.expected.contains(&"SCATTER".to_string()));
        assert!(err.expected.contains(&"BAR".to_string()));
        assert!(err.expected.contains(&"HORIZONTAL BAR".to_string()));
    }

    #[test]
    fn test_rejects_non_numeric_y_literal() {
        let err = parse(r#"CREATE CHART "foo" XVALUES [1,2] YVALUES ["a","b"];"#).unwrap_err();
        assert_eq!(err.expected, vec!["NUMBER".to_string()]);
    }

    #[test]
    fn test_rejects_missing_semicolon() {
        let err = parse(r#"CREATE CHART "foo" VALUES [1] [2]"#).unwrap_err();
        assert_eq!(err.found, "end of input");
    }

    #[test]
    fn test_error_message_includes_position_and_expectation() {
        let err = parse("CREATE foo;").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("`foo`"));
        assert!(message.contains("line 1, column 8"));
        assert!(message.contains("CHART"));
    }
}
