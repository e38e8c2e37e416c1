//! AST builder - recursive-descent parser over the token stream
//!
//! Single-token-lookahead parser for the chartql grammar. Each grammar rule
//! has one `parse_*` method building the corresponding typed AST node.
//!
//! ```text
//! start              := create_chart ";"
//! create_chart       := "CREATE" "CHART" STRING data_source chart_options?
//! data_source        := data_source_csv | data_source_values
//! data_source_values := "VALUES" "[" x_list "]" "[" y_list "]"
//!                     | "XVALUES" "[" x_list "]" "YVALUES" "[" y_list "]"
//!                     | "YVALUES" "[" y_list "]" "XVALUES" "[" x_list "]"
//! data_source_csv    := "FROM" "CSV" STRING ("FOR" IDENTIFIER "BY" IDENTIFIER)?
//! chart_options      := "TYPE" ("LINE" | "SCATTER" | "BAR" | "HORIZONTAL" "BAR")
//! ```

use super::ast::{ChartOptions, CreateChart, DataSource, Literal, Statement};
use super::error::ParseError;
use super::token::{Token, TokenKind};

const CHART_TYPE_KEYWORDS: [TokenKind; 4] = [
    TokenKind::Line,
    TokenKind::Scatter,
    TokenKind::Bar,
    TokenKind::Horizontal,
];

pub struct Builder {
    tokens: Vec<Token>,
    pos: usize,
}

impl Builder {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the single statement in the token stream.
    pub fn build(&mut self) -> Result<Statement, ParseError> {
        let statement = self.parse_create_chart()?;
        self.expect(&TokenKind::Semicolon)?;
        self.expect(&TokenKind::Eof)?;
        Ok(statement)
    }

    fn parse_create_chart(&mut self) -> Result<Statement, ParseError> {
        self.expect(&TokenKind::Create)?;
        self.expect(&TokenKind::Chart)?;
        let label = self.expect_string()?;
        let source = self.parse_data_source()?;

        let mut options = Vec::new();
        if self.check(&TokenKind::Type) {
            options.push(self.parse_chart_options()?);
        }

        Ok(Statement::CreateChart(CreateChart {
            label,
            source,
            options,
        }))
    }

    fn parse_data_source(&mut self) -> Result<DataSource, ParseError> {
        match self.peek().kind {
            TokenKind::From => self.parse_data_source_csv(),
            TokenKind::Values => {
                self.advance();
                let x = self.parse_x_list()?;
                let y = self.parse_y_list()?;
                Ok(DataSource::Inline { x, y })
            }
            TokenKind::XValues => {
                self.advance();
                let x = self.parse_x_list()?;
                self.expect(&TokenKind::YValues)?;
                let y = self.parse_y_list()?;
                Ok(DataSource::Inline { x, y })
            }
            TokenKind::YValues => {
                self.advance();
                let y = self.parse_y_list()?;
                self.expect(&TokenKind::XValues)?;
                let x = self.parse_x_list()?;
                Ok(DataSource::Inline { x, y })
            }
            _ => Err(self.unexpected(&[
                TokenKind::Values,
                TokenKind::XValues,
                TokenKind::YValues,
                TokenKind::From,
            ])),
        }
    }

    fn parse_data_source_csv(&mut self) -> Result<DataSource, ParseError> {
        self.expect(&TokenKind::From)?;
        self.expect(&TokenKind::Csv)?;
        let path = self.expect_string()?;

        let (x_column, y_column) = if self.check(&TokenKind::For) {
            self.advance();
            let x_column = self.expect_ident()?;
            self.expect(&TokenKind::By)?;
            let y_column = self.expect_ident()?;
            (Some(x_column), Some(y_column))
        } else {
            (None, None)
        };

        Ok(DataSource::Csv {
            path,
            x_column,
            y_column,
        })
    }

    /// A bracketed list of numbers or quoted strings.
    fn parse_x_list(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.expect(&TokenKind::LBracket)?;
        let mut elements = vec![self.parse_x_element()?];
        while self.check(&TokenKind::Comma) {
            self.advance();
            elements.push(self.parse_x_element()?);
        }
        self.expect(&TokenKind::RBracket)?;
        Ok(elements)
    }

    fn parse_x_element(&mut self) -> Result<Literal, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Number(_, value) => {
                self.advance();
                Ok(Literal::Number(value))
            }
            TokenKind::Str(raw) => {
                self.advance();
                Ok(Literal::Text(raw))
            }
            _ => Err(self.unexpected(&[
                TokenKind::Number(String::new(), 0.0),
                TokenKind::Str(String::new()),
            ])),
        }
    }

    /// A bracketed list of numbers only.
    fn parse_y_list(&mut self) -> Result<Vec<f64>, ParseError> {
        self.expect(&TokenKind::LBracket)?;
        let mut elements = vec![self.expect_number()?];
        while self.check(&TokenKind::Comma) {
            self.advance();
            elements.push(self.expect_number()?);
        }
        self.expect(&TokenKind::RBracket)?;
        Ok(elements)
    }

    fn parse_chart_options(&mut self) -> Result<ChartOptions, ParseError> {
        self.expect(&TokenKind::Type)?;

        let chart_type = match self.peek().kind {
            TokenKind::Line | TokenKind::Scatter | TokenKind::Bar => {
                self.advance().kind.name().to_string()
            }
            TokenKind::Horizontal => {
                self.advance();
                self.expect(&TokenKind::Bar)?;
                "HORIZONTAL BAR".to_string()
            }
            _ => return Err(self.unexpected(&CHART_TYPE_KEYWORDS)),
        };

        Ok(ChartOptions { chart_type })
    }

    // ------------------------------------------------------------------
    // Token stream primitives
    // ------------------------------------------------------------------

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().kind.matches(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(std::slice::from_ref(kind)))
        }
    }

    fn expect_string(&mut self) -> Result<String, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Str(raw) => {
                self.advance();
                Ok(raw)
            }
            _ => Err(self.unexpected(&[TokenKind::Str(String::new())])),
        }
    }

    fn expect_number(&mut self) -> Result<f64, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Number(_, value) => {
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected(&[TokenKind::Number(String::new(), 0.0)])),
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(&[TokenKind::Ident(String::new())])),
        }
    }

    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        let token = self.peek();
        let mut names: Vec<String> = expected.iter().map(|k| k.name().to_string()).collect();
        // HORIZONTAL alone is never a complete chart type; report the full keyword
        for name in &mut names {
            if name == "HORIZONTAL" {
                *name = "HORIZONTAL BAR".to_string();
            }
        }
        ParseError::new(token.text(), token.line, token.col, names)
    }
}
