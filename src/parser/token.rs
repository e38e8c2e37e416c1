//! Token types for the chartql lexer.

use std::fmt;

/// A token produced by the lexer, with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Line number (0-based)
    pub line: usize,
    /// Column number (0-based)
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    /// The literal text of this token as it appeared in the source.
    ///
    /// String literals keep their surrounding double quotes; stripping them
    /// is the business of downstream consumers, not the lexer.
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Str(raw) => raw.clone(),
            TokenKind::Number(raw, _) => raw.clone(),
            TokenKind::Ident(name) => name.clone(),
            kind => kind.name().to_string(),
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    Create,
    Chart,
    Values,
    XValues,
    YValues,
    From,
    Csv,
    For,
    By,
    Type,

    // Chart type keywords
    Line,
    Scatter,
    Bar,
    Horizontal,

    // Literals
    /// Double-quoted string, raw value including the quotes
    Str(String),
    /// Numeric literal: raw text and parsed value
    Number(String, f64),
    Ident(String),

    // Delimiters
    LBracket,
    RBracket,
    Comma,
    Semicolon,

    // Special
    Eof,
}

impl TokenKind {
    /// Look up the keyword kind for an identifier, if it is one.
    ///
    /// Keywords are case-sensitive: `CREATE` is a keyword, `create` is an
    /// ordinary identifier.
    pub fn keyword(name: &str) -> Option<TokenKind> {
        let kind = match name {
            "CREATE" => TokenKind::Create,
            "CHART" => TokenKind::Chart,
            "VALUES" => TokenKind::Values,
            "XVALUES" => TokenKind::XValues,
            "YVALUES" => TokenKind::YValues,
            "FROM" => TokenKind::From,
            "CSV" => TokenKind::Csv,
            "FOR" => TokenKind::For,
            "BY" => TokenKind::By,
            "TYPE" => TokenKind::Type,
            "LINE" => TokenKind::Line,
            "SCATTER" => TokenKind::Scatter,
            "BAR" => TokenKind::Bar,
            "HORIZONTAL" => TokenKind::Horizontal,
            _ => return None,
        };
        Some(kind)
    }

    /// The grammar-facing name of this token kind, used in error messages
    /// when reporting the set of acceptable tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Create => "CREATE",
            TokenKind::Chart => "CHART",
            TokenKind::Values => "VALUES",
            TokenKind::XValues => "XVALUES",
            TokenKind::YValues => "YVALUES",
            TokenKind::From => "FROM",
            TokenKind::Csv => "CSV",
            TokenKind::For => "FOR",
            TokenKind::By => "BY",
            TokenKind::Type => "TYPE",
            TokenKind::Line => "LINE",
            TokenKind::Scatter => "SCATTER",
            TokenKind::Bar => "BAR",
            TokenKind::Horizontal => "HORIZONTAL",
            TokenKind::Str(_) => "STRING",
            TokenKind::Number(_, _) => "NUMBER",
            TokenKind::Ident(_) => "IDENTIFIER",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "end of input",
        }
    }

    /// True when two kinds are the same variant, ignoring any literal payload.
    pub fn matches(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
