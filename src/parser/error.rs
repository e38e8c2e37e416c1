//! Parser error types
//!
//! Provides detailed error information for parsing failures, including the
//! offending token, its location, and the set of tokens that would have been
//! acceptable at that point.

use std::fmt;

/// Detailed parse error with location information
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Literal text of the offending token
    pub found: String,
    /// Line number where the error occurred (0-based)
    pub line: usize,
    /// Column number where the error occurred (0-based)
    pub column: usize,
    /// Names of the token kinds that were acceptable at this point
    pub expected: Vec<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(
        found: impl Into<String>,
        line: usize,
        column: usize,
        expected: Vec<String>,
    ) -> Self {
        Self {
            found: found.into(),
            line,
            column,
            expected,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected token `{}` at line {}, column {}.",
            self.found,
            self.line + 1,   // Display as 1-based
            self.column + 1, // Display as 1-based
        )?;
        if !self.expected.is_empty() {
            write!(f, " Expected one of: {}", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
