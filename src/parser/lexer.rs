//! Lexer for the chartql DSL.
//!
//! Converts source text into a stream of [`Token`]s. Whitespace is
//! insignificant between tokens. String literals are double-quoted and the
//! raw token value keeps the quotes.

use super::error::ParseError;
use super::token::{Token, TokenKind};

/// Token classes that can begin a token, reported when no token can start
/// at the current character.
const TOKEN_STARTS: [&str; 7] = ["IDENTIFIER", "NUMBER", "STRING", "[", "]", ",", ";"];

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.line, self.col));
                break;
            }

            let ch = self.peek();
            let token = match ch {
                '[' => self.single_char(TokenKind::LBracket),
                ']' => self.single_char(TokenKind::RBracket),
                ',' => self.single_char(TokenKind::Comma),
                ';' => self.single_char(TokenKind::Semicolon),
                '"' => self.lex_string()?,
                '-' => self.lex_number()?,
                '0'..='9' => self.lex_number()?,
                'a'..='z' | 'A'..='Z' | '_' => self.lex_ident_or_keyword(),
                _ => {
                    return Err(ParseError::new(
                        ch.to_string(),
                        self.line,
                        self.col,
                        TOKEN_STARTS.iter().map(|s| s.to_string()).collect(),
                    ));
                }
            };

            tokens.push(token);
        }

        Ok(tokens)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let line = self.line;
        let col = self.col;
        self.advance();
        Token::new(kind, line, col)
    }

    /// Lex a double-quoted string literal. The raw token value keeps the
    /// surrounding quotes; downstream consumers strip them.
    fn lex_string(&mut self) -> Result<Token, ParseError> {
        let line = self.line;
        let col = self.col;
        let mut raw = String::new();
        raw.push(self.advance()); // opening quote

        loop {
            if self.is_at_end() {
                return Err(ParseError::new(
                    "end of input",
                    self.line,
                    self.col,
                    vec!["\"".to_string()],
                ));
            }
            let ch = self.advance();
            raw.push(ch);
            if ch == '"' {
                break;
            }
        }

        Ok(Token::new(TokenKind::Str(raw), line, col))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let line = self.line;
        let col = self.col;
        let mut raw = String::new();

        if self.peek() == '-' {
            if !self.peek_next().is_some_and(|c| c.is_ascii_digit() || c == '.') {
                return Err(ParseError::new(
                    "-".to_string(),
                    line,
                    col,
                    vec!["NUMBER".to_string()],
                ));
            }
            raw.push(self.advance());
        }

        while !self.is_at_end() && (self.peek().is_ascii_digit() || self.peek() == '.') {
            raw.push(self.advance());
        }

        let value: f64 = raw.parse().map_err(|_| {
            ParseError::new(raw.clone(), line, col, vec!["NUMBER".to_string()])
        })?;

        Ok(Token::new(TokenKind::Number(raw, value), line, col))
    }

    fn lex_ident_or_keyword(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        let mut name = String::new();

        while !self.is_at_end()
            && (self.peek().is_ascii_alphanumeric() || self.peek() == '_')
        {
            name.push(self.advance());
        }

        let kind = TokenKind::keyword(&name).unwrap_or(TokenKind::Ident(name));
        Token::new(kind, line, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lexes_keywords_and_literals() {
        let tokens = kinds("CREATE CHART \"foo\" VALUES [-1,2] [4,5];");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Create,
                TokenKind::Chart,
                TokenKind::Str("\"foo\"".to_string()),
                TokenKind::Values,
                TokenKind::LBracket,
                TokenKind::Number("-1".to_string(), -1.0),
                TokenKind::Comma,
                TokenKind::Number("2".to_string(), 2.0),
                TokenKind::RBracket,
                TokenKind::LBracket,
                TokenKind::Number("4".to_string(), 4.0),
                TokenKind::Comma,
                TokenKind::Number("5".to_string(), 5.0),
                TokenKind::RBracket,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_token_keeps_quotes() {
        let tokens = kinds("\"a b\"");
        assert_eq!(tokens[0], TokenKind::Str("\"a b\"".to_string()));
    }

    #[test]
    fn test_lowercase_words_are_identifiers() {
        let tokens = kinds("create foo");
        assert_eq!(tokens[0], TokenKind::Ident("create".to_string()));
        assert_eq!(tokens[1], TokenKind::Ident("foo".to_string()));
    }

    #[test]
    fn test_tracks_line_and_column() {
        let tokens = Lexer::new("CREATE\n  CHART").tokenize().unwrap();
        assert_eq!((tokens[0].line, tokens[0].col), (0, 0));
        assert_eq!((tokens[1].line, tokens[1].col), (1, 2));
    }

    #[test]
    fn test_rejects_unexpected_character() {
        let err = Lexer::new("CREATE @").tokenize().unwrap_err();
        assert_eq!(err.found, "@");
        assert_eq!((err.line, err.column), (0, 7));
    }

    #[test]
    fn test_unexpected_character_lists_acceptable_token_classes() {
        let err = Lexer::new("CREATE @").tokenize().unwrap_err();

        assert!(err.expected.contains(&"IDENTIFIER".to_string()));
        assert!(err.expected.contains(&"NUMBER".to_string()));
        assert!(err.expected.contains(&"STRING".to_string()));
        assert!(err.to_string().contains("Expected one of"));
    }
}
