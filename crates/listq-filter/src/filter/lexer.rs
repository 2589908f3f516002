//! Lexer (tokenizer) for filter expressions.

use super::ast::{JoinOp, SignOp};
use super::error::FilterError;

/// Error encountered during lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The character that could not be tokenized.
        character: char,
        /// The position (0-indexed byte offset) where the error occurred.
        position: usize,
    },

    /// A quoted string that runs to the end of input.
    UnterminatedText {
        /// The position of the opening quote.
        position: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexerError::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "unexpected character '{}' at position {}",
                character, position
            ),
            LexerError::UnterminatedText { position } => {
                write!(f, "unterminated string starting at position {}", position)
            }
        }
    }
}

impl std::error::Error for LexerError {}

impl From<LexerError> for FilterError {
    fn from(err: LexerError) -> Self {
        match err {
            LexerError::UnexpectedCharacter {
                character,
                position,
            } => FilterError::UnexpectedCharacter {
                character,
                position,
            },
            LexerError::UnterminatedText { position } => FilterError::UnterminatedText { position },
        }
    }
}

/// Result of tokenizing a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerResult {
    /// The tokens successfully parsed, with their positions.
    pub tokens: Vec<PositionedToken>,
    /// Any errors encountered.
    pub errors: Vec<LexerError>,
}

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    /// The token.
    pub token: FilterToken,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// A token in a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    // ==================== Operands ====================
    /// A bare name such as `status` or `data.user_id`.
    Identifier(String),

    /// A numeric literal such as `42` or `-0.5`.
    Number(String),

    /// A quoted string, quotes removed and escapes resolved.
    Text(String),

    // ==================== Operators ====================
    /// A comparison operator.
    Sign(SignOp),

    /// `&&` or `||`.
    Join(JoinOp),

    /// Opening parenthesis `(`.
    OpenParen,

    /// Closing parenthesis `)`.
    CloseParen,
}

impl std::fmt::Display for FilterToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterToken::Identifier(s) | FilterToken::Number(s) => f.write_str(s),
            FilterToken::Text(s) => write!(f, "{:?}", s),
            FilterToken::Sign(op) => write!(f, "{}", op),
            FilterToken::Join(op) => write!(f, "{}", op),
            FilterToken::OpenParen => f.write_str("("),
            FilterToken::CloseParen => f.write_str(")"),
        }
    }
}

/// Lexer for tokenizing filter expressions.
pub struct Lexer<'a> {
    input: &'a str,
    /// Current byte position in the input string.
    position: usize,
    /// Errors encountered during tokenization.
    errors: Vec<LexerError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            errors: Vec::new(),
        }
    }

    /// The unconsumed part of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Peeks at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks at the character after the next one.
    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consumes and returns the next character, updating position.
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and `//` line comments.
    fn skip_trivia(&mut self) {
        loop {
            while let Some(c) = self.peek() {
                if c.is_whitespace() {
                    self.next_char();
                } else {
                    break;
                }
            }

            if !self.rest().starts_with("//") {
                return;
            }
            while let Some(c) = self.next_char() {
                if c == '\n' {
                    break;
                }
            }
        }
    }

    fn is_identifier_start(c: char) -> bool {
        c.is_alphabetic() || c == '_' || c == '@' || c == '#'
    }

    fn is_identifier_part(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '_' | '.' | ':' | '@' | '#')
    }

    /// Reads an identifier.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while let Some(c) = self.peek() {
            if Self::is_identifier_part(c) {
                self.next_char();
            } else {
                break;
            }
        }
        self.input[start..self.position].to_string()
    }

    /// Reads digits with an optional sign and fractional part.
    fn read_number(&mut self) -> String {
        let start = self.position;
        if self.peek() == Some('-') {
            self.next_char();
        }
        self.skip_digits();
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.next_char();
            self.skip_digits();
        }
        self.input[start..self.position].to_string()
    }

    fn skip_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a quoted string (single or double quotes).
    ///
    /// Returns `None` if the closing quote is missing.
    fn read_quoted_string(&mut self, quote_char: char) -> Option<String> {
        // Consume the opening quote
        self.next_char();

        let mut result = String::new();
        while let Some(c) = self.next_char() {
            if c == quote_char {
                return Some(result);
            }
            if c == '\\' {
                if let Some(escaped) = self.next_char() {
                    result.push(escaped);
                }
            } else {
                result.push(c);
            }
        }
        None
    }

    /// Matches the longest comparison operator at the current position.
    fn read_sign(&mut self) -> Option<SignOp> {
        let rest = self.rest();
        let op = SignOp::LONGEST_FIRST
            .into_iter()
            .find(|op| rest.starts_with(op.as_str()))?;
        self.position += op.as_str().len();
        Some(op)
    }

    /// Records an unknown character at the current position and skips it.
    fn unexpected_character(&mut self) {
        let position = self.position;
        if let Some(character) = self.next_char() {
            self.errors.push(LexerError::UnexpectedCharacter {
                character,
                position,
            });
        }
    }

    /// Returns the next token with its position, or None if at end of input.
    pub fn next_token(&mut self) -> Option<PositionedToken> {
        loop {
            self.skip_trivia();

            let c = self.peek()?;
            let position = self.position;

            let token = match c {
                '(' => {
                    self.next_char();
                    FilterToken::OpenParen
                }
                ')' => {
                    self.next_char();
                    FilterToken::CloseParen
                }
                '&' | '|' => {
                    let join = if c == '&' { JoinOp::And } else { JoinOp::Or };
                    if self.peek_second() == Some(c) {
                        self.position += 2;
                        FilterToken::Join(join)
                    } else {
                        self.unexpected_character();
                        continue;
                    }
                }
                '"' | '\'' => match self.read_quoted_string(c) {
                    Some(text) => FilterToken::Text(text),
                    None => {
                        self.errors.push(LexerError::UnterminatedText { position });
                        return None;
                    }
                },
                '-' if self.peek_second().is_some_and(|n| n.is_ascii_digit()) => {
                    FilterToken::Number(self.read_number())
                }
                _ if c.is_ascii_digit() => FilterToken::Number(self.read_number()),
                _ if Self::is_identifier_start(c) => FilterToken::Identifier(self.read_identifier()),
                _ => match self.read_sign() {
                    Some(op) => FilterToken::Sign(op),
                    None => {
                        self.unexpected_character();
                        continue;
                    }
                },
            };

            return Some(PositionedToken { token, position });
        }
    }

    /// Collects all tokens into a vector (without positions).
    #[cfg(test)]
    pub fn tokenize(self) -> Vec<FilterToken> {
        self.tokenize_with_errors()
            .tokens
            .into_iter()
            .map(|pt| pt.token)
            .collect()
    }

    /// Collects all tokens and any errors encountered.
    pub fn tokenize_with_errors(mut self) -> LexerResult {
        let mut tokens = Vec::new();
        while let Some(positioned_token) = self.next_token() {
            tokens.push(positioned_token);
        }
        LexerResult {
            tokens,
            errors: self.errors,
        }
    }
}
