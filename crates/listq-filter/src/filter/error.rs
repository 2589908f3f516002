//! Error types for filter parsing and flattening.

use thiserror::Error;

use super::ast::SignOp;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while parsing or flattening a filter expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The filter expression is empty.
    #[error("filter expression is empty")]
    EmptyExpression,

    /// A character that cannot start any token.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the input.
        position: usize,
    },

    /// A quoted string without its closing quote.
    #[error("unterminated string starting at position {position}")]
    UnterminatedText {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// An unexpected token was encountered during parsing.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// The unexpected token that was encountered.
        token: String,
    },

    /// An unexpected end of input was encountered.
    #[error("unexpected end of expression")]
    UnexpectedEndOfInput,

    /// An unclosed parenthesis was found.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    /// Parentheses nested beyond what the parser accepts.
    #[error("parentheses nested deeper than {max_depth} levels")]
    TooDeep {
        /// The maximum nesting depth.
        max_depth: usize,
    },

    /// `&&` and `||` mixed on one level without parentheses.
    #[error("No implicit &&/|| precedence")]
    AmbiguousJoin,

    /// An operator the list API has no encoding for.
    #[error("Not supported: {op}")]
    UnsupportedOperator {
        /// The rejected operator.
        op: SignOp,
    },
}

impl FilterError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>) -> Self {
        FilterError::UnexpectedToken {
            token: token.into(),
        }
    }

    /// Creates an unsupported operator error.
    pub fn unsupported(op: SignOp) -> Self {
        FilterError::UnsupportedOperator { op }
    }

    /// Returns true if the input was not a syntactically valid expression.
    pub fn is_parse_error(&self) -> bool {
        !matches!(
            self,
            FilterError::AmbiguousJoin | FilterError::UnsupportedOperator { .. }
        )
    }
}
