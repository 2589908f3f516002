//! Recursive descent parser for filter expressions.

use super::ast::{Expr, Group, JoinOp, Operand, SignOp};
use super::error::{FilterError, FilterResult};
use super::lexer::{FilterToken, Lexer, LexerResult};

/// Parser for filter expressions.
///
/// # Grammar
///
/// ```text
/// expression ::= term (join term)*
/// term       ::= "(" expression ")" | comparison
/// comparison ::= operand sign operand
/// operand    ::= identifier | number | text
/// join       ::= "&&" | "||"
/// sign       ::= "=" | "!=" | "~" | "!~" | "<" | "<=" | ">" | ">="
///              | "?=" | "?!=" | "?~" | "?!~" | "?<" | "?<=" | "?>" | "?>="
/// ```
///
/// All joins of one `expression` must be the same operator. `a && b || c`
/// is rejected with [`FilterError::AmbiguousJoin`]; write `(a && b) || c`.
///
/// # Example
///
/// ```
/// use listq_filter::filter::{FilterParser, Group};
///
/// let filter = FilterParser::parse("a = 1").unwrap();
/// assert!(matches!(filter, Group::Leaf(_)));
///
/// let filter = FilterParser::parse("(a = 1 && b = 2) || c = 3").unwrap();
/// assert!(matches!(filter, Group::Or(_)));
/// ```
pub struct FilterParser {
    tokens: Vec<FilterToken>,
    position: usize,
    /// Number of currently open parentheses.
    depth: usize,
}

impl FilterParser {
    /// Deepest parenthesis nesting accepted by [`FilterParser::parse`].
    pub const MAX_NESTING_DEPTH: usize = 64;
}

impl FilterParser {
    /// Parses a filter expression string into a [`Group`] tree.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyExpression` if the input contains no tokens.
    ///
    /// Returns the first lexer error (`UnexpectedCharacter`, `UnterminatedText`)
    /// if the input could not be tokenized.
    ///
    /// Returns `FilterError::AmbiguousJoin` if `&&` and `||` are mixed on one
    /// level, and `UnexpectedToken`, `UnexpectedEndOfInput` or
    /// `UnclosedParenthesis` for other malformed input, and `TooDeep` when
    /// parentheses nest deeper than [`FilterParser::MAX_NESTING_DEPTH`].
    pub fn parse(input: &str) -> FilterResult<Group> {
        if input.trim().is_empty() {
            return Err(FilterError::EmptyExpression);
        }

        let LexerResult { tokens, errors } = Lexer::new(input).tokenize_with_errors();
        if let Some(err) = errors.into_iter().next() {
            return Err(err.into());
        }
        if tokens.is_empty() {
            return Err(FilterError::EmptyExpression);
        }

        let mut parser = Self {
            tokens: tokens.into_iter().map(|pt| pt.token).collect(),
            position: 0,
            depth: 0,
        };
        let group = parser.parse_expression()?;

        // Check that we consumed all tokens
        if let Some(remaining) = parser.peek() {
            return Err(FilterError::unexpected_token(remaining.to_string()));
        }

        Ok(group)
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&FilterToken> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<FilterToken> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Returns the join operator at the current position, if any.
    fn peek_join(&self) -> Option<JoinOp> {
        match self.peek() {
            Some(FilterToken::Join(op)) => Some(*op),
            _ => None,
        }
    }

    /// Parses `term (join term)*`.
    ///
    /// A single term is returned as-is, so redundant parentheses never add
    /// a nesting level.
    fn parse_expression(&mut self) -> FilterResult<Group> {
        let first = self.parse_term()?;
        let Some(join) = self.peek_join() else {
            return Ok(first);
        };

        let mut children = vec![first];
        while let Some(next) = self.peek_join() {
            if next != join {
                return Err(FilterError::AmbiguousJoin);
            }
            self.advance();
            children.push(self.parse_term()?);
        }

        Ok(Group::join(join, children))
    }

    /// Parses `"(" expression ")" | comparison`.
    fn parse_term(&mut self) -> FilterResult<Group> {
        let token = self.advance().ok_or(FilterError::UnexpectedEndOfInput)?;

        match token {
            FilterToken::OpenParen => {
                if self.depth >= Self::MAX_NESTING_DEPTH {
                    return Err(FilterError::TooDeep {
                        max_depth: Self::MAX_NESTING_DEPTH,
                    });
                }
                self.depth += 1;
                let inner = self.parse_expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(FilterToken::CloseParen) => Ok(inner),
                    Some(other) => Err(FilterError::unexpected_token(other.to_string())),
                    None => Err(FilterError::UnclosedParenthesis),
                }
            }
            token => {
                let left = Self::operand(token)?;
                let op = self.parse_sign()?;
                let right = self.parse_operand()?;
                Ok(Group::Leaf(Expr::new(left, op, right)))
            }
        }
    }

    fn parse_sign(&mut self) -> FilterResult<SignOp> {
        match self.advance() {
            Some(FilterToken::Sign(op)) => Ok(op),
            Some(other) => Err(FilterError::unexpected_token(other.to_string())),
            None => Err(FilterError::UnexpectedEndOfInput),
        }
    }

    fn parse_operand(&mut self) -> FilterResult<Operand> {
        let token = self.advance().ok_or(FilterError::UnexpectedEndOfInput)?;
        Self::operand(token)
    }

    fn operand(token: FilterToken) -> FilterResult<Operand> {
        match token {
            FilterToken::Identifier(s) => Ok(Operand::Identifier(s)),
            FilterToken::Number(s) => Ok(Operand::Number(s)),
            FilterToken::Text(s) => Ok(Operand::Text(s)),
            other => Err(FilterError::unexpected_token(other.to_string())),
        }
    }
}
