//! Abstract Syntax Tree (AST) for filter expressions.

use std::fmt;

/// Comparison operator of a single filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignOp {
    // ==================== Scalar Operators ====================
    /// `=`
    Eq,

    /// `!=`
    Neq,

    /// `~`
    Like,

    /// `!~`
    NotLike,

    /// `<`
    Lt,

    /// `<=`
    Lte,

    /// `>`
    Gt,

    /// `>=`
    Gte,

    // ==================== Any Operators ====================
    /// `?=`
    AnyEq,

    /// `?!=`
    AnyNeq,

    /// `?~`
    AnyLike,

    /// `?!~`
    AnyNotLike,

    /// `?<`
    AnyLt,

    /// `?<=`
    AnyLte,

    /// `?>`
    AnyGt,

    /// `?>=`
    AnyGte,
}

impl SignOp {
    /// Every operator, ordered so that longer symbols come before their prefixes.
    pub(crate) const LONGEST_FIRST: [SignOp; 16] = [
        SignOp::AnyNotLike,
        SignOp::AnyNeq,
        SignOp::AnyLte,
        SignOp::AnyGte,
        SignOp::AnyEq,
        SignOp::AnyLike,
        SignOp::AnyLt,
        SignOp::AnyGt,
        SignOp::Neq,
        SignOp::NotLike,
        SignOp::Lte,
        SignOp::Gte,
        SignOp::Eq,
        SignOp::Like,
        SignOp::Lt,
        SignOp::Gt,
    ];

    /// Returns the operator as written in a filter expression.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignOp::Eq => "=",
            SignOp::Neq => "!=",
            SignOp::Like => "~",
            SignOp::NotLike => "!~",
            SignOp::Lt => "<",
            SignOp::Lte => "<=",
            SignOp::Gt => ">",
            SignOp::Gte => ">=",
            SignOp::AnyEq => "?=",
            SignOp::AnyNeq => "?!=",
            SignOp::AnyLike => "?~",
            SignOp::AnyNotLike => "?!~",
            SignOp::AnyLt => "?<",
            SignOp::AnyLte => "?<=",
            SignOp::AnyGt => "?>",
            SignOp::AnyGte => "?>=",
        }
    }

    /// Returns true for the `?`-prefixed array/membership operators.
    pub fn is_any(&self) -> bool {
        matches!(
            self,
            SignOp::AnyEq
                | SignOp::AnyNeq
                | SignOp::AnyLike
                | SignOp::AnyNotLike
                | SignOp::AnyLt
                | SignOp::AnyLte
                | SignOp::AnyGt
                | SignOp::AnyGte
        )
    }
}

impl fmt::Display for SignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean combinator between sibling expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinOp {
    /// `&&`
    And,

    /// `||`
    Or,
}

impl JoinOp {
    /// Returns the combinator as written in a filter expression.
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOp::And => "&&",
            JoinOp::Or => "||",
        }
    }
}

impl fmt::Display for JoinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A bare name, usually a column (`status`, `data.user_id`).
    Identifier(String),

    /// A numeric literal, kept verbatim (`-1.5`).
    Number(String),

    /// A quoted string with the quotes removed.
    Text(String),
}

impl Operand {
    /// The literal text of the operand as sent on the wire.
    pub fn literal(&self) -> &str {
        match self {
            Operand::Identifier(s) | Operand::Number(s) | Operand::Text(s) => s,
        }
    }
}

/// A single comparison, e.g. `status >= 400`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// Left operand, typically the column name.
    pub left: Operand,
    /// Comparison operator.
    pub op: SignOp,
    /// Right operand, the comparison value.
    pub right: Operand,
}

impl Expr {
    /// Creates a new comparison.
    pub fn new(left: Operand, op: SignOp, right: Operand) -> Self {
        Self { left, op, right }
    }
}

/// Represents a parsed filter expression.
///
/// Each nesting level is either a single comparison or a list of children
/// combined with one boolean operator, so `&&` and `||` can never be mixed
/// on the same level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A single comparison.
    Leaf(Expr),

    /// All children must match.
    And(Vec<Group>),

    /// Any child must match.
    Or(Vec<Group>),
}

impl Group {
    /// Creates a leaf group for `left op right`.
    ///
    /// # Example
    ///
    /// ```
    /// use listq_filter::filter::{Group, Operand, SignOp};
    ///
    /// let group = Group::compare("status", SignOp::Gte, Operand::Number("400".into()));
    /// assert!(matches!(group, Group::Leaf(_)));
    /// ```
    pub fn compare(column: impl Into<String>, op: SignOp, value: Operand) -> Self {
        Group::Leaf(Expr::new(Operand::Identifier(column.into()), op, value))
    }

    /// Combines children with the given join operator.
    pub fn join(op: JoinOp, children: Vec<Group>) -> Self {
        match op {
            JoinOp::And => Group::And(children),
            JoinOp::Or => Group::Or(children),
        }
    }
}

impl From<Expr> for Group {
    fn from(expr: Expr) -> Self {
        Group::Leaf(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_op_round_trips_through_as_str() {
        for op in SignOp::LONGEST_FIRST {
            let symbol = op.as_str();
            let matched = SignOp::LONGEST_FIRST
                .iter()
                .find(|candidate| symbol.starts_with(candidate.as_str()))
                .copied();
            assert_eq!(matched, Some(op), "prefix shadowing for {symbol}");
        }
    }

    #[test]
    fn test_is_any() {
        assert!(SignOp::AnyEq.is_any());
        assert!(SignOp::AnyGte.is_any());
        assert!(!SignOp::Eq.is_any());
        assert!(!SignOp::NotLike.is_any());
    }

    #[test]
    fn test_operand_literal() {
        assert_eq!(Operand::Identifier("col".into()).literal(), "col");
        assert_eq!(Operand::Number("-2.5".into()).literal(), "-2.5");
        assert_eq!(Operand::Text("GET".into()).literal(), "GET");
    }

    #[test]
    fn test_join_builds_matching_variant() {
        assert_eq!(Group::join(JoinOp::And, vec![]), Group::And(vec![]));
        assert_eq!(Group::join(JoinOp::Or, vec![]), Group::Or(vec![]));
    }
}
