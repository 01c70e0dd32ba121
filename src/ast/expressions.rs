use crate::ast::{BoolOp, CompOp, Token};

/// A parsed filter expression.
///
/// The tree is built and rendered within a single compile call and never
/// persisted. Grouping from the query text is kept as explicit [`Expr::Group`]
/// nodes so the compiled fragment reproduces the author's parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single comparison
    ///
    /// # Examples
    /// ```text
    /// published = true
    /// title ~~ "%launch%"
    /// ```
    Comparison {
        left: Token,
        op: CompOp,
        right: Token,
    },

    /// Two complete sub-expressions connected with `&` or `|`
    ///
    /// Left-associative: `a & b | c` parses as `Boolean(Boolean(a, b), c)`.
    Boolean {
        op: BoolOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// An explicitly parenthesized sub-expression
    Group(Box<Expr>),
}
