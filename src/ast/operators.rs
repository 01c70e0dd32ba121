use crate::ast::TokenType;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    /// Equal (`=`)
    Equal,
    /// Not equal (`!=`)
    Unequal,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Pattern matching
    /// Case-sensitive pattern match (`~~`)
    Like,
    /// Negated case-sensitive pattern match (`!~~`)
    Unlike,
    /// Case-insensitive pattern match (`~`)
    ILike,
    /// Negated case-insensitive pattern match (`!~`)
    IUnlike,
}

impl CompOp {
    /// The operator's spelling in the compiled SQL fragment.
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompOp::Equal => "=",
            CompOp::Unequal => "!=",
            CompOp::Less => "<",
            CompOp::Greater => ">",
            CompOp::LessEqual => "<=",
            CompOp::GreaterEqual => ">=",
            CompOp::Like => "LIKE",
            CompOp::Unlike => "NOT LIKE",
            CompOp::ILike => "ILIKE",
            CompOp::IUnlike => "NOT ILIKE",
        }
    }

    /// Map an operator token type to its operator, `None` for any other type.
    pub fn from_token_type(kind: TokenType) -> Option<Self> {
        match kind {
            TokenType::Equal => Some(CompOp::Equal),
            TokenType::Unequal => Some(CompOp::Unequal),
            TokenType::Less => Some(CompOp::Less),
            TokenType::Greater => Some(CompOp::Greater),
            TokenType::LessEqual => Some(CompOp::LessEqual),
            TokenType::GreaterEqual => Some(CompOp::GreaterEqual),
            TokenType::Like => Some(CompOp::Like),
            TokenType::Unlike => Some(CompOp::Unlike),
            TokenType::ILike => Some(CompOp::ILike),
            TokenType::IUnlike => Some(CompOp::IUnlike),
            _ => None,
        }
    }
}

/// Boolean operators connecting complete sub-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    /// Conjunction (`&`)
    And,
    /// Disjunction (`|`)
    Or,
}

impl BoolOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
        }
    }

    pub fn from_token_type(kind: TokenType) -> Option<Self> {
        match kind {
            TokenType::And => Some(BoolOp::And),
            TokenType::Or => Some(BoolOp::Or),
            _ => None,
        }
    }
}
