/// Fine-grained token classification.
///
/// This is a closed set: the lexer decides the type of every token and the
/// compilers only ever match over it, never over lexemes or runtime types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Parentheses
    /// Opening parenthesis for grouping
    LeftParen,

    /// Closing parenthesis
    RightParen,

    // Operands
    /// Field name resolved against the node's JSON document
    ///
    /// # Examples
    /// ```text
    /// title
    /// name.de-DE
    /// ```
    Field,

    /// Field name backed by a fixed column
    ///
    /// Only names present in the builtin set given to the lexer are
    /// classified as builtins.
    ///
    /// # Examples
    /// ```text
    /// published
    /// created
    /// ```
    Builtin,

    /// The node's computed per-locale URL path
    ///
    /// # Examples
    /// ```text
    /// path
    /// path.de-DE
    /// ```
    Path,

    /// String literal enclosed in single or double quotes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// '%launch%'
    /// ```
    String,

    /// Numeric literal, optionally negative, optionally with a fraction
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -13.73
    /// ```
    Number,

    /// Boolean literal (`true`/`false`)
    Boolean,

    /// Null literal
    Null,

    /// Reserved word with special compilation, currently only `now`
    Keyword,

    // Comparison operators
    /// Equality (`=`)
    Equal,

    /// Inequality (`!=`)
    Unequal,

    /// Less than (`<`)
    Less,

    /// Greater than (`>`)
    Greater,

    /// Less than or equal (`<=`)
    LessEqual,

    /// Greater than or equal (`>=`)
    GreaterEqual,

    /// Case-sensitive pattern match (`~~`)
    Like,

    /// Negated case-sensitive pattern match (`!~~`)
    Unlike,

    /// Case-insensitive pattern match (`~`)
    ILike,

    /// Negated case-insensitive pattern match (`!~`)
    IUnlike,

    // Boolean operators
    /// Boolean conjunction (`&`)
    And,

    /// Boolean disjunction (`|`)
    Or,
}

impl TokenType {
    /// The coarse group this type belongs to.
    pub fn group(&self) -> TokenGroup {
        match self {
            TokenType::LeftParen => TokenGroup::LeftParen,
            TokenType::RightParen => TokenGroup::RightParen,
            TokenType::Field
            | TokenType::Builtin
            | TokenType::Path
            | TokenType::String
            | TokenType::Number
            | TokenType::Boolean
            | TokenType::Null
            | TokenType::Keyword => TokenGroup::Operand,
            TokenType::Equal
            | TokenType::Unequal
            | TokenType::Less
            | TokenType::Greater
            | TokenType::LessEqual
            | TokenType::GreaterEqual
            | TokenType::Like
            | TokenType::Unlike
            | TokenType::ILike
            | TokenType::IUnlike => TokenGroup::Operator,
            TokenType::And | TokenType::Or => TokenGroup::BooleanOperator,
        }
    }
}

/// Coarse token classification, derived purely from [`TokenType`].
///
/// The parser's grammar is phrased over groups: a comparison is
/// `Operand Operator Operand`, and complete sub-expressions are connected
/// with `BooleanOperator` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGroup {
    /// Opening parenthesis
    LeftParen,

    /// Closing parenthesis
    RightParen,

    /// Field references and literals
    Operand,

    /// Comparison and pattern-match operators
    Operator,

    /// `&` and `|`
    BooleanOperator,
}

/// A single lexeme with its classification and source offset.
///
/// Tokens are immutable and only ever created by the lexer. The `group`
/// is always `kind.group()`; it is stored on the token so consumers can
/// match on it without recomputing.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Fine-grained type
    pub kind: TokenType,

    /// Coarse group, derived from `kind`
    pub group: TokenGroup,

    /// The token's text with string escapes already resolved
    pub lexeme: String,

    /// Offset of the token's first character in the query text
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            group: kind.group(),
            lexeme: lexeme.into(),
            position,
        }
    }
}
