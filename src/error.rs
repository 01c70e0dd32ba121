/// Errors raised while lexing or compiling a filter or order statement.
///
/// The input is externally supplied search text, so every failure is
/// detected at the first offending character or token and reported with
/// one of a fixed set of messages. Callers should treat these as
/// client-input validation failures, never as system faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserError {
    /// End of input inside a quoted string
    UnterminatedString,

    /// `!` not followed by `=`, `~` or `~~`
    InvalidOperator,

    /// Unrecognized character
    SyntaxError,

    /// Malformed numeric literal, e.g. a trailing dot
    InvalidNumber,

    /// Empty or all-whitespace order statement
    EmptyOrderBy,

    /// Token stream does not reduce to a valid expression
    InvalidQuery,
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserError::UnterminatedString => write!(f, "Unterminated string"),
            ParserError::InvalidOperator => write!(f, "Invalid operator"),
            ParserError::SyntaxError => write!(f, "Syntax error"),
            ParserError::InvalidNumber => write!(f, "Invalid number"),
            ParserError::EmptyOrderBy => write!(f, "Empty order by clause"),
            ParserError::InvalidQuery => write!(f, "Invalid query"),
        }
    }
}

impl std::error::Error for ParserError {}
