//! Filter compilation.
//!
//! Turns filter query text into a boolean SQL condition fragment ready for
//! embedding into a larger statement's WHERE clause:
//!
//! ```
//! use nodeql::compiler::QueryCompiler;
//! use nodeql::resolver::default_builtins;
//!
//! let compiler = QueryCompiler::new(default_builtins(), "n.content", "en");
//! let condition = compiler.compile("published = true & title ~ '%launch%'").unwrap();
//!
//! assert_eq!(
//!     condition,
//!     "(n.published = true) AND (n.content->>'title' ILIKE '%launch%')"
//! );
//! ```

use crate::ast::{Expr, Token, TokenType};
use crate::error::ParserError;
use crate::lexer::QueryLexer;
use crate::parser::QueryParser;
use crate::resolver::{Builtins, FieldResolver};

/// Compiles filter query text into a condition fragment.
///
/// Holds only the immutable builtins map, the content document column and
/// the active locale id, all fixed at construction; `compile` allocates
/// nothing but local tokens and the transient expression tree, so a single
/// compiler can serve arbitrarily many callers concurrently.
pub struct QueryCompiler {
    lexer: QueryLexer,
    resolver: FieldResolver,
}

impl QueryCompiler {
    pub fn new(
        builtins: Builtins,
        content_column: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        let lexer = QueryLexer::with_builtins(builtins.keys().cloned());

        QueryCompiler {
            lexer,
            resolver: FieldResolver::new(builtins, content_column, locale),
        }
    }

    /// Compile `query` into a condition fragment.
    ///
    /// An empty or all-whitespace query compiles to an empty fragment; the
    /// caller omits the condition entirely in that case.
    pub fn compile(&self, query: &str) -> Result<String, ParserError> {
        let tokens = self.lexer.tokens(query)?;

        match QueryParser::new(tokens).parse()? {
            Some(expr) => self.render(&expr),
            None => Ok(String::new()),
        }
    }

    fn render(&self, expr: &Expr) -> Result<String, ParserError> {
        match expr {
            Expr::Comparison { left, op, right } => Ok(format!(
                "{} {} {}",
                self.render_operand(left)?,
                op.as_sql(),
                self.render_operand(right)?
            )),
            // Both sides are parenthesized so the backing store cannot
            // reapply its own AND-over-OR binding; the language's `&` and
            // `|` share one flat, left-associative precedence level.
            Expr::Boolean { op, left, right } => Ok(format!(
                "({}) {} ({})",
                self.render(left)?,
                op.as_sql(),
                self.render(right)?
            )),
            Expr::Group(inner) => Ok(format!("({})", self.render(inner)?)),
        }
    }

    /// Field references resolve to column expressions, literals render as
    /// safely-quoted literals, on whichever side of the comparison they
    /// appear.
    fn render_operand(&self, token: &Token) -> Result<String, ParserError> {
        match token.kind {
            TokenType::Field | TokenType::Builtin | TokenType::Path => {
                self.resolver.resolve(token)
            }
            TokenType::String => Ok(quote_string(&token.lexeme)),
            TokenType::Number | TokenType::Boolean => Ok(token.lexeme.clone()),
            TokenType::Null => Ok("NULL".to_string()),
            TokenType::Keyword => Ok("NOW()".to_string()),
            _ => Err(ParserError::InvalidQuery),
        }
    }
}

pub(crate) fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
