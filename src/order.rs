//! Order compilation.
//!
//! Turns a comma-separated sort statement like `name desc, path` into an
//! `ORDER BY` fragment. Identifiers resolve exactly like filter operands:
//! builtin lookup first, then the path field, then the content document
//! accessor.

use regex::Regex;

use crate::error::ParserError;
use crate::resolver::{Builtins, FieldResolver};

/// Compiles sort statements into `ORDER BY` fragments.
///
/// ```
/// use nodeql::order::OrderCompiler;
/// use nodeql::resolver::default_builtins;
///
/// let compiler = OrderCompiler::new(default_builtins(), "n.content", "en");
/// let order = compiler.compile("created desc, title").unwrap();
///
/// assert_eq!(order, "ORDER BY n.created DESC, n.content->>'title' ASC");
/// ```
pub struct OrderCompiler {
    resolver: FieldResolver,
    clause: Regex,
}

impl OrderCompiler {
    pub fn new(
        builtins: Builtins,
        content_column: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        OrderCompiler {
            resolver: FieldResolver::new(builtins, content_column, locale),
            clause: Regex::new(r"(?i)^([a-z][a-z0-9.-]*)\s*(asc|desc)?$")
                .expect("clause pattern compiles"),
        }
    }

    /// Compile `statement` into an `ORDER BY` fragment.
    ///
    /// Each comma-separated clause is a single identifier optionally
    /// followed by `asc` or `desc` (case-insensitive, default ascending).
    /// Unlike the filter side, an empty statement is an error: there is no
    /// meaningful empty sort.
    pub fn compile(&self, statement: &str) -> Result<String, ParserError> {
        if statement.trim().is_empty() {
            return Err(ParserError::EmptyOrderBy);
        }

        let mut expressions = Vec::new();

        for clause in statement.split(',') {
            let captures = self
                .clause
                .captures(clause.trim())
                .ok_or(ParserError::InvalidQuery)?;

            let expression = self.resolver.resolve_name(&captures[1]);
            let direction = captures
                .get(2)
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_else(|| "ASC".to_string());

            expressions.push(format!("{} {}", expression, direction));
        }

        Ok(format!("ORDER BY {}", expressions.join(", ")))
    }
}
