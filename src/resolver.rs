//! Field resolution.
//!
//! Operand names fall into three backing-store categories: builtins map to
//! fixed columns, `path` maps to the node's per-locale URL path document,
//! and everything else is looked up inside the node's JSON content
//! document.

use std::collections::HashMap;

use crate::accessor::compile_json_accessor;
use crate::ast::{Token, TokenType};
use crate::error::ParserError;

/// Immutable mapping of builtin field names to column expressions.
pub type Builtins = HashMap<String, String>;

/// Column holding the per-locale URL paths of a node.
const PATHS_COLUMN: &str = "n.paths";

/// The builtin fields every node carries, mapped to their columns.
pub fn default_builtins() -> Builtins {
    [
        ("changed", "n.changed"),
        ("classname", "t.classname"),
        ("created", "n.created"),
        ("creator", "uc.uid"),
        ("deleted", "n.deleted"),
        ("editor", "ue.uid"),
        ("id", "n.uid"),
        ("kind", "t.kind"),
        ("locked", "n.locked"),
        ("published", "n.published"),
        ("type", "t.name"),
        ("uid", "n.uid"),
    ]
    .into_iter()
    .map(|(name, column)| (name.to_string(), column.to_string()))
    .collect()
}

/// Load a builtins map from a JSON object of name/column pairs.
pub fn builtins_from_json(json: &str) -> Result<Builtins, serde_json::Error> {
    serde_json::from_str(json)
}

/// Resolves field-like operands to backing-store expressions.
///
/// Constructed once per compiler with the builtins map, the content
/// document column, and the active locale id; holds no other state.
pub struct FieldResolver {
    builtins: Builtins,
    content_column: String,
    locale: String,
}

impl FieldResolver {
    pub fn new(
        builtins: Builtins,
        content_column: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        FieldResolver {
            builtins,
            content_column: content_column.into(),
            locale: locale.into(),
        }
    }

    /// Resolve a field-like operand token.
    ///
    /// Builtin tokens always hit the map since the lexer classifies them
    /// against the same set of names; a miss still reports a malformed
    /// query instead of panicking.
    pub fn resolve(&self, token: &Token) -> Result<String, ParserError> {
        match token.kind {
            TokenType::Builtin => self
                .builtins
                .get(&token.lexeme)
                .cloned()
                .ok_or(ParserError::InvalidQuery),
            TokenType::Path => Ok(self.resolve_path(&token.lexeme)),
            TokenType::Field => Ok(compile_json_accessor(&token.lexeme, &self.content_column)),
            _ => Err(ParserError::InvalidQuery),
        }
    }

    /// Resolve a bare identifier from an order statement the same way the
    /// filter grammar would: builtin lookup first, then the path field,
    /// then the content accessor.
    pub fn resolve_name(&self, name: &str) -> String {
        if let Some(column) = self.builtins.get(name) {
            return column.clone();
        }

        if name == "path" || name.starts_with("path.") {
            return self.resolve_path(name);
        }

        compile_json_accessor(name, &self.content_column)
    }

    /// URL paths are stored as a locale-keyed JSON document. A locale
    /// suffix selects that locale's path, a bare `path` selects the
    /// active locale's.
    fn resolve_path(&self, lexeme: &str) -> String {
        let locale = match lexeme.split_once('.') {
            Some((_, locale)) => locale,
            None => self.locale.as_str(),
        };

        format!("{}->>'{}'", PATHS_COLUMN, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> FieldResolver {
        FieldResolver::new(default_builtins(), "n.content", "en")
    }

    #[test]
    fn test_builtin() {
        let token = Token::new(TokenType::Builtin, "published", 0);
        assert_eq!(resolver().resolve(&token).unwrap(), "n.published");
    }

    #[test]
    fn test_path_with_and_without_locale() {
        let bare = Token::new(TokenType::Path, "path", 0);
        let localized = Token::new(TokenType::Path, "path.de-DE", 0);
        assert_eq!(resolver().resolve(&bare).unwrap(), "n.paths->>'en'");
        assert_eq!(resolver().resolve(&localized).unwrap(), "n.paths->>'de-DE'");
    }

    #[test]
    fn test_field_accessor() {
        let token = Token::new(TokenType::Field, "name.de", 0);
        assert_eq!(resolver().resolve(&token).unwrap(), "n.content->'name'->>'de'");
    }
}
