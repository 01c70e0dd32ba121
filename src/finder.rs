//! Node finder facade.
//!
//! Collects filter text, sort clauses, type conditions and flags, and
//! assembles the fragments the storage layer embeds into its node query.
//! The finder owns the builtins map and hands it to the compilers; it
//! performs no I/O itself.

use crate::compiler::{quote_string, QueryCompiler};
use crate::error::ParserError;
use crate::order::OrderCompiler;
use crate::resolver::{default_builtins, Builtins};

/// The assembled query fragments for the storage layer.
///
/// `condition` and `order` are ready for direct embedding; an empty
/// `condition` or `order` means the respective clause is omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderQuery {
    pub condition: String,
    pub order: String,
    pub limit: Option<usize>,
    pub published: Option<bool>,
    pub deleted: Option<bool>,
}

/// Builder for node queries.
///
/// ```
/// use nodeql::finder::Finder;
///
/// let query = Finder::new("en")
///     .filter("published = true & title ~ '%news%'").unwrap()
///     .types(&["article", "page"])
///     .order("created desc").unwrap()
///     .limit(20)
///     .query();
///
/// assert!(query.condition.contains("AND"));
/// assert_eq!(query.order, "ORDER BY n.created DESC");
/// ```
pub struct Finder {
    builtins: Builtins,
    content_column: String,
    locale: String,
    filter: String,
    types: String,
    order: String,
    limit: Option<usize>,
    published: Option<bool>,
    deleted: Option<bool>,
}

impl Finder {
    /// A finder over the default builtin map and content column.
    pub fn new(locale: impl Into<String>) -> Self {
        Self::with_builtins(default_builtins(), "n.content", locale)
    }

    pub fn with_builtins(
        builtins: Builtins,
        content_column: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Finder {
            builtins,
            content_column: content_column.into(),
            locale: locale.into(),
            filter: String::new(),
            types: String::new(),
            order: String::new(),
            limit: None,
            // Unpublished and deleted nodes are hidden unless asked for.
            published: Some(true),
            deleted: Some(false),
        }
    }

    /// Compile and store a filter condition, replacing any previous one.
    pub fn filter(mut self, query: &str) -> Result<Self, ParserError> {
        let compiler = QueryCompiler::new(
            self.builtins.clone(),
            self.content_column.clone(),
            self.locale.clone(),
        );
        self.filter = compiler.compile(query)?;

        Ok(self)
    }

    /// Compile and store sort clauses, replacing any previous ones.
    pub fn order(mut self, statement: &str) -> Result<Self, ParserError> {
        let compiler = OrderCompiler::new(
            self.builtins.clone(),
            self.content_column.clone(),
            self.locale.clone(),
        );
        self.order = compiler.compile(statement)?;

        Ok(self)
    }

    /// Restrict results to the given node type names.
    pub fn types(mut self, types: &[&str]) -> Self {
        let conditions: Vec<String> = types
            .iter()
            .map(|name| format!("t.name = {}", quote_string(name)))
            .collect();

        self.types = match conditions.len() {
            0 => String::new(),
            1 => conditions.into_iter().next().unwrap_or_default(),
            _ => format!("({})", conditions.join(" OR ")),
        };

        self
    }

    /// Restrict results to a single node type name.
    pub fn r#type(self, name: &str) -> Self {
        self.types(&[name])
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `Some(flag)` filters on the published state, `None` returns both.
    pub fn published(mut self, published: Option<bool>) -> Self {
        self.published = published;
        self
    }

    /// `Some(flag)` filters on the deleted state, `None` returns both.
    pub fn deleted(mut self, deleted: Option<bool>) -> Self {
        self.deleted = deleted;
        self
    }

    /// Assemble the collected fragments.
    pub fn query(self) -> FinderQuery {
        let condition = [self.filter.trim(), self.types.trim()]
            .iter()
            .filter(|clause| !clause.is_empty())
            .cloned()
            .collect::<Vec<&str>>()
            .join(" AND ");

        FinderQuery {
            condition,
            order: self.order,
            limit: self.limit,
            published: self.published,
            deleted: self.deleted,
        }
    }
}
