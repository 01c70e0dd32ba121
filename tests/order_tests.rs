// tests/order_tests.rs

use nodeql::error::ParserError;
use nodeql::order::OrderCompiler;
use nodeql::resolver::default_builtins;

fn compile(statement: &str) -> Result<String, ParserError> {
    OrderCompiler::new(default_builtins(), "n.content", "en").compile(statement)
}

// ============================================================================
// Resolution and Directions
// ============================================================================

#[test]
fn test_field_and_path_resolution() {
    assert_eq!(
        compile("name desc, path").unwrap(),
        "ORDER BY n.content->>'name' DESC, n.paths->>'en' ASC"
    );
}

#[test]
fn test_builtin_resolution() {
    assert_eq!(compile("created desc").unwrap(), "ORDER BY n.created DESC");
    assert_eq!(compile("published").unwrap(), "ORDER BY n.published ASC");
}

#[test]
fn test_locale_coded_clauses() {
    assert_eq!(
        compile("title.en desc, path.de-DE").unwrap(),
        "ORDER BY n.content->'title'->>'en' DESC, n.paths->>'de-DE' ASC"
    );
}

#[test]
fn test_direction_is_case_insensitive() {
    assert_eq!(compile("title DeSc").unwrap(), "ORDER BY n.content->>'title' DESC");
    assert_eq!(compile("title ASC").unwrap(), "ORDER BY n.content->>'title' ASC");
}

#[test]
fn test_clause_whitespace_is_tolerated() {
    assert_eq!(
        compile("  title   desc ,  created  ").unwrap(),
        "ORDER BY n.content->>'title' DESC, n.created ASC"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_order_by_clause() {
    let error = compile("").unwrap_err();
    assert_eq!(error, ParserError::EmptyOrderBy);
    assert_eq!(error.to_string(), "Empty order by clause");

    assert_eq!(compile(" \t\n "), Err(ParserError::EmptyOrderBy));
}

#[test]
fn test_invalid_clauses() {
    assert_eq!(compile("name desc asc"), Err(ParserError::InvalidQuery));
    assert_eq!(compile("1name"), Err(ParserError::InvalidQuery));
    assert_eq!(compile("na me"), Err(ParserError::InvalidQuery));
    assert_eq!(compile("name,,created"), Err(ParserError::InvalidQuery));
    assert_eq!(compile("name; drop"), Err(ParserError::InvalidQuery));
}
