// tests/finder_tests.rs

use nodeql::error::ParserError;
use nodeql::finder::Finder;

// ============================================================================
// Condition Assembly
// ============================================================================

#[test]
fn test_filter_and_types_are_joined_with_and() {
    let query = Finder::new("en")
        .filter("published = true").unwrap()
        .r#type("article")
        .query();

    assert_eq!(query.condition, "n.published = true AND t.name = 'article'");
}

#[test]
fn test_multiple_types_are_grouped() {
    let query = Finder::new("en").types(&["article", "page"]).query();

    assert_eq!(
        query.condition,
        "(t.name = 'article' OR t.name = 'page')"
    );
}

#[test]
fn test_type_names_are_quoted() {
    let query = Finder::new("en").r#type("it's").query();

    assert_eq!(query.condition, "t.name = 'it''s'");
}

#[test]
fn test_empty_finder_produces_empty_condition() {
    let query = Finder::new("en").query();

    assert_eq!(query.condition, "");
    assert_eq!(query.order, "");
}

#[test]
fn test_empty_filter_leaves_types_only() {
    let query = Finder::new("en")
        .filter("  ").unwrap()
        .r#type("article")
        .query();

    assert_eq!(query.condition, "t.name = 'article'");
}

// ============================================================================
// Order, Limit and Flags
// ============================================================================

#[test]
fn test_order_and_limit() {
    let query = Finder::new("en")
        .order("created desc, title").unwrap()
        .limit(20)
        .query();

    assert_eq!(query.order, "ORDER BY n.created DESC, n.content->>'title' ASC");
    assert_eq!(query.limit, Some(20));
}

#[test]
fn test_default_flags_hide_unpublished_and_deleted() {
    let query = Finder::new("en").query();

    assert_eq!(query.published, Some(true));
    assert_eq!(query.deleted, Some(false));
}

#[test]
fn test_flags_can_be_lifted() {
    let query = Finder::new("en")
        .published(None)
        .deleted(Some(true))
        .query();

    assert_eq!(query.published, None);
    assert_eq!(query.deleted, Some(true));
}

// ============================================================================
// Error Propagation
// ============================================================================

#[test]
fn test_filter_errors_propagate() {
    assert_eq!(
        Finder::new("en").filter("title =").map(|_| ()),
        Err(ParserError::InvalidQuery)
    );
}

#[test]
fn test_order_errors_propagate() {
    assert_eq!(
        Finder::new("en").order("").map(|_| ()),
        Err(ParserError::EmptyOrderBy)
    );
}
