// tests/compiler_tests.rs

use std::collections::HashMap;

use nodeql::error::ParserError;
use nodeql::compiler::QueryCompiler;

fn builtins() -> HashMap<String, String> {
    [
        ("published", "n.published"),
        ("created", "n.created"),
    ]
    .into_iter()
    .map(|(name, column)| (name.to_string(), column.to_string()))
    .collect()
}

fn compile(query: &str) -> Result<String, ParserError> {
    QueryCompiler::new(builtins(), "n.content", "en").compile(query)
}

// ============================================================================
// Single Comparisons
// ============================================================================

#[test]
fn test_field_comparison() {
    assert_eq!(
        compile("title = 'launch'").unwrap(),
        "n.content->>'title' = 'launch'"
    );
}

#[test]
fn test_builtin_comparison() {
    assert_eq!(compile("published = true").unwrap(), "n.published = true");
}

#[test]
fn test_locale_coded_field() {
    assert_eq!(
        compile("name.de-DE = 'Start'").unwrap(),
        "n.content->'name'->>'de-DE' = 'Start'"
    );
}

#[test]
fn test_path_comparisons() {
    assert_eq!(
        compile("path = '/home'").unwrap(),
        "n.paths->>'en' = '/home'"
    );
    assert_eq!(
        compile("path.de != '/start'").unwrap(),
        "n.paths->>'de' != '/start'"
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_number_literals_verbatim() {
    assert_eq!(compile("count > 10").unwrap(), "n.content->>'count' > 10");
    assert_eq!(
        compile("price <= -13.73").unwrap(),
        "n.content->>'price' <= -13.73"
    );
}

#[test]
fn test_now_keyword() {
    assert_eq!(compile("created <= now").unwrap(), "n.created <= NOW()");
}

#[test]
fn test_null_literal() {
    assert_eq!(compile("subtitle = null").unwrap(), "n.content->>'subtitle' = NULL");
}

#[test]
fn test_string_quotes_are_escaped() {
    assert_eq!(
        compile("title = \"O'Reilly\"").unwrap(),
        "n.content->>'title' = 'O''Reilly'"
    );
}

#[test]
fn test_literal_on_the_left() {
    assert_eq!(compile("true = published").unwrap(), "true = n.published");
    assert_eq!(
        compile("13.73 <= price").unwrap(),
        "13.73 <= n.content->>'price'"
    );
}

// ============================================================================
// Pattern Matching
// ============================================================================

#[test]
fn test_pattern_operators() {
    assert_eq!(
        compile("title ~ '%news%'").unwrap(),
        "n.content->>'title' ILIKE '%news%'"
    );
    assert_eq!(
        compile("title !~ '%news%'").unwrap(),
        "n.content->>'title' NOT ILIKE '%news%'"
    );
    assert_eq!(
        compile("title ~~ '%news%'").unwrap(),
        "n.content->>'title' LIKE '%news%'"
    );
    assert_eq!(
        compile("title !~~ '%news%'").unwrap(),
        "n.content->>'title' NOT LIKE '%news%'"
    );
}

// ============================================================================
// Boolean Combinations
// ============================================================================

#[test]
fn test_and_combination() {
    assert_eq!(
        compile("a = 1 & b = 2").unwrap(),
        "(n.content->>'a' = 1) AND (n.content->>'b' = 2)"
    );
}

#[test]
fn test_flat_left_associative_precedence() {
    // `&` does not bind tighter than `|`; both chain left to right.
    assert_eq!(
        compile("a = 1 & b = 2 | c = 3").unwrap(),
        "((n.content->>'a' = 1) AND (n.content->>'b' = 2)) OR (n.content->>'c' = 3)"
    );
    assert_eq!(
        compile("a = 1 | b = 2 & c = 3").unwrap(),
        "((n.content->>'a' = 1) OR (n.content->>'b' = 2)) AND (n.content->>'c' = 3)"
    );
}

#[test]
fn test_explicit_grouping_reappears() {
    assert_eq!(
        compile("(a = 1)").unwrap(),
        "(n.content->>'a' = 1)"
    );
    assert_eq!(
        compile("a = 1 & (b = 2 | c = 3)").unwrap(),
        "(n.content->>'a' = 1) AND (((n.content->>'b' = 2) OR (n.content->>'c' = 3)))"
    );
}

// ============================================================================
// Empty Input
// ============================================================================

#[test]
fn test_empty_filter_compiles_to_empty_fragment() {
    assert_eq!(compile("").unwrap(), "");
    assert_eq!(compile("   \t\n").unwrap(), "");
}

// ============================================================================
// Structural Errors
// ============================================================================

#[test]
fn test_dangling_operator() {
    let error = compile("title =").unwrap_err();
    assert_eq!(error, ParserError::InvalidQuery);
    assert_eq!(error.to_string(), "Invalid query");
}

#[test]
fn test_missing_operand() {
    assert_eq!(compile("= 'x'"), Err(ParserError::InvalidQuery));
}

#[test]
fn test_operand_without_operator() {
    assert_eq!(compile("title"), Err(ParserError::InvalidQuery));
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(compile("title = 'a' 'b'"), Err(ParserError::InvalidQuery));
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(compile("(title = 'a'"), Err(ParserError::InvalidQuery));
    assert_eq!(compile("title = 'a')"), Err(ParserError::InvalidQuery));
}

#[test]
fn test_boolean_operator_without_right_hand_side() {
    assert_eq!(compile("title = 'a' &"), Err(ParserError::InvalidQuery));
}

#[test]
fn test_adversarial_nesting_is_rejected() {
    let query = format!("{}a = 1{}", "(".repeat(500), ")".repeat(500));
    assert_eq!(compile(&query), Err(ParserError::InvalidQuery));
}

#[test]
fn test_lexical_errors_pass_through() {
    assert_eq!(compile("title = \"open"), Err(ParserError::UnterminatedString));
    assert_eq!(compile("title !- 'x'"), Err(ParserError::InvalidOperator));
}
