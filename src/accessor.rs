//! JSON document accessor compilation.
//!
//! Node fields live in a JSON document column; a dotted field name like
//! `name.de-DE` addresses a nested value inside it. This module turns such
//! a name into the matching SQL extraction expression.

/// Compile a dotted field name against a JSON document column.
///
/// The first segment is the top-level key of the document, every further
/// segment descends one level, and the final segment is extracted as text:
///
/// ```
/// use nodeql::accessor::compile_json_accessor;
///
/// assert_eq!(compile_json_accessor("title", "n.content"), "n.content->>'title'");
/// assert_eq!(
///     compile_json_accessor("name.de-DE", "n.content"),
///     "n.content->'name'->>'de-DE'"
/// );
/// ```
///
/// Callers pass field names taken from identifier tokens, which cannot
/// contain quote characters, so the segments embed safely.
pub fn compile_json_accessor(field: &str, column: &str) -> String {
    let segments: Vec<&str> = field.split('.').collect();
    let mut expression = String::from(column);

    for segment in &segments[..segments.len() - 1] {
        expression.push_str("->'");
        expression.push_str(segment);
        expression.push('\'');
    }

    expression.push_str("->>'");
    expression.push_str(segments[segments.len() - 1]);
    expression.push('\'');

    expression
}

#[test]
fn test_single_segment() {
    assert_eq!(compile_json_accessor("title", "p.content"), "p.content->>'title'");
}

#[test]
fn test_nested_segments() {
    assert_eq!(
        compile_json_accessor("meta.author.name", "p.content"),
        "p.content->'meta'->'author'->>'name'"
    );
}
