use crate::{Dialect, Scanner, SpanKind};

/// Replaces the table prefix marker (usually `#__`) with `prefix`.
///
/// Only plain SQL is rewritten, a marker inside a string literal, a quoted
/// identifier or a comment stays as it is. Without a marker configured the text
/// is returned unchanged.
///
/// ```rust
/// use bindery_core::{Dialect, replace_prefix};
/// let sql = replace_prefix(&Dialect::default(), "SELECT '#__' FROM #__users", "app_");
/// assert_eq!(sql, "SELECT '#__' FROM app_users");
/// ```
pub fn replace_prefix(dialect: &Dialect, sql: &str, prefix: &str) -> String {
    let Some(marker) = dialect.prefix_marker.as_deref() else {
        return sql.to_owned();
    };
    let mut result = String::with_capacity(sql.len());
    for span in Scanner::new(dialect, sql) {
        let text = span.as_str(sql);
        if span.kind == SpanKind::Plain {
            result.push_str(&text.replace(marker, prefix));
        } else {
            result.push_str(text);
        }
    }
    result
}
