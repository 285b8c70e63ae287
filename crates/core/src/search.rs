//! Helpers for building safe ILIKE patterns from user search input.

/// Build a `%...%` substring pattern for ILIKE, escaping the LIKE
/// metacharacters (`\`, `%`, `_`) in the user's query so they match
/// literally.
pub fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_queries_in_wildcards() {
        assert_eq!(like_pattern("matrix"), "%matrix%");
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }
}
