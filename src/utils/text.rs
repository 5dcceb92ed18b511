/// Leading `max_chars` characters of `s`, cut on a char boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Like [`truncate_chars`] but marks the cut with `...`.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}...", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_keeps_short_input() {
        assert_eq!(truncate_chars("brief", 20), "brief");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn truncate_chars_cuts_on_char_boundary() {
        assert_eq!(truncate_chars("Test scenario: deter aggression.", 20), "Test scenario: deter");
        assert_eq!(truncate_chars("aé你好", 3), "aé你");
    }

    #[test]
    fn ellipsis_only_when_truncated() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 5), "hello...");
        assert_eq!(truncate_with_ellipsis("This is a long message", 10), "This is a...");
    }

    #[test]
    fn ellipsis_handles_multibyte() {
        assert_eq!(truncate_with_ellipsis("café résumé naïve", 10), "café résum...");
        assert_eq!(truncate_with_ellipsis("hello", 0), "...");
    }
}
