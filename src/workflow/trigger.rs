use std::sync::OnceLock;

use regex::Regex;

static TRIGGER_RE: OnceLock<Regex> = OnceLock::new();

fn trigger_re() -> &'static Regex {
    TRIGGER_RE.get_or_init(|| {
        Regex::new(r"(?i)\bcheck\s+@([\w\-]+)").expect("trigger pattern is valid")
    })
}

/// Extract the username from a `check @username` trigger phrase.
pub fn extract_username(body: &str) -> Option<String> {
    trigger_re()
        .captures(body)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_trigger() {
        assert_eq!(
            extract_username("Please check @alice for me"),
            Some("alice".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            extract_username("Check @Bob123"),
            Some("Bob123".to_string())
        );
    }

    #[test]
    fn test_hyphenated_username() {
        assert_eq!(
            extract_username("check @jane-doe please"),
            Some("jane-doe".to_string())
        );
    }

    #[test]
    fn test_rejects_partial_word() {
        assert_eq!(extract_username("checking @x"), None);
    }

    #[test]
    fn test_rejects_missing_at() {
        assert_eq!(extract_username("check alice"), None);
    }

    #[test]
    fn test_rejects_empty_body() {
        assert_eq!(extract_username(""), None);
    }

    #[test]
    fn test_trigger_spans_whitespace() {
        assert_eq!(
            extract_username("check\n@alice"),
            Some("alice".to_string())
        );
    }
}
