//! Email syntax checks and domain extraction.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Whitespace as browsers define it for `\s`: the ASCII controls, space,
/// the Unicode space separators, line/paragraph separators and BOM. Unlike
/// the regex crate's `\s` it excludes U+0085 and includes U+FEFF.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipientError {
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
}

/// Returns true when `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates `email` and hands it back unchanged on success.
pub fn validate_email(email: &str) -> Result<&str, RecipientError> {
    if is_valid_email(email) {
        Ok(email)
    } else {
        Err(RecipientError::InvalidEmailFormat)
    }
}

/// Returns the text after the first `@`, up to any following `@`.
///
/// Performs no validation: an address without `@` yields an empty domain.
pub fn domain_of(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_address_shapes() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@gmail.com"));
        assert!(is_valid_email("info+tag@company.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for input in [
            "test",
            "test@",
            "@example.com",
            "test@example",
            "test example.com",
            "test@exa mple.com",
            "a@@b.com",
            "",
        ] {
            assert!(!is_valid_email(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn whitespace_matches_browser_definition() {
        assert!(!is_valid_email("a\u{FEFF}b@x.com"));
        assert!(!is_valid_email("a\u{A0}b@x.com"));
        assert!(!is_valid_email("a@x.c\u{3000}om"));
        assert!(!is_valid_email("a\tb@x.com"));
        assert!(is_valid_email("a\u{85}b@x.com"));
    }

    #[test]
    fn validate_email_reports_user_facing_message() {
        let error = validate_email("invalid-email").expect_err("must reject");

        assert_eq!(error, RecipientError::InvalidEmailFormat);
        assert_eq!(error.to_string(), "Please enter a valid email address");
        assert_eq!(validate_email("valid@email.com"), Ok("valid@email.com"));
    }

    #[test]
    fn extracts_domain_after_first_at_sign() {
        assert_eq!(domain_of("test@example.com"), "example.com");
        assert_eq!(domain_of("user@gmail.com"), "gmail.com");
        assert_eq!(domain_of("info@company.co.uk"), "company.co.uk");
        assert_eq!(domain_of("a@b@c.com"), "b");
    }

    #[test]
    fn domain_is_empty_without_at_sign() {
        assert_eq!(domain_of("no-at-sign"), "");
        assert_eq!(domain_of("trailing@"), "");
    }
}
