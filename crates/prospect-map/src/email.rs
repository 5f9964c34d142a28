//! Email shape check shared by inference and the mapping applier.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` shape: non-whitespace non-`@` runs around an `@`, with
/// a `.` in the domain part.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern"));

/// Returns true when the trimmed value has a plausible email shape.
///
/// This is a cheap filter for obviously empty or garbage cells, not RFC
/// validation, and says nothing about deliverability.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("jane@acme.com"));
        assert!(is_valid_email("j.doe+tag@sub.acme.co.uk"));
    }

    #[test]
    fn accepts_addresses_with_surrounding_whitespace() {
        assert!(is_valid_email("  JANE@ACME.COM "));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@acme"));
        assert!(!is_valid_email("jane acme@x.com"));
        assert!(!is_valid_email("@acme.com"));
        assert!(!is_valid_email("jane@@acme.com"));
    }
}
