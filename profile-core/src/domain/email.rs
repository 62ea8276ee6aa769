//! Email address shape check

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`, anchored at both ends
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]{2,}\z").unwrap()
});

/// Check whether `email` looks like an email address.
///
/// The value is matched as-is: no trimming, no case folding.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("valid@example.com"));
        assert!(is_valid_email("user@domain.co"));
        assert!(is_valid_email("user.name@domain.com"));
        assert!(is_valid_email("first+tag@sub-domain.co.uk"));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_email("invalidemail"));
        assert!(!is_valid_email("@nouser.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@nodotcom"));
        assert!(!is_valid_email("user@domain.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_anything_without_at_sign_is_rejected() {
        for value in ["noatsign", "user.domain.com", "a b c", "user#domain.com"] {
            assert!(!is_valid_email(value), "{value} should be rejected");
        }
    }

    #[test]
    fn test_no_normalization() {
        assert!(!is_valid_email(" user@domain.com"));
        assert!(!is_valid_email("user@domain.com "));
        assert!(!is_valid_email("user@domain.com\n"));
        assert!(is_valid_email("USER@DOMAIN.COM"));
    }
}
