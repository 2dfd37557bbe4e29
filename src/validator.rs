//! Syntactic validation of email addresses.

use regex::Regex;
use std::sync::LazyLock;

/// Shortest accepted address, in bytes.
pub const EMAIL_MIN_LEN: usize = 3;
/// Longest accepted address, in bytes.
pub const EMAIL_MAX_LEN: usize = 254;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$")
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Return true if `email` looks like an address: `local@domain.tld`.
///
/// This is a syntax check only. Top-level domains longer than four letters are rejected.
///
/// ```
/// use dynamodb_user_crud::validator::is_email_valid;
///
/// assert!(is_email_valid("a@b.co"));
/// assert!(!is_email_valid("no-at-sign.com"));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    (EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&email.len()) && EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::shortest("a@b.co", true)]
    #[case::plus_and_dots("first.last+tag@mail.example.org", true)]
    #[case::percent_and_dash("100%_ok-x@sub-domain.example.info", true)]
    #[case::uppercase("JANE@EXAMPLE.COM", true)]
    #[case::one_letter_tld("a@b.a", false)]
    #[case::five_letter_tld("a@b.email", false)]
    #[case::numeric_tld("a@b.c0", false)]
    #[case::no_at_sign("no-at-sign.com", false)]
    #[case::empty_local_part("@b.co", false)]
    #[case::empty_domain("a@.co", false)]
    #[case::dot_only_domain("a@..co", true)]
    #[case::space("a b@c.co", false)]
    #[case::two_at_signs("a@b@c.co", false)]
    #[case::trailing_newline("a@b.co\n", false)]
    #[case::non_ascii("josé@b.co", false)]
    #[case::empty("", false)]
    #[case::too_short("ab", false)]
    fn test_is_email_valid(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_email_valid(email), expected);
    }

    #[rstest]
    #[case::max_len(EMAIL_MAX_LEN, true)]
    #[case::over_max_len(EMAIL_MAX_LEN + 1, false)]
    fn test_is_email_valid_length(#[case] len: usize, #[case] expected: bool) {
        let domain = "@example.com";
        let email = format!("{}{domain}", "a".repeat(len - domain.len()));
        assert_eq!(email.len(), len);
        assert_eq!(is_email_valid(&email), expected);
    }
}
