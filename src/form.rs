//! Email subscription form validation
//!
//! Mirrors the classic address pattern: a dotted-atom or quoted local part,
//! then either a bracketed IPv4 literal or dot-separated labels ending in an
//! alphabetic TLD. Input is lowercased before checking.

use crate::consts::{FORM_ERR_CLEAR_MS, FORM_OK_CLEAR_MS};

/// Characters an unquoted local-part atom may not contain
const FORBIDDEN_ATOM_CHARS: &str = "<>()[]\\.,;:@\"";

/// Validate a subscription email address
pub fn validate_email(raw: &str) -> bool {
    let email = raw.to_lowercase();
    let Some((local, domain)) = split_at_separator(&email) else {
        return false;
    };
    valid_local(local) && valid_domain(domain)
}

/// Split into local part and domain at the separating `@`
///
/// A quoted local part may itself contain `@`, so the separator is the one
/// following the closing quote; otherwise exactly one `@` is allowed.
fn split_at_separator(email: &str) -> Option<(&str, &str)> {
    if email.starts_with('"') {
        let close = email.rfind("\"@")?;
        // At least one character between the quotes
        if close < 2 {
            return None;
        }
        Some((&email[..close + 1], &email[close + 2..]))
    } else {
        let at = email.find('@')?;
        let (local, domain) = (&email[..at], &email[at + 1..]);
        if domain.contains('@') {
            return None;
        }
        Some((local, domain))
    }
}

fn valid_local(local: &str) -> bool {
    if local.starts_with('"') {
        // Shape and interior length were checked during the split
        return local.ends_with('"') && local.len() >= 3;
    }
    !local.is_empty()
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| !c.is_whitespace() && !FORBIDDEN_ATOM_CHARS.contains(c))
        })
}

fn valid_domain(domain: &str) -> bool {
    if let Some(inner) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        return valid_ipv4_literal(inner);
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    rest.iter().all(|label| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }) && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn valid_ipv4_literal(inner: &str) -> bool {
    let octets: Vec<&str> = inner.split('.').collect();
    octets.len() == 4
        && octets
            .iter()
            .all(|o| (1..=3).contains(&o.len()) && o.chars().all(|c| c.is_ascii_digit()))
}

/// Result of a subscription attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected,
}

impl Submission {
    /// Evaluate the submitted address; empty input is rejected outright
    pub fn evaluate(email: &str) -> Self {
        if !email.is_empty() && validate_email(email) {
            Submission::Accepted
        } else {
            Submission::Rejected
        }
    }

    /// Inline message shown under the form
    pub fn message(&self) -> &'static str {
        match self {
            Submission::Accepted => "Thank you! We will notify you at launch.",
            Submission::Rejected => "Please enter a valid email address.",
        }
    }

    /// Whether the message gets error styling
    pub fn is_error(&self) -> bool {
        matches!(self, Submission::Rejected)
    }

    /// How long the message stays visible before being cleared
    pub fn clear_after_ms(&self) -> i32 {
        match self {
            Submission::Accepted => FORM_OK_CLEAR_MS,
            Submission::Rejected => FORM_ERR_CLEAR_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "user@example.com",
            "first.last@example.com",
            "user+launch@mail.example.co",
            "user-name@sub.example-site.org",
            "u@ex.bd",
        ] {
            assert!(validate_email(email), "expected valid: {email}");
        }
    }

    #[test]
    fn is_case_insensitive() {
        assert!(validate_email("User@EXAMPLE.COM"));
    }

    #[test]
    fn accepts_ipv4_literal_domains() {
        assert!(validate_email("user@[192.168.1.1]"));
        assert!(validate_email("user@[1.2.3.4]"));
    }

    #[test]
    fn accepts_quoted_local_parts() {
        assert!(validate_email("\"john doe\"@example.com"));
        assert!(validate_email("\"a@b\"@example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@example.c3",
            "user@@example.com",
            "us er@example.com",
            "user..dots@example.com",
            ".leading@example.com",
            "user@.example.com",
            "user@[192.168.1]",
            "user@[192.168.1.1234]",
            "\"\"@example.com",
        ] {
            assert!(!validate_email(email), "expected invalid: {email}");
        }
    }

    #[test]
    fn evaluation_maps_to_messages() {
        let ok = Submission::evaluate("user@example.com");
        assert_eq!(ok, Submission::Accepted);
        assert!(!ok.is_error());
        assert_eq!(ok.clear_after_ms(), 5000);

        let bad = Submission::evaluate("not-an-email");
        assert_eq!(bad, Submission::Rejected);
        assert!(bad.is_error());
        assert_eq!(bad.clear_after_ms(), 3000);
        assert_eq!(bad.message(), "Please enter a valid email address.");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Submission::evaluate(""), Submission::Rejected);
    }
}
