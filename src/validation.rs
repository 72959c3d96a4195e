//! Input validators and answer normalization
//!
//! Validators are named, pure functions so the prompt layer can wire them
//! into whatever re-prompt mechanism it uses.

use crate::constants::MAX_SERVER_CONTACT_LENGTH;
use indexmap::IndexSet;
use regex::Regex;
use std::sync::OnceLock;

/// Email syntax check. Length limits are enforced separately by
/// [`validate_server_contact`].
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("email pattern compiles")
    });
    regex.is_match(value)
}

/// Validator for the server contact prompt: standard email syntax, at most
/// 255 characters. Returns the message to display on failure.
pub fn validate_server_contact(value: &str) -> Result<(), String> {
    if !is_valid_email(value) {
        return Err("Please enter a valid email address.".to_string());
    }
    if value.len() > MAX_SERVER_CONTACT_LENGTH {
        return Err(format!(
            "The email must not exceed {MAX_SERVER_CONTACT_LENGTH} characters."
        ));
    }
    Ok(())
}

/// Split a comma-separated extension list into a normalized set: tokens are
/// trimmed, empties dropped, duplicates collapsed with first-seen order kept.
pub fn parse_extension_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_plain_text_as_email() {
        assert!(!is_valid_email("not-an-email"));
        assert!(validate_server_contact("not-an-email").is_err());
    }

    #[test]
    fn accepts_minimal_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(validate_server_contact("a@b.com").is_ok());
    }

    #[test]
    fn rejects_email_with_oversized_local_part() {
        let address = format!("{}@example.com", "a".repeat(256));
        assert!(validate_server_contact(&address).is_err());
    }

    #[test]
    fn accepts_email_of_exactly_255_characters() {
        // 243 + 1 + 11 = 255
        let address = format!("{}@example.com", "a".repeat(243));
        assert_eq!(address.len(), 255);
        assert!(validate_server_contact(&address).is_ok());
    }

    #[test]
    fn rejects_email_of_256_characters() {
        let address = format!("{}@example.com", "a".repeat(244));
        assert_eq!(address.len(), 256);
        assert!(validate_server_contact(&address).is_err());
    }

    #[test]
    fn rejects_email_without_domain_dot() {
        assert!(!is_valid_email("admin@localhost"));
    }

    #[test]
    fn parses_comma_separated_extensions() {
        assert_eq!(
            parse_extension_list("gd, imagick ,intl"),
            vec!["gd", "imagick", "intl"]
        );
    }

    #[test]
    fn empty_input_yields_no_extensions() {
        assert!(parse_extension_list("").is_empty());
    }

    #[test]
    fn blank_tokens_are_dropped() {
        assert!(parse_extension_list(" , ,").is_empty());
        assert_eq!(parse_extension_list(",gd,,intl,"), vec!["gd", "intl"]);
    }

    #[test]
    fn duplicate_extensions_collapse_keeping_first_seen_order() {
        assert_eq!(
            parse_extension_list("intl,gd,intl,imagick,gd"),
            vec!["intl", "gd", "imagick"]
        );
    }
}
