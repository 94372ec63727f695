//! Built-in validation rules.
//!
//! Each rule returns `Ok(())` or the given message, ready to feed into
//! [`Validator::check`](super::Validator::check).

use email_address::EmailAddress;
use regex::Regex;

/// Require the value to be non-empty (ignoring surrounding whitespace).
pub fn required(value: &str, msg: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(msg.to_string())
    } else {
        Ok(())
    }
}

/// Require minimum length (in characters).
pub fn min_length(value: &str, min: usize, msg: &str) -> Result<(), String> {
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(msg.to_string())
    }
}

/// Require maximum length (in characters).
pub fn max_length(value: &str, max: usize, msg: &str) -> Result<(), String> {
    if value.chars().count() <= max {
        Ok(())
    } else {
        Err(msg.to_string())
    }
}

/// Require a syntactically valid email address.
///
/// Empty is valid; combine with [`required`] for non-empty.
pub fn email(value: &str, msg: &str) -> Result<(), String> {
    if value.is_empty() || EmailAddress::is_valid(value) {
        Ok(())
    } else {
        Err(msg.to_string())
    }
}

/// Require the value to match a regex pattern.
pub fn pattern(value: &str, re: &Regex, msg: &str) -> Result<(), String> {
    if re.is_match(value) {
        Ok(())
    } else {
        Err(msg.to_string())
    }
}

/// Require at least one item to be present.
pub fn non_empty<T>(items: &[T], msg: &str) -> Result<(), String> {
    if items.is_empty() {
        Err(msg.to_string())
    } else {
        Ok(())
    }
}
