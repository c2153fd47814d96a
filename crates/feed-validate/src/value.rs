//! Per-field value validation.

use feed_model::{FeedError, FeedField, Result};

use crate::normalize::{format_id, format_price, has_digit};

/// Validation and normalization rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Strip the spreadsheet numeric suffix.
    Identifier,
    /// Require a digit, then normalize currency and decimal separator.
    Price,
    /// Accept only the listed literals.
    Enumerated(&'static [&'static str]),
    /// Accept any non-empty value unchanged.
    PassThrough,
}

impl ValueRule {
    pub fn for_field(field: FeedField) -> Self {
        match field {
            FeedField::Id => ValueRule::Identifier,
            FeedField::Price => ValueRule::Price,
            other => other
                .allowed_values()
                .map_or(ValueRule::PassThrough, ValueRule::Enumerated),
        }
    }
}

/// Returns true for values the feed treats as absent.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if `ch` matches the XML 1.0 `Char` production.
///
/// Surrogates cannot occur in a `char`, so only the C0 controls other than
/// tab, newline and carriage return plus U+FFFE and U+FFFF are excluded.
pub fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

/// Validates one value and returns its normalized text.
///
/// The empty and character checks apply to every field before its own rule
/// runs.
pub fn validate_value(field: FeedField, value: &str) -> Result<String> {
    if is_blank(value) {
        return Err(FeedError::EmptyField {
            field: field.as_str().to_string(),
        });
    }
    if !value.chars().all(is_xml_char) {
        return Err(FeedError::InvalidCharacter {
            field: field.as_str().to_string(),
            value: value.to_string(),
        });
    }
    match ValueRule::for_field(field) {
        ValueRule::Identifier => Ok(format_id(value)),
        ValueRule::Price => {
            if has_digit(value) {
                Ok(format_price(value))
            } else {
                Err(FeedError::InvalidPrice {
                    value: value.to_string(),
                })
            }
        }
        ValueRule::Enumerated(allowed) => {
            if allowed.contains(&value) {
                Ok(value.to_string())
            } else {
                Err(enumeration_error(field, value))
            }
        }
        ValueRule::PassThrough => Ok(value.to_string()),
    }
}

fn enumeration_error(field: FeedField, value: &str) -> FeedError {
    let value = value.to_string();
    match field {
        FeedField::Availability => FeedError::InvalidAvailability { value },
        _ => FeedError::InvalidCondition { value },
    }
}
