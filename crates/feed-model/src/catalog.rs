//! Static field catalog lookups.
//!
//! The catalog is immutable: required and optional fields are fixed by
//! [`FeedField::REQUIRED`] and [`FeedField::OPTIONAL`], and the enumerated
//! value sets below are the only permitted literals for their fields.

use crate::field::FeedField;

/// Number of required columns a row must carry for the feed to be accepted.
pub const REQUIRED_FIELD_COUNT: usize = 9;

/// Permitted `availability` literals.
pub const AVAILABILITY_VALUES: &[&str] = &["in stock", "out of stock"];

/// Permitted `condition` literals.
pub const CONDITION_VALUES: &[&str] = &["new", "refurbished", "used"];

/// Returns true if `name` is one of the required field names.
pub fn is_required(name: &str) -> bool {
    FeedField::from_name(name).is_some_and(|field| field.is_required())
}

/// Returns true if `name` is one of the optional field names.
pub fn is_optional(name: &str) -> bool {
    FeedField::from_name(name).is_some_and(|field| !field.is_required())
}

/// Returns true if `name` is either required or optional.
pub fn is_known(name: &str) -> bool {
    FeedField::from_name(name).is_some()
}

/// Checks `value` against the enumerated set for `name`.
///
/// Fields without an enumerated set accept any value.
pub fn is_valid_enum_value(name: &str, value: &str) -> bool {
    match FeedField::from_name(name).and_then(|field| field.allowed_values()) {
        Some(allowed) => allowed.contains(&value),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_and_optional_are_disjoint() {
        for field in FeedField::REQUIRED {
            assert!(!FeedField::OPTIONAL.contains(&field), "{field} in both sets");
            assert!(is_required(field.as_str()));
            assert!(!is_optional(field.as_str()));
        }
        for field in FeedField::OPTIONAL {
            assert!(is_optional(field.as_str()));
            assert!(!is_required(field.as_str()));
        }
    }

    #[test]
    fn known_covers_both_sets() {
        assert!(is_known("id"));
        assert!(is_known("shipping_size"));
        assert!(!is_known("foo"));
        assert!(!is_known(""));
    }

    #[test]
    fn enum_values_are_exact() {
        assert!(is_valid_enum_value("availability", "in stock"));
        assert!(is_valid_enum_value("availability", "out of stock"));
        assert!(!is_valid_enum_value("availability", "In Stock"));
        assert!(!is_valid_enum_value("availability", "preorder"));
        assert!(is_valid_enum_value("condition", "refurbished"));
        assert!(!is_valid_enum_value("condition", "broken"));
    }

    #[test]
    fn non_enumerated_fields_accept_anything() {
        assert!(is_valid_enum_value("title", "whatever"));
        assert!(is_valid_enum_value("foo", ""));
    }
}
