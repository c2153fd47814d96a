//! Property tests for field validation.

use feed_model::{AVAILABILITY_VALUES, CONDITION_VALUES, FeedError, FeedField};
use feed_validate::{format_price, validate_value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn availability_rejects_values_outside_the_set(value in "\\PC{1,20}") {
        prop_assume!(!AVAILABILITY_VALUES.contains(&value.as_str()));
        prop_assume!(!value.trim().is_empty());
        prop_assert_eq!(
            validate_value(FeedField::Availability, &value),
            Err(FeedError::InvalidAvailability { value: value.clone() })
        );
    }

    #[test]
    fn condition_rejects_values_outside_the_set(value in "\\PC{1,20}") {
        prop_assume!(!CONDITION_VALUES.contains(&value.as_str()));
        prop_assume!(!value.trim().is_empty());
        prop_assert_eq!(
            validate_value(FeedField::Condition, &value),
            Err(FeedError::InvalidCondition { value: value.clone() })
        );
    }

    #[test]
    fn normalized_price_is_a_fixed_point(units in 0u32..1_000_000, cents in 0u32..100) {
        let price = format!("{units}.{cents:02} BRL");
        prop_assert_eq!(format_price(&price), price.clone());
    }

    #[test]
    fn price_normalization_settles_after_one_pass(raw in "[0-9]{1,6}(,[0-9]{2})?") {
        let once = format_price(&raw);
        prop_assert!(once.ends_with(" BRL"));
        prop_assert_eq!(format_price(&once), once.clone());
    }

    #[test]
    fn prices_without_digits_are_rejected(value in "[a-zA-Z $.,]{1,12}") {
        prop_assume!(!value.trim().is_empty());
        prop_assert_eq!(
            validate_value(FeedField::Price, &value),
            Err(FeedError::InvalidPrice { value: value.clone() })
        );
    }
}
