//! Feed rejection taxonomy.

use thiserror::Error;

use crate::catalog::REQUIRED_FIELD_COUNT;
use crate::feed::FeedDocument;

/// Documentation reference included in every operator-facing rejection.
pub const DOCUMENTATION_LINK: &str = "https://developers.facebook.com/docs/marketing-api/dynamic-product-ads/product-catalog#XML_RSS";

/// Reasons a feed is rejected. Every variant is terminal for the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error(
        "There is at least one empty field in the table ({field}). We do not accept empty tags. \
         Please check the documentation at: {}",
        DOCUMENTATION_LINK
    )]
    EmptyField { field: String },

    #[error(
        "The {field} column has a character that XML does not allow. Value sent = {value:?}. \
         Please check the documentation at: {}",
        DOCUMENTATION_LINK
    )]
    InvalidCharacter { field: String, value: String },

    #[error(
        "Availability column does not have the supported value. Value sent = {value}. \
         Please check the documentation at: {}",
        DOCUMENTATION_LINK
    )]
    InvalidAvailability { value: String },

    #[error(
        "Condition column does not have the supported value. Value sent = {value}. \
         Please check the documentation at: {}",
        DOCUMENTATION_LINK
    )]
    InvalidCondition { value: String },

    #[error(
        "Price column does not have the supported value. Value sent = {value}. \
         Please check the documentation at: {}",
        DOCUMENTATION_LINK
    )]
    InvalidPrice { value: String },

    #[error(
        "There are fields in the table that we do not support. They are: {}. \
         Please check the documentation at: {}",
        .fields.join(", "),
        DOCUMENTATION_LINK
    )]
    UnsupportedFields { fields: Vec<String> },

    #[error(
        "You have too many required fields ({count}). There should only be \
         {}. Please check the documentation at: {}",
        REQUIRED_FIELD_COUNT,
        DOCUMENTATION_LINK
    )]
    TooManyFields { count: usize },

    #[error(
        "Only {count} of {} required fields are present. They might have \
         been misspelled. Please check the documentation at: {}",
        REQUIRED_FIELD_COUNT,
        DOCUMENTATION_LINK
    )]
    MissingFields { count: usize },
}

impl FeedError {
    /// Stable identifier for logs and machine-readable reports.
    pub fn code(&self) -> &'static str {
        match self {
            FeedError::EmptyField { .. } => "empty_field",
            FeedError::InvalidCharacter { .. } => "invalid_character",
            FeedError::InvalidAvailability { .. } => "wrong_availability_value",
            FeedError::InvalidCondition { .. } => "wrong_condition_value",
            FeedError::InvalidPrice { .. } => "wrong_price_value",
            FeedError::UnsupportedFields { .. } => "unsupported_fields",
            FeedError::TooManyFields { .. } => "too_many_fields",
            FeedError::MissingFields { .. } => "missing_fields",
        }
    }
}

/// Single terminal result of building a feed.
pub type ValidationOutcome = std::result::Result<FeedDocument, FeedError>;

pub type Result<T> = std::result::Result<T, FeedError>;
