//! Product feed data model.
//!
//! Defines the closed set of feed fields and their catalog, the source row
//! shape, the normalized feed document, and the rejection taxonomy shared by
//! the validation and build stages.

pub mod catalog;
pub mod error;
pub mod feed;
pub mod field;
pub mod row;

pub use catalog::{
    AVAILABILITY_VALUES, CONDITION_VALUES, REQUIRED_FIELD_COUNT, is_known, is_optional,
    is_required, is_valid_enum_value,
};
pub use error::{DOCUMENTATION_LINK, FeedError, Result, ValidationOutcome};
pub use feed::{
    CHANNEL_TAG, FeedDocument, FeedItem, GOOGLE_NAMESPACE_URL, GOOGLE_NS_PREFIX, ITEM_TAG,
    RSS_TAG, RSS_VERSION,
};
pub use field::FeedField;
pub use row::Row;
