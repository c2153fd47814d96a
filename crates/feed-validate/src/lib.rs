//! Field validation for product feeds.
//!
//! Decides whether a source column is part of the feed schema and turns a
//! raw cell value into the text written to the feed, or the violation that
//! rejects it.

pub mod column;
pub mod normalize;
pub mod value;

pub use column::{ColumnStatus, UnknownColumns, validate_column_name};
pub use normalize::{CURRENCY_SUFFIX, format_id, format_price, has_digit};
pub use value::{ValueRule, is_blank, is_xml_char, validate_value};
