//! Feed document types.

use serde::Serialize;

use crate::field::FeedField;

/// Namespace bound to the `g` prefix on the root element.
pub const GOOGLE_NAMESPACE_URL: &str = "http://base.google.com/ns/1.0";

/// Prefix bound to [`GOOGLE_NAMESPACE_URL`].
pub const GOOGLE_NS_PREFIX: &str = "g";

/// Value of the root `version` attribute.
pub const RSS_VERSION: &str = "2.0";

/// Root element name.
pub const RSS_TAG: &str = "rss";

/// Channel element name.
pub const CHANNEL_TAG: &str = "channel";

/// Per-row element name.
pub const ITEM_TAG: &str = "item";

/// One normalized product row.
///
/// The `id` field is always the first child; the remaining fields follow
/// in source column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    fields: Vec<(FeedField, String)>,
}

impl FeedItem {
    /// Starts an item with its normalized id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            fields: vec![(FeedField::Id, id.into())],
        }
    }

    /// Appends a normalized field after the ones already present.
    pub fn push(&mut self, field: FeedField, value: impl Into<String>) {
        self.fields.push((field, value.into()));
    }

    pub fn id(&self) -> &str {
        &self.fields[0].1
    }

    pub fn fields(&self) -> &[(FeedField, String)] {
        &self.fields
    }

    pub fn get(&self, field: FeedField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }
}

/// The complete feed: an `rss` root with one channel of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedDocument {
    items: Vec<FeedItem>,
}

impl FeedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_item(&mut self, item: FeedItem) {
        self.items.push(item);
    }

    pub fn version(&self) -> &'static str {
        RSS_VERSION
    }

    /// Returns the `(prefix, uri)` namespace binding declared on the root.
    pub fn namespace(&self) -> (&'static str, &'static str) {
        (GOOGLE_NS_PREFIX, GOOGLE_NAMESPACE_URL)
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
