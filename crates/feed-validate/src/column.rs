//! Column-name acceptance and unknown-column tracking.

use feed_model::FeedField;

/// Result of checking a source column name against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStatus {
    Accepted(FeedField),
    Unknown,
}

/// Accepts a column iff it names a required or optional field.
pub fn validate_column_name(name: &str) -> ColumnStatus {
    match FeedField::from_name(name) {
        Some(field) => ColumnStatus::Accepted(field),
        None => ColumnStatus::Unknown,
    }
}

/// Distinct unknown column names in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct UnknownColumns {
    names: Vec<String>,
}

impl UnknownColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name`, returning false if it was already seen.
    pub fn record(&mut self, name: &str) -> bool {
        if self.names.iter().any(|seen| seen == name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_accepted() {
        assert_eq!(
            validate_column_name("gtin"),
            ColumnStatus::Accepted(FeedField::Gtin)
        );
        assert_eq!(
            validate_column_name("item_group_id"),
            ColumnStatus::Accepted(FeedField::ItemGroupId)
        );
        assert_eq!(validate_column_name("foo"), ColumnStatus::Unknown);
        assert_eq!(validate_column_name("ID"), ColumnStatus::Unknown);
    }

    #[test]
    fn unknown_columns_are_deduplicated_in_order() {
        let mut unknown = UnknownColumns::new();
        assert!(unknown.record("foo"));
        assert!(unknown.record("bar"));
        assert!(!unknown.record("foo"));
        assert_eq!(unknown.names(), ["foo".to_string(), "bar".to_string()]);
    }
}
