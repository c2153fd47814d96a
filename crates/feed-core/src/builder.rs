//! Feed construction over the source row sequence.
//!
//! Value violations abort the run on first occurrence. Unknown columns are
//! collected across every row and reported together once all rows are
//! processed. The required-field gate uses the tally of the last row only.

use std::cmp::Ordering;

use tracing::{debug, debug_span, warn};

use feed_model::{
    FeedDocument, FeedError, FeedField, FeedItem, REQUIRED_FIELD_COUNT, Row, ValidationOutcome,
    is_required,
};
use feed_validate::{ColumnStatus, UnknownColumns, validate_column_name, validate_value};

/// Accumulates feed items from source rows.
#[derive(Debug, Default)]
pub struct FeedBuilder {
    document: FeedDocument,
    unknown_columns: UnknownColumns,
    required_seen: usize,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one row and appends its item to the channel.
    ///
    /// Any value violation is returned immediately and the builder should
    /// be discarded.
    pub fn push_row(&mut self, row: &Row) -> Result<(), FeedError> {
        let id = row.get(FeedField::Id.as_str()).unwrap_or_default();
        let mut item = FeedItem::new(validate_value(FeedField::Id, id)?);

        self.required_seen = 0;
        for (column, value) in row.iter() {
            if is_required(column) {
                self.required_seen += 1;
            }
            match validate_column_name(column) {
                ColumnStatus::Accepted(FeedField::Id) => {}
                ColumnStatus::Accepted(field) => {
                    let normalized = validate_value(field, value)?;
                    item.push(field, normalized);
                }
                ColumnStatus::Unknown => {
                    if self.unknown_columns.record(column) {
                        debug!(column, "unsupported column");
                    }
                }
            }
        }

        debug!(
            id = item.id(),
            fields = item.fields().len(),
            required = self.required_seen,
            "item built"
        );
        self.document.push_item(item);
        Ok(())
    }

    /// Required columns counted in the most recent row.
    pub fn required_seen(&self) -> usize {
        self.required_seen
    }

    pub fn unknown_columns(&self) -> &[String] {
        self.unknown_columns.names()
    }

    /// Applies the whole-feed checks and yields the terminal outcome.
    pub fn finish(self) -> ValidationOutcome {
        if !self.unknown_columns.is_empty() {
            let fields = self.unknown_columns.into_names();
            warn!(?fields, "feed has unsupported columns");
            return Err(FeedError::UnsupportedFields { fields });
        }
        let count = self.required_seen;
        match count.cmp(&REQUIRED_FIELD_COUNT) {
            Ordering::Equal => Ok(self.document),
            Ordering::Greater => Err(FeedError::TooManyFields { count }),
            Ordering::Less => Err(FeedError::MissingFields { count }),
        }
    }
}

/// Builds a feed from every row in order.
pub fn build_feed<'a, I>(rows: I) -> ValidationOutcome
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut builder = FeedBuilder::new();
    for (index, row) in rows.into_iter().enumerate() {
        let span = debug_span!("row", index);
        let _guard = span.enter();
        if let Err(error) = builder.push_row(row) {
            warn!(code = error.code(), "row rejected");
            return Err(error);
        }
    }
    builder.finish()
}
