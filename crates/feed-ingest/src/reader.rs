//! Catalog table readers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use feed_model::Row;

use crate::error::{IngestError, Result};

/// Source of catalog rows.
///
/// The header row names the columns and is not part of the returned rows.
pub trait TableReader {
    fn read_rows(&self, path: &Path) -> Result<Vec<Row>>;
}

/// Reads comma-separated tables.
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses rows from any reader; `path` is only used in errors.
    pub fn read_from<R: Read>(&self, source: R, path: &Path) -> Result<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(source);

        let mut records = reader.records();
        let mut headers = None;
        for record in records.by_ref() {
            let record = record.map_err(|source| parse_error(path, source))?;
            if is_blank(&record) {
                continue;
            }
            headers = Some(record.iter().map(normalize_header).collect::<Vec<_>>());
            break;
        }
        let Some(columns) = headers else {
            return Err(IngestError::EmptyTable {
                path: path.to_path_buf(),
            });
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(|source| parse_error(path, source))?;
            if is_blank(&record) {
                continue;
            }
            let row: Row = columns
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let value = record.get(idx).unwrap_or("");
                    (column.clone(), normalize_cell(value))
                })
                .collect();
            rows.push(row);
        }
        debug!(columns = ?columns, "table header");
        Ok(rows)
    }
}

impl TableReader for CsvTableReader {
    fn read_rows(&self, path: &Path) -> Result<Vec<Row>> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let rows = self.read_from(file, path)?;
        info!(path = %path.display(), rows = rows.len(), "table loaded");
        Ok(rows)
    }
}

fn parse_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Cell values keep their spacing; enumerated fields match exactly.
fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_collapsed() {
        assert_eq!(normalize_header("\u{feff} image_link "), "image_link");
        assert_eq!(normalize_header("a   b"), "a b");
    }

    #[test]
    fn cells_keep_surrounding_spaces() {
        assert_eq!(normalize_cell(" in stock "), " in stock ");
        assert_eq!(normalize_cell("\u{feff}1.0"), "1.0");
    }

    #[test]
    fn reads_rows_from_memory() {
        let data = "id,title\n1.0,Shirt\n\n,,\n2.0\n";
        let rows = CsvTableReader::new()
            .read_from(data.as_bytes(), Path::new("inline.csv"))
            .expect("read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("title"), Some("Shirt"));
        assert_eq!(rows[1].get("id"), Some("2.0"));
        assert_eq!(rows[1].get("title"), Some(""));
    }

    #[test]
    fn blank_input_has_no_header() {
        let err = CsvTableReader::new()
            .read_from("\n , \n".as_bytes(), Path::new("blank.csv"))
            .unwrap_err();
        assert!(matches!(err, IngestError::EmptyTable { .. }));
    }
}
