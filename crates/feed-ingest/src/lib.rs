//! Catalog table ingestion.
//!
//! Reading spreadsheets is delegated to a [`TableReader`]; the bundled
//! [`CsvTableReader`] covers tables exported as CSV.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{CsvTableReader, TableReader};
