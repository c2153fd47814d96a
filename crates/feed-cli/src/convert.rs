//! Table-to-feed conversion.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use feed_core::build_feed;
use feed_ingest::{CsvTableReader, TableReader};
use feed_model::FeedError;
use feed_output::write_feed;

/// Terminal state of one conversion.
#[derive(Debug)]
pub enum ConvertStatus {
    /// The feed was validated and written.
    Written { items: usize },
    /// The feed was rejected; nothing was written.
    Rejected(FeedError),
}

#[derive(Debug)]
pub struct ConvertResult {
    pub output: PathBuf,
    pub source: PathBuf,
    pub rows: usize,
    pub status: ConvertStatus,
}

impl ConvertResult {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ConvertStatus::Written { .. })
    }
}

/// Converts a CSV catalog at `source` into a feed at `output`.
pub fn run_convert(output: &Path, source: &Path) -> Result<ConvertResult> {
    run_convert_with(&CsvTableReader::new(), output, source)
}

/// Converts using any [`TableReader`].
///
/// Returns `Err` only for I/O failures; feed violations are reported as
/// [`ConvertStatus::Rejected`].
pub fn run_convert_with<R: TableReader>(
    reader: &R,
    output: &Path,
    source: &Path,
) -> Result<ConvertResult> {
    let span = info_span!(
        "convert",
        source = %source.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let rows = reader
        .read_rows(source)
        .with_context(|| format!("read table {}", source.display()))?;

    let status = match build_feed(&rows) {
        Ok(document) => {
            write_feed(output, &document)?;
            ConvertStatus::Written {
                items: document.len(),
            }
        }
        Err(error) => {
            warn!(code = error.code(), "feed rejected");
            ConvertStatus::Rejected(error)
        }
    };
    info!(
        rows = rows.len(),
        elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "conversion finished"
    );

    Ok(ConvertResult {
        output: output.to_path_buf(),
        source: source.to_path_buf(),
        rows: rows.len(),
        status,
    })
}
