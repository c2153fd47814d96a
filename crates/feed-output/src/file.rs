//! Feed file output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::info;

use feed_model::FeedDocument;

use crate::xml::render_feed;

/// Renders `document` and writes it to `path`.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so the destination either holds the complete
/// feed or is untouched.
pub fn write_feed(path: &Path, document: &FeedDocument) -> Result<()> {
    let bytes = render_feed(document).context("render feed xml")?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp file in {}", parent.display()))?;
    staged
        .write_all(&bytes)
        .with_context(|| format!("write {}", staged.path().display()))?;
    staged.flush()?;
    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("create {}", path.display()))?;
    info!(
        path = %path.display(),
        items = document.len(),
        bytes = bytes.len(),
        "feed written"
    );
    Ok(())
}
