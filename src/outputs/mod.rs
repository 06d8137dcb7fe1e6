//! Rendering of article lists for the terminal or for files.
//!
//! # Submodules
//!
//! - [`markdown`]: numbered list view and single-article detail view
//! - [`json`]: the articles as a JSON array
//!
//! Either rendering goes to stdout or, through [`write_output`], to a file.

pub mod json;
pub mod markdown;

use clap::ValueEnum;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable list or detail view.
    #[default]
    Markdown,
    /// Pretty-printed `Article` JSON.
    Json,
}

/// Write rendered output to a file, creating parent directories as needed.
///
/// # Arguments
///
/// * `path` - Destination file; its parent directories are created if missing
/// * `text` - Already-rendered Markdown or JSON
///
/// # Returns
///
/// `Ok(())` on success, or the I/O error from creating directories or writing.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_output(path: &Path, text: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, text).await?;
    info!(bytes = text.len(), "Wrote output");
    Ok(())
}
