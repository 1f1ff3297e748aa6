//! Batch processing of roster profile documents.
//!
//! Each document is loaded, extracted, written to its season's CSV, and
//! summarized independently: a document that yields nothing or fails to
//! load is reported and the batch moves on.

use std::path::{Path, PathBuf};

use roster_profile::config::RosterProfileConfig;
use roster_profile::season::Season;
use roster_profile::summary::RosterSummary;
use roster_profile::{RosterError, extract_document, output};
use roster_profile_cli_utils::MultiProgress;
use roster_profile_pdf::{PdfError, RosterDocument};

/// Errors for a single document in a batch.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document could not be loaded.
    #[error(transparent)]
    Load(#[from] PdfError),

    /// Extraction or output failed.
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Settings shared by every document in a batch.
pub struct BatchOptions {
    /// Directory for CSV output. Defaults to each document's directory.
    pub output_dir: Option<PathBuf>,
    /// Extraction profile.
    pub profile: RosterProfileConfig,
}

/// Outcome counts for a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// CSV files written.
    pub written: Vec<PathBuf>,
    /// Documents that yielded no usable data.
    pub empty: Vec<PathBuf>,
    /// Documents that failed to load or write.
    pub failed: Vec<PathBuf>,
}

/// Processes `paths` in order.
pub fn run(paths: &[PathBuf], options: &BatchOptions, multi: &MultiProgress) -> BatchReport {
    let bar = roster_profile_cli_utils::documents_bar(multi, paths.len() as u64);
    let mut report = BatchReport::default();

    for path in paths {
        log::info!("Processing: {}", path.display());

        match process_document(path, options) {
            Ok((written, summary)) => {
                multi.suspend(|| println!("\n{summary}"));
                report.written.push(written);
            }
            Err(DocumentError::Roster(e @ RosterError::NothingExtracted { .. })) => {
                log::warn!("{e}. Check the document's formatting.");
                report.empty.push(path.clone());
            }
            Err(e) => {
                log::error!("Failed to process {}: {e}", path.display());
                report.failed.push(path.clone());
            }
        }

        bar.inc(1);
    }

    bar.finish_with_message("Documents done");
    report
}

/// Loads, extracts, and writes one document.
fn process_document(
    path: &Path,
    options: &BatchOptions,
) -> Result<(PathBuf, RosterSummary), DocumentError> {
    let document = RosterDocument::open(path)?;
    let records = extract_document(document.name(), document.pages(), &options.profile)?;

    let season = Season::from_document_name(document.name());
    let dir = options
        .output_dir
        .as_deref()
        .or_else(|| path.parent())
        .unwrap_or_else(|| Path::new("."));
    let written = output::write_csv_file(dir, season, &records)?;

    Ok((written, RosterSummary::from_records(&records)))
}
