#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Roster profile document loading.
//!
//! Turns a roster profile file into the ordered [`Page`] sequence the
//! extractor consumes. PDFs are read with pure-Rust text extraction
//! ([`pdf_extract`]) one page at a time, and table grids are recovered
//! from the column-aligned page text ([`text_table`]). Pre-extracted JSON
//! page dumps ([`page_dump`]) are accepted as well.
//!
//! The primary entry point is [`RosterDocument::open`].

pub mod page_dump;
pub mod text_table;

use std::path::{Path, PathBuf};

use roster_profile_models::Page;

/// File-name fragment that identifies roster profile documents.
pub const ROSTER_DOCUMENT_MARKER: &str = "Roster Profile";

/// Errors specific to document loading.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// A JSON page dump could not be read or written.
    #[error("Page dump error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is neither a PDF nor a JSON page dump.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Input formats [`RosterDocument::open`] understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// A PDF file.
    Pdf,
    /// A JSON page dump.
    PageDump,
}

impl DocumentFormat {
    /// Infers the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "json" => Some(Self::PageDump),
            _ => None,
        }
    }
}

/// A loaded roster document: its name and pages in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDocument {
    name: String,
    pages: Vec<Page>,
}

impl RosterDocument {
    /// Loads a document from disk.
    ///
    /// The raw file contents are released as soon as the pages have been
    /// extracted, whether or not extraction succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::UnsupportedInput`] for unknown extensions,
    /// [`PdfError::Io`] if the file cannot be read, and
    /// [`PdfError::Extraction`] or [`PdfError::Json`] if its contents
    /// cannot be parsed.
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| PdfError::UnsupportedInput(path.display().to_string()))?;

        match format {
            DocumentFormat::Pdf => {
                let bytes = std::fs::read(path)?;
                log::debug!("Read {} bytes from {}", bytes.len(), path.display());
                Self::from_pdf_bytes(name, &bytes)
            }
            DocumentFormat::PageDump => {
                let file = std::fs::File::open(path)?;
                let pages = page_dump::load(std::io::BufReader::new(file))?;
                Ok(Self { name, pages })
            }
        }
    }

    /// Extracts pages from in-memory PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Extraction`] if the PDF cannot be parsed.
    pub fn from_pdf_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, PdfError> {
        let name = name.into();
        let texts = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| PdfError::Extraction(format!("failed to extract text from {name}: {e}")))?;

        log::debug!("Extracted {} page(s) of text from {name}", texts.len());

        Ok(Self::from_page_texts(name, texts))
    }

    /// Builds a document from per-page text, recovering tables from the
    /// text layout. Blank pages are marked unreadable.
    #[must_use]
    pub fn from_page_texts(name: impl Into<String>, texts: Vec<String>) -> Self {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let number = index + 1;
                if text.trim().is_empty() {
                    log::debug!("Page {number}: no text extracted");
                    Page::unreadable(number)
                } else {
                    let tables = text_table::grids_from_text(&text);
                    Page::new(number, text, tables)
                }
            })
            .collect();

        Self {
            name: name.into(),
            pages,
        }
    }

    /// File name of the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pages in document order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

/// Whether `path` names a roster profile document this crate can load.
#[must_use]
pub fn is_roster_document(path: &Path) -> bool {
    DocumentFormat::from_path(path).is_some()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(ROSTER_DOCUMENT_MARKER))
}

/// Lists roster profile documents directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`PdfError::Io`] if the directory cannot be read.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, PdfError> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_roster_document(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
