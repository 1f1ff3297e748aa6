//! JSON page dumps.
//!
//! A page dump is a JSON array with one object per page:
//!
//! ```json
//! [{ "text": "LA GALAXY | ROSTER PROFILE ...", "tables": [[["NAME", null]]] }]
//! ```
//!
//! This is the shape table-aware PDF tools emit (one grid per detected
//! table, nullable cells), so a dump carries exact table boundaries where
//! the plain-text heuristic in [`crate::text_table`] would have to guess.

use std::io::{Read, Write};

use roster_profile_models::Page;

use crate::PdfError;

/// Reads pages from a JSON dump. Pages are renumbered from 1 in order.
///
/// # Errors
///
/// Returns [`PdfError::Json`] if the input is not a valid page dump.
pub fn load<R: Read>(reader: R) -> Result<Vec<Page>, PdfError> {
    let mut pages: Vec<Page> = serde_json::from_reader(reader)?;

    for (index, page) in pages.iter_mut().enumerate() {
        page.number = index + 1;
    }

    log::debug!("Loaded {} page(s) from page dump", pages.len());

    Ok(pages)
}

/// Writes `pages` as a pretty-printed JSON dump.
///
/// # Errors
///
/// Returns [`PdfError::Json`] if serialization or writing fails.
pub fn write<W: Write>(writer: W, pages: &[Page]) -> Result<(), PdfError> {
    serde_json::to_writer_pretty(writer, pages)?;
    Ok(())
}
