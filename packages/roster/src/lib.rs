#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Club roster profile extraction.
//!
//! Turns a multi-page, multi-team roster profile document into a flat
//! sequence of [`PlayerRecord`]s. The document is walked page by page:
//!
//! 1. [`context`] tracks the current team, roster construction model, and
//!    cap figure, carrying each forward until a later page overwrites it.
//! 2. [`header`] decides whether each extracted table is a roster table
//!    and maps its columns by header keyword.
//! 3. [`classify`] filters banner/header rows out of the table body and
//!    builds a record for each player row.
//! 4. [`extract`] orchestrates the walk and collects the records.
//!
//! Page loading, CSV persistence ([`output`]), and the operator summary
//! ([`summary`]) sit around that core.

pub mod classify;
pub mod config;
pub mod context;
pub mod extract;
pub mod header;
pub mod output;
pub mod season;
pub mod summary;

pub use roster_profile_models::{
    ColumnMap, ColumnRole, Page, PageContext, PlayerCategory, PlayerRecord, TableGrid,
};

use crate::config::RosterProfileConfig;
use crate::extract::RosterExtractor;
use crate::season::Season;

/// Errors that can occur while extracting or persisting a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The extraction profile TOML is malformed.
    #[error("Invalid extraction profile: {0}")]
    Config(#[from] toml::de::Error),

    /// The extraction profile could not be rendered as TOML.
    #[error("Failed to render extraction profile: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// A profile pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The document was walked successfully but yielded no usable data.
    #[error("No usable data extracted from {document}: {reason}")]
    NothingExtracted {
        /// Document name.
        document: String,
        /// Which stage came up empty.
        reason: EmptyExtraction,
    },
}

/// Why a document yielded no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmptyExtraction {
    /// No table in the document was recognized as a roster table.
    #[error("no roster tables matched")]
    NoRosterTables,

    /// Roster tables were found but contained no player rows.
    #[error("roster tables matched but no players were found")]
    NoPlayers,
}

/// Extracts the player records from an already loaded document.
///
/// `document` is the source file name; it selects the season (and with it
/// the cap-figure label) and is used in diagnostics.
///
/// # Errors
///
/// Returns [`RosterError::Pattern`] if the profile's patterns fail to
/// compile, or [`RosterError::NothingExtracted`] if the document yields no
/// roster tables or no players.
pub fn extract_document(
    document: &str,
    pages: &[Page],
    config: &RosterProfileConfig,
) -> Result<Vec<PlayerRecord>, RosterError> {
    let season = Season::from_document_name(document);
    let extractor = RosterExtractor::new(config.compile(season)?);

    let records = extractor
        .extract(pages)
        .into_records()
        .map_err(|reason| RosterError::NothingExtracted {
            document: document.to_owned(),
            reason,
        })?;

    log::info!(
        "Extracted {} player(s) from {document} ({season} season)",
        records.len()
    );

    Ok(records)
}
