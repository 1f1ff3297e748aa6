//! Extraction profile: the policy constants that describe a roster profile
//! document's layout.
//!
//! The built-in profile matches the league's club roster profile PDFs. A
//! TOML file can override any subset of fields; omitted fields keep their
//! built-in values. The built-in profile itself is `profiles/default.toml`,
//! baked into the binary with [`include_str!`].

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::RosterError;
use crate::context::ContextTracker;
use crate::season::Season;

/// Placeholder in [`RosterProfileConfig::cap_pattern`] replaced with the
/// document's season year.
pub const SEASON_PLACEHOLDER: &str = "{season}";

/// Built-in profile, embedded at compile time.
pub const BUILTIN_PROFILE: &str = include_str!("../profiles/default.toml");

/// Serializable extraction profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterProfileConfig {
    /// Number of leading cover/info pages to ignore.
    pub skip_pages: usize,
    /// Phrase whose presence in a row marks it as the roster header row.
    pub header_marker: String,
    /// Line-anchored pattern capturing the team name in group 1.
    pub team_pattern: String,
    /// Pattern capturing the roster construction model in group 1.
    pub roster_model_pattern: String,
    /// Pattern capturing the cap figure in group 1. May contain
    /// [`SEASON_PLACEHOLDER`].
    pub cap_pattern: String,
    /// Name-cell fragments that disqualify a row (case-insensitive).
    pub noise_terms: Vec<String>,
}

impl Default for RosterProfileConfig {
    /// Returns the built-in profile parsed from [`BUILTIN_PROFILE`].
    ///
    /// # Panics
    ///
    /// Panics if the embedded profile is malformed (it is checked by the
    /// tests since it is baked into the binary).
    fn default() -> Self {
        toml::from_str(BUILTIN_PROFILE)
            .unwrap_or_else(|e| panic!("Failed to parse built-in profile: {e}"))
    }
}

impl RosterProfileConfig {
    /// Parses a profile from TOML text layered over the built-in profile.
    ///
    /// Keys present in `text` replace the built-in values; omitted keys
    /// keep them.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Config`] if the TOML is malformed or a value
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, RosterError> {
        let mut table: toml::Table = toml::from_str(BUILTIN_PROFILE)?;
        table.extend(toml::from_str::<toml::Table>(text)?);
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file cannot be read, or
    /// [`RosterError::Config`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded extraction profile from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Renders the profile as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ConfigRender`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, RosterError> {
        Ok(toml::to_string(self)?)
    }

    /// Compiles the profile's patterns for one season.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Pattern`] if any pattern fails to compile.
    pub fn compile(&self, season: Season) -> Result<CompiledProfile, RosterError> {
        let cap_pattern = self
            .cap_pattern
            .replace(SEASON_PLACEHOLDER, &season.to_string());

        let context = ContextTracker::new(
            Regex::new(&self.team_pattern)?,
            Regex::new(&self.roster_model_pattern)?,
            Regex::new(&cap_pattern)?,
        );

        Ok(CompiledProfile {
            season,
            skip_pages: self.skip_pages,
            header_marker: self.header_marker.trim().to_uppercase(),
            context,
            noise_terms: self
                .noise_terms
                .iter()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect(),
        })
    }
}

/// A profile with its patterns compiled for a specific season.
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    /// Season the cap pattern was instantiated for.
    pub season: Season,
    /// Leading pages to ignore.
    pub skip_pages: usize,
    /// Uppercased header marker.
    pub header_marker: String,
    /// Context extraction patterns.
    pub context: ContextTracker,
    /// Uppercased noise terms.
    pub noise_terms: Vec<String>,
}
