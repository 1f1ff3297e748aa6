//! Season marker derived from a roster document's file name.

use std::fmt;

/// Marker that selects the newer season when present in a document name.
const CURRENT_SEASON: u16 = 2025;

/// Season assumed when the document name carries no newer marker.
const FALLBACK_SEASON: u16 = 2024;

/// The roster season a document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season(u16);

impl Season {
    /// Creates a season for an explicit year.
    #[must_use]
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    /// Derives the season from a document file name.
    ///
    /// Names containing `2025` are the 2025 season; anything else is
    /// treated as 2024.
    #[must_use]
    pub fn from_document_name(name: &str) -> Self {
        if name.contains(&CURRENT_SEASON.to_string()) {
            Self(CURRENT_SEASON)
        } else {
            Self(FALLBACK_SEASON)
        }
    }

    /// The season year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.0
    }

    /// File name of the parsed CSV for this season.
    #[must_use]
    pub fn output_filename(self) -> String {
        format!("{}_roster_profiles_parsed.csv", self.0)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
