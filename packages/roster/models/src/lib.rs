#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data model for roster profile extraction.
//!
//! A roster profile document arrives as an ordered sequence of [`Page`]s,
//! each carrying its extracted text and zero or more [`TableGrid`]s. The
//! extractor walks those pages carrying a [`PageContext`], resolves a
//! [`ColumnMap`] per roster table, and emits one [`PlayerRecord`] per
//! player row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A single extracted table: ordered rows of nullable cells.
///
/// Rows may have uneven lengths. Merged or blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableGrid {
    rows: Vec<Vec<Option<String>>>,
}

impl TableGrid {
    /// Creates a grid from raw rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor for grids where every cell is present.
    #[must_use]
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
                .collect(),
        }
    }

    /// All rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// The row at `index`, if the grid has one.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Option<String>]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One page of a roster document as handed over by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// One-based page number in document order.
    #[serde(default)]
    pub number: usize,
    /// Plain extracted text. `None` when the page could not be read.
    pub text: Option<String>,
    /// Tables extracted from the page, in page order.
    #[serde(default)]
    pub tables: Vec<TableGrid>,
}

impl Page {
    /// Creates a page with text and tables.
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>, tables: Vec<TableGrid>) -> Self {
        Self {
            number,
            text: Some(text.into()),
            tables,
        }
    }

    /// Creates a page whose extraction produced nothing.
    #[must_use]
    pub const fn unreadable(number: usize) -> Self {
        Self {
            number,
            text: None,
            tables: Vec::new(),
        }
    }

    /// Returns the page text when it is present and not blank.
    #[must_use]
    pub fn readable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Team-level context carried forward across pages.
///
/// Each field keeps its last known value until a later page overwrites
/// it. Values are replaced wholesale rather than mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Current team name, unset until the first team header is seen.
    pub team: Option<String>,
    /// Roster construction model for the current team.
    pub roster_model: Option<String>,
    /// Salary-cap (GAM) figure available, digits only.
    pub cap_available: Option<String>,
}

impl PageContext {
    /// Returns a copy with the team replaced.
    #[must_use]
    pub fn with_team(self, team: String) -> Self {
        Self {
            team: Some(team),
            ..self
        }
    }

    /// Returns a copy with the roster model replaced.
    #[must_use]
    pub fn with_roster_model(self, roster_model: String) -> Self {
        Self {
            roster_model: Some(roster_model),
            ..self
        }
    }

    /// Returns a copy with the cap figure replaced.
    #[must_use]
    pub fn with_cap_available(self, cap_available: String) -> Self {
        Self {
            cap_available: Some(cap_available),
            ..self
        }
    }

    /// Whether rows read under this context can be attributed to a team.
    #[must_use]
    pub const fn has_team(&self) -> bool {
        self.team.is_some()
    }
}

/// Semantic role of a roster table column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColumnRole {
    /// Player name (required)
    Name,
    /// Roster designation free text
    Designation,
    /// Current status (e.g. "Active", "Injured List")
    Status,
    /// Final guaranteed contract season
    ContractThru,
    /// Option years remaining
    OptionYears,
}

impl ColumnRole {
    /// Every role, in header-scan precedence order.
    pub const ALL: &[Self] = &[
        Self::Name,
        Self::Designation,
        Self::Status,
        Self::ContractThru,
        Self::OptionYears,
    ];
}

/// Resolved column indices for one roster table.
///
/// Built once per table by the header resolver. `name` is always present;
/// the remaining roles may be absent, in which case the matching field is
/// empty for every row of that table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    name: usize,
    optional: BTreeMap<ColumnRole, usize>,
}

impl ColumnMap {
    /// Creates a map with only the required `name` column.
    #[must_use]
    pub const fn new(name: usize) -> Self {
        Self {
            name,
            optional: BTreeMap::new(),
        }
    }

    /// Returns a copy with `role` bound to `index`.
    ///
    /// Binding [`ColumnRole::Name`] moves the name column.
    #[must_use]
    pub fn with(mut self, role: ColumnRole, index: usize) -> Self {
        if role == ColumnRole::Name {
            self.name = index;
        } else {
            self.optional.insert(role, index);
        }
        self
    }

    /// Index of the name column.
    #[must_use]
    pub const fn name(&self) -> usize {
        self.name
    }

    /// Index bound to `role`, if any.
    #[must_use]
    pub fn index(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::Name => Some(self.name),
            other => self.optional.get(&other).copied(),
        }
    }
}

/// Business category derived from a player's roster designation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum PlayerCategory {
    /// Designated Player, including Young Designated Players
    #[serde(rename = "Designated Player")]
    #[strum(serialize = "Designated Player")]
    DesignatedPlayer,
    /// Signed under the U22 Initiative
    #[serde(rename = "U22 Initiative")]
    #[strum(serialize = "U22 Initiative")]
    U22Initiative,
    /// Bought down with Targeted Allocation Money
    #[serde(rename = "TAM Player")]
    #[strum(serialize = "TAM Player")]
    TamPlayer,
    /// Club academy product
    #[serde(rename = "Homegrown")]
    #[strum(serialize = "Homegrown")]
    Homegrown,
    /// Generation adidas signing
    #[serde(rename = "Generation Adidas")]
    #[strum(serialize = "Generation Adidas")]
    GenerationAdidas,
    /// Everything else
    #[serde(rename = "Standard")]
    #[strum(serialize = "Standard")]
    Standard,
}

/// A single extracted player row.
///
/// Field order matches the output CSV column order. Every field is a plain
/// string; unavailable values are empty rather than null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Team in effect when the row was read.
    pub team: String,
    /// Player name as printed.
    pub name: String,
    /// Roster designation free text.
    pub roster_designation: String,
    /// Current status.
    pub current_status: String,
    /// Contract-through season.
    pub contract_thru: String,
    /// Option years.
    pub option_years: String,
    /// Category derived from `roster_designation`.
    pub category: PlayerCategory,
    /// Team roster construction model.
    pub roster_model: String,
    /// Team GAM available for the season.
    pub team_gam: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_map_defaults_optional_roles_to_none() {
        let map = ColumnMap::new(2).with(ColumnRole::Status, 4);
        assert_eq!(map.name(), 2);
        assert_eq!(map.index(ColumnRole::Name), Some(2));
        assert_eq!(map.index(ColumnRole::Status), Some(4));
        assert_eq!(map.index(ColumnRole::Designation), None);
        assert_eq!(map.index(ColumnRole::OptionYears), None);
    }

    #[test]
    fn category_display_matches_output_labels() {
        assert_eq!(
            PlayerCategory::DesignatedPlayer.to_string(),
            "Designated Player"
        );
        assert_eq!(
            PlayerCategory::GenerationAdidas.to_string(),
            "Generation Adidas"
        );
        assert_eq!(
            "TAM Player".parse::<PlayerCategory>().unwrap(),
            PlayerCategory::TamPlayer
        );
    }

    #[test]
    fn context_replacement_keeps_other_fields() {
        let ctx = PageContext::default()
            .with_team("LA GALAXY".to_owned())
            .with_cap_available("250000".to_owned());
        let ctx = ctx.with_roster_model("Designated Player Model".to_owned());
        assert_eq!(ctx.team.as_deref(), Some("LA GALAXY"));
        assert_eq!(ctx.cap_available.as_deref(), Some("250000"));
        assert!(ctx.has_team());
    }

    #[test]
    fn blank_page_text_is_not_readable() {
        let page = Page::new(4, "   \n ", Vec::new());
        assert!(page.readable_text().is_none());
        assert!(Page::unreadable(5).readable_text().is_none());
    }

    #[test]
    fn table_grid_deserializes_from_nested_arrays() {
        let grid: TableGrid = serde_json::from_str(r#"[["NAME", null], ["A. Player"]]"#).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.row(0).unwrap()[1], None);
        assert_eq!(grid.row(1).unwrap().len(), 1);
    }
}
