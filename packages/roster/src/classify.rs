//! Player row classification.
//!
//! Roster table bodies mix real player rows with section banners
//! ("SENIOR ROSTER", "OFF-ROSTER"), repeated headers, and blank filler.
//! [`RowClassifier`] filters those out and turns the remaining rows into
//! [`PlayerRecord`]s, deriving a [`PlayerCategory`] from the designation.

use std::fmt;

use roster_profile_models::{ColumnMap, ColumnRole, PageContext, PlayerCategory, PlayerRecord};

/// Designation substrings mapped to categories, evaluated in order.
///
/// A designation can mention several programs at once (a Young Designated
/// Player is often also U22-eligible), so the first matching rule wins.
/// Matching is case-sensitive.
const CATEGORY_RULES: &[(&[&str], PlayerCategory)] = &[
    (
        &["Designated Player", "Young Designated"],
        PlayerCategory::DesignatedPlayer,
    ),
    (&["U22 Initiative"], PlayerCategory::U22Initiative),
    (&["TAM Player"], PlayerCategory::TamPlayer),
    (&["Homegrown"], PlayerCategory::Homegrown),
    (&["Generation adidas"], PlayerCategory::GenerationAdidas),
];

/// Category for a designation text. Falls back to
/// [`PlayerCategory::Standard`].
#[must_use]
pub fn categorize(designation: &str) -> PlayerCategory {
    CATEGORY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| designation.contains(needle)))
        .map_or(PlayerCategory::Standard, |&(_, category)| category)
}

/// Trimmed value of `role`'s cell in `row`.
///
/// Unbound roles, short rows, and null cells all yield an empty string.
#[must_use]
pub fn cell_value(row: &[Option<String>], columns: &ColumnMap, role: ColumnRole) -> String {
    columns
        .index(role)
        .and_then(|index| row.get(index))
        .and_then(Option::as_deref)
        .map(str::trim)
        .unwrap_or_default()
        .to_owned()
}

/// Why a row produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    /// Row has no text in the name column.
    MissingName,
    /// Name cell is a banner or repeated header.
    Noise {
        /// The noise term that matched.
        term: String,
    },
    /// No team has been seen yet, so the row cannot be attributed.
    NoTeam,
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("empty name cell"),
            Self::Noise { term } => write!(f, "name cell matches noise term '{term}'"),
            Self::NoTeam => f.write_str("no team context"),
        }
    }
}

/// Turns table rows into player records.
#[derive(Debug, Clone, Copy)]
pub struct RowClassifier<'a> {
    noise_terms: &'a [String],
}

impl<'a> RowClassifier<'a> {
    /// Creates a classifier. `noise_terms` must already be uppercased.
    #[must_use]
    pub const fn new(noise_terms: &'a [String]) -> Self {
        Self { noise_terms }
    }

    /// Classifies one data row under `context`.
    ///
    /// # Errors
    ///
    /// Returns the [`RowSkip`] reason when the row is not a player.
    pub fn classify(
        &self,
        row: &[Option<String>],
        columns: &ColumnMap,
        context: &PageContext,
    ) -> Result<PlayerRecord, RowSkip> {
        let name = cell_value(row, columns, ColumnRole::Name);
        if name.is_empty() {
            return Err(RowSkip::MissingName);
        }

        let upper = name.to_uppercase();
        if let Some(term) = self.noise_terms.iter().find(|t| upper.contains(t.as_str())) {
            return Err(RowSkip::Noise { term: term.clone() });
        }

        let team = context.team.clone().ok_or(RowSkip::NoTeam)?;
        let roster_designation = cell_value(row, columns, ColumnRole::Designation);

        Ok(PlayerRecord {
            team,
            name,
            category: categorize(&roster_designation),
            roster_designation,
            current_status: cell_value(row, columns, ColumnRole::Status),
            contract_thru: cell_value(row, columns, ColumnRole::ContractThru),
            option_years: cell_value(row, columns, ColumnRole::OptionYears),
            roster_model: context.roster_model.clone().unwrap_or_default(),
            team_gam: context.cap_available.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterProfileConfig;

    fn noise_terms() -> Vec<String> {
        RosterProfileConfig::default().noise_terms
    }

    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells.iter().map(|&c| Some(c.to_owned())).collect()
    }

    fn context() -> PageContext {
        PageContext::default().with_team("FC Example".to_owned())
    }

    fn columns() -> ColumnMap {
        ColumnMap::new(0)
            .with(ColumnRole::Designation, 1)
            .with(ColumnRole::Status, 2)
    }

    #[test]
    fn young_designated_u22_is_designated_player() {
        assert_eq!(
            categorize("Young Designated Player (U22 Initiative eligible)"),
            PlayerCategory::DesignatedPlayer
        );
    }

    #[test]
    fn category_precedence() {
        assert_eq!(categorize("U22 Initiative, Homegrown"), PlayerCategory::U22Initiative);
        assert_eq!(categorize("TAM Player / Homegrown"), PlayerCategory::TamPlayer);
        assert_eq!(categorize("Homegrown Player"), PlayerCategory::Homegrown);
        assert_eq!(
            categorize("Generation adidas"),
            PlayerCategory::GenerationAdidas
        );
        assert_eq!(categorize("International Slot"), PlayerCategory::Standard);
        assert_eq!(categorize(""), PlayerCategory::Standard);
    }

    #[test]
    fn category_matching_is_case_sensitive() {
        assert_eq!(categorize("homegrown"), PlayerCategory::Standard);
    }

    #[test]
    fn builds_record_with_empty_defaults() {
        let terms = noise_terms();
        let classifier = RowClassifier::new(&terms);
        let record = classifier
            .classify(&row(&["J. Smith", "Homegrown", "Active"]), &columns(), &context())
            .unwrap();

        assert_eq!(
            record,
            PlayerRecord {
                team: "FC Example".to_owned(),
                name: "J. Smith".to_owned(),
                roster_designation: "Homegrown".to_owned(),
                current_status: "Active".to_owned(),
                contract_thru: String::new(),
                option_years: String::new(),
                category: PlayerCategory::Homegrown,
                roster_model: String::new(),
                team_gam: String::new(),
            }
        );
    }

    #[test]
    fn senior_roster_banner_is_noise_in_any_case() {
        let terms = noise_terms();
        let classifier = RowClassifier::new(&terms);
        for name in ["SENIOR ROSTER", "Senior Roster", "senior roster"] {
            let skip = classifier
                .classify(&row(&[name, "Homegrown", "Active"]), &columns(), &context())
                .unwrap_err();
            assert_eq!(
                skip,
                RowSkip::Noise {
                    term: "SENIOR ROSTER".to_owned()
                }
            );
        }
    }

    #[test]
    fn blank_or_missing_name_is_skipped() {
        let terms = noise_terms();
        let classifier = RowClassifier::new(&terms);
        let columns = ColumnMap::new(2);

        assert_eq!(
            classifier.classify(&row(&["9", "x"]), &columns, &context()),
            Err(RowSkip::MissingName)
        );
        assert_eq!(
            classifier.classify(&row(&["9", "x", "   "]), &columns, &context()),
            Err(RowSkip::MissingName)
        );
        assert_eq!(
            classifier.classify(&[None, None, None], &columns, &context()),
            Err(RowSkip::MissingName)
        );
    }

    #[test]
    fn ragged_rows_yield_empty_optional_fields() {
        let terms = noise_terms();
        let classifier = RowClassifier::new(&terms);
        let columns = columns().with(ColumnRole::OptionYears, 7);
        let record = classifier
            .classify(&[Some(" A. Keeper ".to_owned()), None], &columns, &context())
            .unwrap();

        assert_eq!(record.name, "A. Keeper");
        assert_eq!(record.roster_designation, "");
        assert_eq!(record.current_status, "");
        assert_eq!(record.option_years, "");
        assert_eq!(record.category, PlayerCategory::Standard);
    }

    #[test]
    fn row_without_team_is_not_attributed() {
        let terms = noise_terms();
        let classifier = RowClassifier::new(&terms);
        assert_eq!(
            classifier.classify(&row(&["J. Smith"]), &ColumnMap::new(0), &PageContext::default()),
            Err(RowSkip::NoTeam)
        );
    }

    #[test]
    fn context_fields_are_stamped() {
        let terms = noise_terms();
        let classifier = RowClassifier::new(&terms);
        let ctx = context()
            .with_roster_model("Designated Player Model".to_owned())
            .with_cap_available("1250000".to_owned());
        let record = classifier
            .classify(&row(&["J. Smith", "TAM Player"]), &columns(), &ctx)
            .unwrap();

        assert_eq!(record.roster_model, "Designated Player Model");
        assert_eq!(record.team_gam, "1250000");
        assert_eq!(record.category, PlayerCategory::TamPlayer);
    }
}
