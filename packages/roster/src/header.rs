//! Roster table recognition and column role resolution.
//!
//! Roster tables do not have a fixed layout: the header row may be the
//! first or second row (some tables carry a section banner above it) and
//! column order varies between clubs. Columns are therefore located by
//! keyword matching against the normalized header text.

use std::fmt;

use roster_profile_models::{ColumnMap, ColumnRole, TableGrid};

/// Token every roster header must contain.
const NAME_TOKEN: &str = "NAME";

/// Rows tried as the header row, in order.
const HEADER_CANDIDATE_ROWS: usize = 2;

/// Keywords a header cell must contain (all of them) to take a role.
///
/// Ordered by precedence: a cell takes the first role it matches that is
/// still unassigned.
const ROLE_KEYWORDS: &[(ColumnRole, &[&str])] = &[
    (ColumnRole::Name, &["NAME"]),
    (ColumnRole::Designation, &["DESIGNATION"]),
    (ColumnRole::Status, &["STATUS"]),
    (ColumnRole::ContractThru, &["CONTRACT", "THRU"]),
    (ColumnRole::OptionYears, &["OPTION"]),
];

/// A table accepted as a roster table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    /// Column roles.
    pub columns: ColumnMap,
    /// Index of the first data row.
    pub header_offset: usize,
}

/// Why a table was not treated as a roster table.
///
/// This is a routing decision: pages routinely carry legend and note
/// tables alongside the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotARosterTable {
    /// Fewer than two rows, so no header plus data.
    TooFewRows,
    /// Neither candidate row contains the header marker.
    NoHeaderRow,
    /// The header row has no `NAME` token.
    MissingNameToken,
    /// No header cell could be bound to the name role.
    NameColumnUnresolved,
}

impl fmt::Display for NotARosterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::TooFewRows => "fewer than two rows",
            Self::NoHeaderRow => "no header row in the first two rows",
            Self::MissingNameToken => "header row has no NAME token",
            Self::NameColumnUnresolved => "no header cell resolves to the name column",
        };
        f.write_str(reason)
    }
}

/// Uppercased, trimmed header cells. Missing cells become empty strings.
fn normalize_row(row: &[Option<String>]) -> Vec<String> {
    row.iter()
        .map(|cell| cell.as_deref().unwrap_or_default().trim().to_uppercase())
        .collect()
}

/// Whether the joined row text contains `phrase`.
fn row_contains(cells: &[String], phrase: &str) -> bool {
    cells.join(" ").contains(phrase)
}

/// Decides whether `table` is a roster table and maps its columns.
///
/// `header_marker` must already be uppercased.
///
/// # Errors
///
/// Returns the [`NotARosterTable`] reason when the table should be
/// skipped.
pub fn resolve(table: &TableGrid, header_marker: &str) -> Result<ResolvedHeader, NotARosterTable> {
    if table.len() < 2 {
        return Err(NotARosterTable::TooFewRows);
    }

    let (header, header_offset) = table
        .rows()
        .iter()
        .take(HEADER_CANDIDATE_ROWS)
        .enumerate()
        .map(|(index, row)| (normalize_row(row), index + 1))
        .find(|(cells, _)| row_contains(cells, header_marker))
        .ok_or(NotARosterTable::NoHeaderRow)?;

    if !row_contains(&header, NAME_TOKEN) {
        return Err(NotARosterTable::MissingNameToken);
    }

    let columns = assign_roles(&header).ok_or(NotARosterTable::NameColumnUnresolved)?;

    Ok(ResolvedHeader {
        columns,
        header_offset,
    })
}

/// Scans header cells left to right, binding each role to the first cell
/// that matches it. Returns `None` if no name column was found.
fn assign_roles(header: &[String]) -> Option<ColumnMap> {
    let mut bound: Vec<(ColumnRole, usize)> = Vec::with_capacity(ROLE_KEYWORDS.len());

    for (index, cell) in header.iter().enumerate() {
        let role = ROLE_KEYWORDS.iter().find(|(role, keywords)| {
            !bound.iter().any(|(taken, _)| taken == role)
                && keywords.iter().all(|keyword| cell.contains(keyword))
        });
        if let Some(&(role, _)) = role {
            bound.push((role, index));
        }
    }

    let name = bound
        .iter()
        .find(|(role, _)| *role == ColumnRole::Name)
        .map(|&(_, index)| index)?;

    Some(
        bound
            .into_iter()
            .filter(|(role, _)| *role != ColumnRole::Name)
            .fold(ColumnMap::new(name), |map, (role, index)| {
                map.with(role, index)
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "ROSTER DESIGNATION";

    fn grid(rows: &[&[&str]]) -> TableGrid {
        TableGrid::from_strings(rows.iter().map(|r| r.iter().copied()))
    }

    #[test]
    fn header_in_first_row_uses_offset_one() {
        let table = grid(&[
            &["NAME", "ROSTER DESIGNATION", "STATUS"],
            &["J. Smith", "Homegrown", "Active"],
        ]);
        let resolved = resolve(&table, MARKER).unwrap();
        assert_eq!(resolved.header_offset, 1);
        assert_eq!(resolved.columns.name(), 0);
        assert_eq!(resolved.columns.index(ColumnRole::Designation), Some(1));
        assert_eq!(resolved.columns.index(ColumnRole::Status), Some(2));
        assert_eq!(resolved.columns.index(ColumnRole::ContractThru), None);
    }

    #[test]
    fn banner_above_header_uses_offset_two() {
        let table = grid(&[
            &["SENIOR ROSTER"],
            &["No.", "Player Name", "Roster Designation", "Contract Thru", "Option Years"],
            &["9", "A. Striker", "Designated Player", "2026", "2027"],
        ]);
        let resolved = resolve(&table, MARKER).unwrap();
        assert_eq!(resolved.header_offset, 2);
        assert_eq!(resolved.columns.name(), 1);
        assert_eq!(resolved.columns.index(ColumnRole::Designation), Some(2));
        assert_eq!(resolved.columns.index(ColumnRole::ContractThru), Some(3));
        assert_eq!(resolved.columns.index(ColumnRole::OptionYears), Some(4));
    }

    #[test]
    fn table_without_marker_is_rejected() {
        let table = grid(&[&["LEGEND", "MEANING"], &["DP", "Designated Player"]]);
        assert_eq!(resolve(&table, MARKER), Err(NotARosterTable::NoHeaderRow));
    }

    #[test]
    fn marker_below_second_row_is_not_searched() {
        let table = grid(&[
            &["CLUB NOTES"],
            &["SENIOR ROSTER"],
            &["NAME", "ROSTER DESIGNATION"],
            &["J. Smith", "Homegrown"],
        ]);
        assert_eq!(resolve(&table, MARKER), Err(NotARosterTable::NoHeaderRow));
    }

    #[test]
    fn header_without_name_token_is_rejected() {
        let table = grid(&[
            &["PLAYER", "ROSTER DESIGNATION"],
            &["J. Smith", "Homegrown"],
        ]);
        assert_eq!(
            resolve(&table, MARKER),
            Err(NotARosterTable::MissingNameToken)
        );
    }

    #[test]
    fn single_row_table_is_rejected() {
        let table = grid(&[&["NAME", "ROSTER DESIGNATION"]]);
        assert_eq!(resolve(&table, MARKER), Err(NotARosterTable::TooFewRows));
    }

    #[test]
    fn first_name_column_wins() {
        let table = grid(&[
            &["NAME", "ROSTER DESIGNATION", "CLUB NAME", "STATUS", "STATUS NOTE"],
            &["J. Smith", "Homegrown", "FC Example", "Active", ""],
        ]);
        let resolved = resolve(&table, MARKER).unwrap();
        assert_eq!(resolved.columns.name(), 0);
        assert_eq!(resolved.columns.index(ColumnRole::Status), Some(3));
    }

    #[test]
    fn header_cells_are_normalized_before_matching() {
        let table = TableGrid::new(vec![
            vec![
                Some("  name ".to_owned()),
                None,
                Some("roster designation".to_owned()),
                Some("current status".to_owned()),
                Some("contract\nthru".to_owned()),
            ],
            vec![Some("J. Smith".to_owned())],
        ]);
        let resolved = resolve(&table, MARKER).unwrap();
        assert_eq!(resolved.columns.name(), 0);
        assert_eq!(resolved.columns.index(ColumnRole::Designation), Some(2));
        assert_eq!(resolved.columns.index(ColumnRole::Status), Some(3));
        assert_eq!(resolved.columns.index(ColumnRole::ContractThru), Some(4));
    }

    #[test]
    fn contract_column_needs_both_keywords() {
        let table = grid(&[
            &["NAME", "ROSTER DESIGNATION", "CONTRACT TYPE", "CONTRACT THRU"],
            &["J. Smith", "Homegrown", "Guaranteed", "2027"],
        ]);
        let resolved = resolve(&table, MARKER).unwrap();
        assert_eq!(resolved.columns.index(ColumnRole::ContractThru), Some(3));
    }
}
