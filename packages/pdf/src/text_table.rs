//! Table grids recovered from whitespace-aligned page text.
//!
//! Plain-text PDF extraction loses ruling lines, so table cells are
//! recovered from column alignment instead: a run of two or more spaces
//! (or a tab) separates cells, and consecutive non-blank lines form a
//! block. A block becomes a table when at least two of its lines split
//! into multiple cells.

use roster_profile_models::TableGrid;

/// Spaces that separate two cells.
const CELL_GAP: &str = "  ";

/// Multi-cell lines a block needs before it is treated as a table.
const MIN_TABLE_LINES: usize = 2;

/// Splits one line into trimmed, non-empty cells.
#[must_use]
pub fn split_cells(line: &str) -> Vec<String> {
    line.replace('\t', CELL_GAP)
        .split(CELL_GAP)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Recovers table grids from a page's text, in page order.
///
/// At most one single-cell line directly above a block's first multi-cell
/// line is kept, so a section banner stays attached to its table while
/// page titles and prose above it do not.
#[must_use]
pub fn grids_from_text(text: &str) -> Vec<TableGrid> {
    let mut grids = Vec::new();
    let mut block: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut grids);
        } else {
            block.push(split_cells(line));
        }
    }
    flush_block(&mut block, &mut grids);

    grids
}

fn flush_block(block: &mut Vec<Vec<String>>, grids: &mut Vec<TableGrid>) {
    let lines = std::mem::take(block);

    let multi_cell = lines.iter().filter(|cells| cells.len() > 1).count();
    if multi_cell < MIN_TABLE_LINES {
        return;
    }

    let Some(first) = lines.iter().position(|cells| cells.len() > 1) else {
        return;
    };
    let start = first.saturating_sub(1);

    log::trace!(
        "Recovered table of {} row(s) from text block",
        lines.len() - start
    );

    grids.push(TableGrid::new(
        lines
            .into_iter()
            .skip(start)
            .map(|cells| cells.into_iter().map(Some).collect())
            .collect(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_wide_gaps_only() {
        assert_eq!(
            split_cells("  J. Smith    Homegrown\tActive  2026 "),
            vec!["J. Smith", "Homegrown", "Active", "2026"]
        );
        assert_eq!(split_cells("Senior Roster"), vec!["Senior Roster"]);
    }

    #[test]
    fn recovers_table_with_banner_row() {
        let text = "REAL SALT LAKE | ROSTER PROFILE\n\
                    Roster Construction Model: Designated Player Model\n\
                    SENIOR ROSTER\n\
                    NAME        ROSTER DESIGNATION    STATUS\n\
                    J. Smith    Homegrown             Active\n\
                    A. Striker  Designated Player     Active\n\
                    \n\
                    Notes follow here.\n";

        let grids = grids_from_text(text);

        assert_eq!(grids.len(), 1);
        let grid = &grids[0];
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.row(0).unwrap(), &[Some("SENIOR ROSTER".to_owned())]);
        assert_eq!(
            grid.row(1).unwrap()[1].as_deref(),
            Some("ROSTER DESIGNATION")
        );
        assert_eq!(grid.row(3).unwrap()[0].as_deref(), Some("A. Striker"));
    }

    #[test]
    fn prose_blocks_are_not_tables() {
        let text = "Club overview\nA paragraph of text.\n\nKEY  Meaning\n";
        assert!(grids_from_text(text).is_empty());
    }

    #[test]
    fn blank_lines_separate_tables() {
        let text = "A  B\nC  D\n\nE  F\nG  H\n";
        assert_eq!(grids_from_text(text).len(), 2);
    }
}
