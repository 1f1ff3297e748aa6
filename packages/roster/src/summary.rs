//! Informational summary of an extracted roster.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use roster_profile_models::PlayerRecord;

/// Number of entries shown in the status and team-size breakdowns.
const TOP_N: usize = 10;

/// Number of records shown in the sample block.
const SAMPLE_ROWS: usize = 10;

const RULE_WIDTH: usize = 60;

/// Counts describing one document's extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    /// Distinct teams.
    pub teams: usize,
    /// Total player records.
    pub players: usize,
    /// Players per category, most common first.
    pub categories: Vec<(String, usize)>,
    /// Players per non-empty status, most common first, at most ten.
    pub statuses: Vec<(String, usize)>,
    /// Largest rosters, at most ten.
    pub team_sizes: Vec<(String, usize)>,
    /// First records in document order.
    pub sample: Vec<PlayerRecord>,
}

/// Tallies `values` and orders by descending count, then by value.
fn ranked<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_owned(), count))
        .collect();
    ranked.sort_by(|(a_value, a_count), (b_value, b_count)| {
        b_count.cmp(a_count).then_with(|| a_value.cmp(b_value))
    });
    ranked
}

impl RosterSummary {
    /// Builds the summary for `records`.
    #[must_use]
    pub fn from_records(records: &[PlayerRecord]) -> Self {
        let teams = records
            .iter()
            .map(|r| r.team.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let mut statuses = ranked(
            records
                .iter()
                .map(|r| r.current_status.as_str())
                .filter(|s| !s.is_empty()),
        );
        statuses.truncate(TOP_N);

        let mut team_sizes = ranked(records.iter().map(|r| r.team.as_str()));
        team_sizes.truncate(TOP_N);

        Self {
            teams,
            players: records.len(),
            categories: ranked(records.iter().map(|r| r.category.as_ref())),
            statuses,
            team_sizes,
            sample: records.iter().take(SAMPLE_ROWS).cloned().collect(),
        }
    }
}

impl fmt::Display for RosterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "SUMMARY STATISTICS")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total teams: {}", self.teams)?;
        writeln!(f, "Total players: {}", self.players)?;

        writeln!(f)?;
        writeln!(f, "Players by category:")?;
        for (category, count) in &self.categories {
            writeln!(f, "  {category}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "Players by status:")?;
        for (status, count) in &self.statuses {
            writeln!(f, "  {status}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "Top {TOP_N} teams by roster size:")?;
        for (team, count) in &self.team_sizes {
            writeln!(f, "  {team}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "SAMPLE DATA (first {SAMPLE_ROWS} rows)")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<28} {:<28} {:<20} CONTRACT THRU",
            "TEAM", "NAME", "CATEGORY"
        )?;
        for record in &self.sample {
            writeln!(
                f,
                "{:<28} {:<28} {:<20} {}",
                record.team, record.name, record.category, record.contract_thru
            )?;
        }

        Ok(())
    }
}
