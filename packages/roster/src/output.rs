//! CSV persistence of extracted player records.

use std::io::Write;
use std::path::{Path, PathBuf};

use roster_profile_models::PlayerRecord;

use crate::RosterError;
use crate::season::Season;

/// Output column names, in order.
pub const OUTPUT_COLUMNS: &[&str] = &[
    "team",
    "name",
    "roster_designation",
    "current_status",
    "contract_thru",
    "option_years",
    "category",
    "roster_model",
    "team_gam",
];

/// Writes `records` as CSV with a header row.
///
/// The header is written even when `records` is empty.
///
/// # Errors
///
/// Returns [`RosterError::Csv`] if writing fails.
pub fn write_csv<W: Write>(writer: W, records: &[PlayerRecord]) -> Result<(), RosterError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Writes `records` to `<dir>/<season>_roster_profiles_parsed.csv` and
/// returns the path written.
///
/// # Errors
///
/// Returns [`RosterError::Io`] if the file cannot be created, or
/// [`RosterError::Csv`] if writing fails.
pub fn write_csv_file(
    dir: &Path,
    season: Season,
    records: &[PlayerRecord],
) -> Result<PathBuf, RosterError> {
    let path = dir.join(season.output_filename());
    let file = std::fs::File::create(&path)?;
    write_csv(std::io::BufWriter::new(file), records)?;

    log::info!("Wrote {} record(s) to {}", records.len(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use roster_profile_models::PlayerCategory;

    use super::*;

    fn record(name: &str, designation: &str, category: PlayerCategory) -> PlayerRecord {
        PlayerRecord {
            team: "NEW YORK CITY FC".to_owned(),
            name: name.to_owned(),
            roster_designation: designation.to_owned(),
            current_status: "Active".to_owned(),
            contract_thru: "2026".to_owned(),
            option_years: String::new(),
            category,
            roster_model: "Designated Player Model".to_owned(),
            team_gam: "425000".to_owned(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_column_order() {
        let records = vec![
            record("J. Smith", "Homegrown", PlayerCategory::Homegrown),
            record(
                "A. Striker",
                "Young Designated Player, U22",
                PlayerCategory::DesignatedPlayer,
            ),
        ];
        let mut out = Vec::new();
        write_csv(&mut out, &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "team,name,roster_designation,current_status,contract_thru,option_years,category,roster_model,team_gam"
        );
        assert_eq!(
            lines[1],
            "NEW YORK CITY FC,J. Smith,Homegrown,Active,2026,,Homegrown,Designated Player Model,425000"
        );
        assert_eq!(
            lines[2],
            "NEW YORK CITY FC,A. Striker,\"Young Designated Player, U22\",Active,2026,,Designated Player,Designated Player Model,425000"
        );
    }

    #[test]
    fn empty_output_still_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
