#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the roster profile parser.
//!
//! Uses `indicatif-log-bridge` (via [`roster_profile_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and the batch progress bar never fight for the terminal.

mod batch;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use roster_profile::config::RosterProfileConfig;
use roster_profile::extract::{PageStatus, RosterExtractor};
use roster_profile::season::Season;
use roster_profile_pdf::RosterDocument;

#[derive(Parser)]
#[command(name = "roster_profile", about = "Club roster profile PDF parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse roster profile documents into per-season CSV files
    Parse {
        /// Documents to parse. If omitted, `--data-dir` is searched for
        /// files whose names contain "Roster Profile".
        files: Vec<PathBuf>,
        /// Directory searched when no files are given
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Directory for CSV output (defaults to each document's directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// TOML extraction profile overriding the built-in defaults
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Show how each page and table of a document is routed
    Inspect {
        /// Document to inspect
        file: PathBuf,
        /// TOML extraction profile overriding the built-in defaults
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Write a document's extracted pages and tables as a JSON page dump
    Dump {
        /// Document to dump
        file: PathBuf,
        /// Output path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in extraction profile as TOML
    Profile,
}

fn load_profile(path: Option<&Path>) -> Result<RosterProfileConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => RosterProfileConfig::load(path)?,
        None => RosterProfileConfig::default(),
    })
}

fn inspect(file: &Path, config: &RosterProfileConfig) -> Result<(), Box<dyn std::error::Error>> {
    let document = RosterDocument::open(file)?;
    let season = Season::from_document_name(document.name());
    let extraction = RosterExtractor::new(config.compile(season)?).extract(document.pages());

    println!("{} ({season} season)", document.name());
    for page in &extraction.pages {
        let status = match page.status {
            PageStatus::Cover => "cover",
            PageStatus::Unreadable => "unreadable",
            PageStatus::NoTeam => "no team yet",
            PageStatus::Scanned => "scanned",
        };
        println!(
            "page {:>3}  {status:<12} team={} model={} gam={}",
            page.number,
            page.context.team.as_deref().unwrap_or("-"),
            page.context.roster_model.as_deref().unwrap_or("-"),
            page.context.cap_available.as_deref().unwrap_or("-"),
        );
        for table in &page.tables {
            match &table.outcome {
                Ok(accepted) => println!(
                    "    table {}: roster (offset {}), {} player(s), {} row(s) skipped",
                    table.index, accepted.header_offset, accepted.records, accepted.skipped_rows
                ),
                Err(reason) => println!("    table {}: skipped ({reason})", table.index),
            }
        }
    }

    println!(
        "{} roster table(s), {} player(s)",
        extraction.tables_accepted(),
        extraction.records.len()
    );

    Ok(())
}

fn dump(file: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let document = RosterDocument::open(file)?;

    match output {
        Some(path) => {
            let out = std::io::BufWriter::new(std::fs::File::create(path)?);
            roster_profile_pdf::page_dump::write(out, document.pages())?;
            log::info!(
                "Wrote {} page(s) to {}",
                document.pages().len(),
                path.display()
            );
        }
        None => roster_profile_pdf::page_dump::write(std::io::stdout().lock(), document.pages())?,
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = roster_profile_cli_utils::init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            files,
            data_dir,
            output_dir,
            profile,
        } => {
            let profile = load_profile(profile.as_deref())?;

            let files = if files.is_empty() {
                roster_profile_pdf::discover_documents(&data_dir)?
            } else {
                files
            };

            if files.is_empty() {
                println!(
                    "No club roster profile documents found in {}.",
                    data_dir.display()
                );
                return Ok(());
            }

            log::info!("Found {} roster profile document(s)", files.len());

            let report = batch::run(
                &files,
                &batch::BatchOptions {
                    output_dir,
                    profile,
                },
                &multi,
            );

            for path in &report.written {
                println!("Saved to: {}", path.display());
            }
            log::info!(
                "{} written, {} with no data, {} failed",
                report.written.len(),
                report.empty.len(),
                report.failed.len()
            );
        }
        Commands::Inspect { file, profile } => {
            inspect(&file, &load_profile(profile.as_deref())?)?;
        }
        Commands::Dump { file, output } => dump(&file, output.as_deref())?,
        Commands::Profile => print!("{}", RosterProfileConfig::default().to_toml_string()?),
    }

    Ok(())
}
