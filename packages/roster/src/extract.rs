//! Document walk: pages → context → tables → player records.
//!
//! Pages are processed strictly in order because team attribution is
//! carried forward: rows on a page without its own team header belong to
//! the most recently seen team. The context is threaded through the walk
//! as a value so every record is stamped with the context in effect when
//! its row was read.

use roster_profile_models::{Page, PageContext, PlayerRecord, TableGrid};

use crate::EmptyExtraction;
use crate::classify::RowClassifier;
use crate::config::CompiledProfile;
use crate::header::{self, NotARosterTable};

/// What happened to a page during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// One of the leading cover/info pages.
    Cover,
    /// Extraction produced no text.
    Unreadable,
    /// Read, but no team has been seen yet so its tables were ignored.
    NoTeam,
    /// Read and its tables routed.
    Scanned,
}

/// Routing outcome for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// Zero-based position of the table on its page.
    pub index: usize,
    /// Accepted header offset and emitted record count, or the rejection.
    pub outcome: Result<AcceptedTable, NotARosterTable>,
}

/// A table that resolved as a roster table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedTable {
    /// Index of the first data row.
    pub header_offset: usize,
    /// Records emitted from this table.
    pub records: usize,
    /// Data rows skipped as non-player rows.
    pub skipped_rows: usize,
}

/// Per-page trace of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// One-based page number.
    pub number: usize,
    /// How the page was handled.
    pub status: PageStatus,
    /// Context in effect after reading the page.
    pub context: PageContext,
    /// Routing of each table, empty unless the page was scanned.
    pub tables: Vec<TableReport>,
}

/// Result of walking a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterExtraction {
    /// Records in document order.
    pub records: Vec<PlayerRecord>,
    /// Per-page trace.
    pub pages: Vec<PageReport>,
}

impl RosterExtraction {
    /// Number of tables accepted as roster tables.
    #[must_use]
    pub fn tables_accepted(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.tables)
            .filter(|t| t.outcome.is_ok())
            .count()
    }

    /// Distinguishes "nothing extracted" from a successful walk.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyExtraction::NoRosterTables`] if no table was
    /// accepted, or [`EmptyExtraction::NoPlayers`] if tables were accepted
    /// but yielded no players.
    pub fn into_records(self) -> Result<Vec<PlayerRecord>, EmptyExtraction> {
        if self.tables_accepted() == 0 {
            return Err(EmptyExtraction::NoRosterTables);
        }
        if self.records.is_empty() {
            return Err(EmptyExtraction::NoPlayers);
        }
        Ok(self.records)
    }
}

/// Walks roster documents with a compiled profile.
#[derive(Debug, Clone)]
pub struct RosterExtractor {
    profile: CompiledProfile,
}

impl RosterExtractor {
    /// Creates an extractor for `profile`.
    #[must_use]
    pub const fn new(profile: CompiledProfile) -> Self {
        Self { profile }
    }

    /// The profile in use.
    #[must_use]
    pub const fn profile(&self) -> &CompiledProfile {
        &self.profile
    }

    /// Extracts player records from `pages` in document order.
    #[must_use]
    pub fn extract(&self, pages: &[Page]) -> RosterExtraction {
        let mut records = Vec::new();
        let mut reports = Vec::with_capacity(pages.len());
        let mut context = PageContext::default();

        for (position, page) in pages.iter().enumerate() {
            let number = if page.number == 0 {
                position + 1
            } else {
                page.number
            };

            let cover = position < self.profile.skip_pages;
            let (next, report) = self.process_page(context, number, cover, page, &mut records);
            context = next;
            reports.push(report);
        }

        log::debug!(
            "Walked {} page(s), {} record(s)",
            reports.len(),
            records.len()
        );

        RosterExtraction {
            records,
            pages: reports,
        }
    }

    /// Processes one page, returning the context that follows it.
    fn process_page(
        &self,
        context: PageContext,
        number: usize,
        cover: bool,
        page: &Page,
        records: &mut Vec<PlayerRecord>,
    ) -> (PageContext, PageReport) {
        let report = |status, context: &PageContext, tables| PageReport {
            number,
            status,
            context: context.clone(),
            tables,
        };

        if cover {
            log::trace!("Page {number}: cover page, skipped");
            let r = report(PageStatus::Cover, &context, Vec::new());
            return (context, r);
        }

        let Some(text) = page.readable_text() else {
            log::debug!("Page {number}: no extractable text, skipped");
            let r = report(PageStatus::Unreadable, &context, Vec::new());
            return (context, r);
        };

        let context = self.profile.context.update(context, text);

        if !context.has_team() {
            log::debug!("Page {number}: no team seen yet, tables ignored");
            let r = report(PageStatus::NoTeam, &context, Vec::new());
            return (context, r);
        }

        let tables = page
            .tables
            .iter()
            .enumerate()
            .map(|(index, table)| TableReport {
                index,
                outcome: self.process_table(number, index, table, &context, records),
            })
            .collect();

        let r = report(PageStatus::Scanned, &context, tables);
        (context, r)
    }

    /// Routes one table and appends its player records.
    fn process_table(
        &self,
        page: usize,
        index: usize,
        table: &TableGrid,
        context: &PageContext,
        records: &mut Vec<PlayerRecord>,
    ) -> Result<AcceptedTable, NotARosterTable> {
        let resolved = header::resolve(table, &self.profile.header_marker).inspect_err(|reason| {
            log::debug!("Page {page} table {index}: not a roster table ({reason})");
        })?;

        let classifier = RowClassifier::new(&self.profile.noise_terms);
        let before = records.len();
        let mut skipped_rows = 0;

        for row in table.rows().iter().skip(resolved.header_offset) {
            match classifier.classify(row, &resolved.columns, context) {
                Ok(record) => records.push(record),
                Err(skip) => {
                    log::trace!("Page {page} table {index}: row skipped ({skip})");
                    skipped_rows += 1;
                }
            }
        }

        let emitted = records.len() - before;
        log::debug!(
            "Page {page} table {index}: roster table (offset {}), {emitted} player(s)",
            resolved.header_offset
        );

        Ok(AcceptedTable {
            header_offset: resolved.header_offset,
            records: emitted,
            skipped_rows,
        })
    }
}
