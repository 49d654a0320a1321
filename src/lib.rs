//! Author list and affiliation formatting
//!
//! Turns two spreadsheet exports — a collaboration roster and an affiliation
//! acronym table — into the LaTeX author/affiliation block of a journal
//! submission, in either the ApJ or the Nature style, plus a deduplicated
//! acknowledgements block.
//!
//! The pipeline is a deterministic single pass:
//!
//! 1. [`table::read_rows`] ingests the TSV tables, discarding header rows
//! 2. [`roster::parse_roster`] builds one [`AuthorRecord`] per row and
//!    collects acknowledgements
//! 3. [`affiliation::AffiliationMap`] expands acronyms to full text
//! 4. [`roster::sort_by_surname`] optionally orders authors
//! 5. [`render::render`] emits the selected style and the
//!    acknowledgements block
//!
//! File handling and flag parsing live in the optional `cli` binary; the
//! library itself only sees already-read tabular data.

pub mod affiliation;
pub mod config;
pub mod error;
pub mod name;
pub mod render;
pub mod roster;
pub mod table;

pub use affiliation::{split_affiliations, AffiliationMap};
pub use config::{Config, RenderStyle, RosterColumns};
pub use error::AuthorListError;
pub use render::render;
pub use roster::{parse_roster, sort_by_surname, AuthorRecord, Roster};

/// Run the whole pipeline on already-read table rows.
///
/// The affiliation table is loaded first so a malformed lookup table aborts
/// before any author parsing; no partial output is produced on error.
pub fn generate(
    roster_rows: &[Vec<String>],
    affiliation_rows: &[Vec<String>],
    config: &Config,
) -> Result<String, AuthorListError> {
    let affiliations = AffiliationMap::load(affiliation_rows)?;
    let mut roster = parse_roster(roster_rows, config)?;
    if config.sort_by_surname {
        sort_by_surname(&mut roster);
    }
    Ok(render(&roster, &affiliations, config.style))
}
