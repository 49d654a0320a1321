//! im-authors CLI
//!
//! Reads a roster TSV and an affiliation TSV (Google spreadsheet exports)
//! and prints the LaTeX author fragment to stdout. Diagnostics go to stderr.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use im_authors::{generate, table, Config, RenderStyle, RosterColumns};

#[derive(Parser, Debug)]
#[command(name = "im-authors", version, about = "Format a collaboration roster as a LaTeX author block")]
struct Cli {
    /// Author roster TSV export
    roster_tsv: PathBuf,

    /// Affiliation acronym TSV export (full text, acronym)
    affiliations_tsv: PathBuf,

    /// Number of header rows to discard from the roster
    #[arg(long, default_value_t = 3)]
    discard: usize,

    /// Number of header rows to discard from the affiliation table
    #[arg(long = "discard-affil", default_value_t = 1)]
    discard_affil: usize,

    /// Column index of the author last name
    #[arg(long, default_value_t = 0)]
    lastname_index: usize,

    /// Column index of the author non-last names
    #[arg(long, default_value_t = 1)]
    firstname_index: usize,

    /// Column index of the author ORCID
    #[arg(long, default_value_t = 4)]
    orcid_index: usize,

    /// Column index of the affiliation acronyms
    #[arg(long, default_value_t = 5)]
    affil_index: usize,

    /// Column index of the acknowledgements
    #[arg(long, default_value_t = 6)]
    ack_index: usize,

    /// Emit the ApJ-style \author/\affiliation block
    #[arg(long)]
    apj: bool,

    /// Emit the Nature-style superscript-numbered block
    #[arg(long)]
    nature: bool,

    /// Sort authors by last name
    #[arg(long)]
    sort: bool,

    /// Compact given names to initials
    #[arg(long)]
    initials: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config {
        discard: cli.discard,
        discard_affiliations: cli.discard_affil,
        columns: RosterColumns {
            last_name: cli.lastname_index,
            first_names: cli.firstname_index,
            orcid: cli.orcid_index,
            affiliations: cli.affil_index,
            acknowledgements: cli.ack_index,
        },
        style: RenderStyle::from_flags(cli.apj, cli.nature)?,
        sort_by_surname: cli.sort,
        initials: cli.initials,
    };

    let roster_rows = table::read_rows(File::open(&cli.roster_tsv)?, config.discard)?;
    let affiliation_rows = table::read_rows(
        File::open(&cli.affiliations_tsv)?,
        config.discard_affiliations,
    )?;

    print!("{}", generate(&roster_rows, &affiliation_rows, &config)?);
    Ok(())
}
