//! Roster parsing and author ordering

use serde::{Deserialize, Serialize};

use crate::affiliation::split_affiliations;
use crate::config::Config;
use crate::error::AuthorListError;
use crate::name::display_name;

/// One author, as extracted from a roster row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// LaTeX-ready name, built by [`display_name`].
    pub display_name: String,
    /// Raw last-name cell, kept as the sort key.
    pub surname: String,
    /// ORCID identifier; empty when the cell was blank.
    pub orcid: String,
    /// Affiliation tokens in cell order, duplicates preserved.
    pub affiliations: Vec<String>,
}

/// Parsed roster: authors in row order plus collected acknowledgements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub authors: Vec<AuthorRecord>,
    pub acknowledgements: Vec<String>,
}

/// Parse the roster table into author records.
///
/// Row order is preserved, one record per row. A row narrower than the
/// configured column layout is a hard error; the whole run is abandoned
/// rather than producing a partial author list.
pub fn parse_roster(rows: &[Vec<String>], config: &Config) -> Result<Roster, AuthorListError> {
    let columns = &config.columns;
    let width = columns.required_width();

    let mut authors = Vec::with_capacity(rows.len());
    let mut acknowledgements = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if row.len() < width {
            return Err(AuthorListError::MalformedRow {
                row: i + 1,
                expected: width,
                found: row.len(),
            });
        }

        let surname = row[columns.last_name].trim().to_string();
        let orcid = row[columns.orcid].trim().to_string();
        let affiliations = split_affiliations(&row[columns.affiliations]);

        let ack = row[columns.acknowledgements].trim();
        if !ack.is_empty() {
            acknowledgements.push(ack.to_string());
        }

        authors.push(AuthorRecord {
            display_name: display_name(&row[columns.first_names], &surname, config.initials),
            surname,
            orcid,
            affiliations,
        });
    }

    Ok(Roster {
        authors,
        acknowledgements,
    })
}

/// Stable-sort the authors by their raw last name.
///
/// Case-sensitive byte ordering; authors sharing a surname keep their
/// original row order.
pub fn sort_by_surname(roster: &mut Roster) {
    roster.authors.sort_by(|a, b| a.surname.cmp(&b.surname));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    fn smith_row() -> Vec<String> {
        row(&["Smith", "John A.", "", "", "0000-0001", "MIT; CfA", "Thanks to X"])
    }

    #[test]
    fn test_parse_roster_record() {
        let rows = vec![smith_row()];
        let roster = parse_roster(&rows, &Config::default()).unwrap();

        assert_eq!(roster.authors.len(), 1);
        let author = &roster.authors[0];
        assert_eq!(author.display_name, "John A. Smith");
        assert_eq!(author.surname, "Smith");
        assert_eq!(author.orcid, "0000-0001");
        assert_eq!(author.affiliations, vec!["MIT", "CfA"]);
        assert_eq!(roster.acknowledgements, vec!["Thanks to X"]);
    }

    #[test]
    fn test_parse_roster_initials_mode() {
        let config = Config {
            initials: true,
            ..Config::default()
        };
        let roster = parse_roster(&[smith_row()], &config).unwrap();
        assert_eq!(roster.authors[0].display_name, "J.~A.~Smith");
    }

    #[test]
    fn test_parse_roster_record_per_row() {
        let rows = vec![
            row(&["Smith", "John", "", "", "", "MIT", ""]),
            row(&["Doe", "Jane", "", "", "", "CfA", ""]),
            row(&["Roe", "Richard", "", "", "", "", ""]),
        ];
        let roster = parse_roster(&rows, &Config::default()).unwrap();
        assert_eq!(roster.authors.len(), rows.len());
        assert!(roster.acknowledgements.is_empty());
        assert!(roster.authors[2].affiliations.is_empty());
    }

    #[test]
    fn test_parse_roster_malformed_row() {
        let rows = vec![
            row(&["Smith", "John", "", "", "", "MIT", ""]),
            row(&["Doe", "Jane"]),
        ];
        let err = parse_roster(&rows, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            AuthorListError::MalformedRow {
                row: 2,
                expected: 7,
                found: 2
            }
        ));
    }

    #[test]
    fn test_parse_roster_extra_columns_ignored() {
        let mut wide = smith_row();
        wide.push("scratch notes".to_string());
        let roster = parse_roster(&[wide], &Config::default()).unwrap();
        assert_eq!(roster.authors.len(), 1);
    }

    #[test]
    fn test_sort_by_surname_stable() {
        let rows = vec![
            row(&["Smith", "Zed", "", "", "", "", ""]),
            row(&["Adams", "Ann", "", "", "", "", ""]),
            row(&["Smith", "Amy", "", "", "", "", ""]),
        ];
        let mut roster = parse_roster(&rows, &Config::default()).unwrap();
        sort_by_surname(&mut roster);

        let names: Vec<&str> = roster
            .authors
            .iter()
            .map(|a| a.display_name.as_str())
            .collect();
        // Ties keep row order: Zed Smith stays ahead of Amy Smith.
        assert_eq!(names, vec!["Ann Adams", "Zed Smith", "Amy Smith"]);
    }

    #[test]
    fn test_sort_by_surname_case_sensitive() {
        let rows = vec![
            row(&["anderson", "A", "", "", "", "", ""]),
            row(&["Baker", "B", "", "", "", "", ""]),
        ];
        let mut roster = parse_roster(&rows, &Config::default()).unwrap();
        sort_by_surname(&mut roster);
        // Byte ordering puts uppercase first.
        assert_eq!(roster.authors[0].surname, "Baker");
    }
}
