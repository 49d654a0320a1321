//! Tab-separated table ingestion
//!
//! Spreadsheet TSV exports are plain tab-split text, so quoting is disabled
//! and rows may have ragged widths; width validation happens downstream where
//! the column layout is known.

use std::io::Read;

use tracing::debug;

use crate::error::AuthorListError;

/// Read all rows from a TSV stream, dropping `discard` header rows.
///
/// Each discarded row is reported through a `tracing` debug event so a run
/// can be checked against the spreadsheet layout.
pub fn read_rows<R: Read>(reader: R, discard: usize) -> Result<Vec<Vec<String>>, AuthorListError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        if i < discard {
            let line = record.iter().collect::<Vec<_>>().join("\t");
            debug!(row = i + 1, %line, "discarding header row");
            continue;
        }
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_discards_headers() {
        let input = b"Header A\tHeader B\nSmith\tJohn\nDoe\tJane\n";
        let rows = read_rows(&input[..], 1).unwrap();
        assert_eq!(rows, vec![vec!["Smith", "John"], vec!["Doe", "Jane"]]);
    }

    #[test]
    fn test_read_rows_no_discard() {
        let input = b"Smith\tJohn\n";
        let rows = read_rows(&input[..], 0).unwrap();
        assert_eq!(rows, vec![vec!["Smith", "John"]]);
    }

    #[test]
    fn test_read_rows_ragged_widths() {
        let input = b"a\tb\tc\nd\ne\tf\n";
        let rows = read_rows(&input[..], 0).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 2);
    }

    #[test]
    fn test_read_rows_keeps_quotes_verbatim() {
        // Spreadsheet exports are not RFC 4180; quotes are data.
        let input = b"\"MIT\"\tMassachusetts\n";
        let rows = read_rows(&input[..], 0).unwrap();
        assert_eq!(rows[0][0], "\"MIT\"");
    }

    #[test]
    fn test_read_rows_discard_past_end() {
        let input = b"only\trow\n";
        let rows = read_rows(&input[..], 5).unwrap();
        assert!(rows.is_empty());
    }
}
