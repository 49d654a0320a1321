//! Affiliation token splitting and acronym expansion

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AuthorListError;

/// Split a raw affiliation cell into trimmed tokens.
///
/// Cells use semicolons or commas as separators, inconsistently, so both are
/// honored: split on `;` first, then on `,`, drop anything empty after
/// trimming. Order is preserved and duplicates are kept; global deduplication
/// only happens when numbering affiliations for the Nature style.
pub fn split_affiliations(cell: &str) -> Vec<String> {
    cell.split(';')
        .flat_map(|part| part.split(','))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Acronym-to-full-text lookup for affiliations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationMap {
    entries: HashMap<String, String>,
}

impl AffiliationMap {
    /// Build the map from the affiliation table rows.
    ///
    /// Each row must hold exactly two fields, full text then acronym. A
    /// repeated acronym overwrites the earlier entry.
    pub fn load(rows: &[Vec<String>]) -> Result<Self, AuthorListError> {
        let mut entries = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != 2 {
                return Err(AuthorListError::MalformedRow {
                    row: i + 1,
                    expected: 2,
                    found: row.len(),
                });
            }
            entries.insert(row[1].trim().to_string(), row[0].trim().to_string());
        }
        Ok(Self { entries })
    }

    /// Expand an acronym, falling back to the raw token when unknown.
    ///
    /// Plenty of cells carry full affiliation text instead of an acronym, so
    /// a missing entry is expected and not reported.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
