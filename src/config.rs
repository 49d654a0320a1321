//! Run configuration
//!
//! All options are carried in an explicit [`Config`] value handed to the
//! pipeline; nothing is read from ambient state.

use serde::{Deserialize, Serialize};

use crate::error::AuthorListError;

/// Which author block to emit.
///
/// The two styles are mutually exclusive. Selecting neither is valid and
/// produces only the acknowledgements block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStyle {
    /// Sequential `\author`/`\affiliation` directives (ApJ and friends).
    Apj,
    /// Superscript-numbered author line with a shared affiliation list
    /// (Nature and friends).
    Nature,
}

impl RenderStyle {
    /// Validate a pair of style flags at the configuration boundary.
    ///
    /// Requesting both styles is a hard error; requesting neither is allowed.
    pub fn from_flags(apj: bool, nature: bool) -> Result<Option<Self>, AuthorListError> {
        match (apj, nature) {
            (true, true) => Err(AuthorListError::ConfigConflict),
            (true, false) => Ok(Some(Self::Apj)),
            (false, true) => Ok(Some(Self::Nature)),
            (false, false) => Ok(None),
        }
    }
}

/// 0-based column indices into the roster table.
///
/// The defaults match the usual collaboration spreadsheet layout:
///
/// ```text
/// Lastname | First names | x | x | ORCID | Affiliations | Acks | ...
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterColumns {
    pub last_name: usize,
    pub first_names: usize,
    pub orcid: usize,
    pub affiliations: usize,
    pub acknowledgements: usize,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            last_name: 0,
            first_names: 1,
            orcid: 4,
            affiliations: 5,
            acknowledgements: 6,
        }
    }
}

impl RosterColumns {
    /// Minimum number of columns a roster row must have.
    pub fn required_width(&self) -> usize {
        1 + [
            self.last_name,
            self.first_names,
            self.orcid,
            self.affiliations,
            self.acknowledgements,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Immutable configuration for one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Header rows to discard from the top of the roster table.
    pub discard: usize,
    /// Header rows to discard from the top of the affiliation table.
    pub discard_affiliations: usize,
    /// Column layout of the roster table.
    pub columns: RosterColumns,
    /// Selected output style, if any.
    pub style: Option<RenderStyle>,
    /// Stable-sort authors by their raw last name.
    pub sort_by_surname: bool,
    /// Compact given names to initials (`John A.` becomes `J.~A.`).
    pub initials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discard: 3,
            discard_affiliations: 1,
            columns: RosterColumns::default(),
            style: None,
            sort_by_surname: false,
            initials: false,
        }
    }
}
