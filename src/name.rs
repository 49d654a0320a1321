//! Author display-name construction
//!
//! Builds the LaTeX form of an author name from the raw first/last spreadsheet
//! cells: whitespace cleanup, diacritic-to-LaTeX substitution, and optional
//! compaction of given names to `~`-tied initials.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::warn;

lazy_static! {
    /// Unicode letters mapped to their LaTeX-escaped equivalents.
    ///
    /// This is the inverse direction of the accent tables used when decoding
    /// BibTeX; only the braced argument forms are emitted so the output is
    /// unambiguous inside a name.
    static ref LATEX_ACCENTS: HashMap<char, &'static str> = {
        let pairs: &[(char, &str)] = &[
            // Umlaut (diaeresis)
            ('ä', "\\\"{a}"), ('Ä', "\\\"{A}"),
            ('ë', "\\\"{e}"), ('Ë', "\\\"{E}"),
            ('ï', "\\\"{i}"), ('Ï', "\\\"{I}"),
            ('ö', "\\\"{o}"), ('Ö', "\\\"{O}"),
            ('ü', "\\\"{u}"), ('Ü', "\\\"{U}"),
            ('ÿ', "\\\"{y}"), ('Ÿ', "\\\"{Y}"),

            // Acute accent
            ('á', "\\'{a}"), ('Á', "\\'{A}"),
            ('é', "\\'{e}"), ('É', "\\'{E}"),
            ('í', "\\'{i}"), ('Í', "\\'{I}"),
            ('ó', "\\'{o}"), ('Ó', "\\'{O}"),
            ('ú', "\\'{u}"), ('Ú', "\\'{U}"),
            ('ý', "\\'{y}"), ('Ý', "\\'{Y}"),
            ('ć', "\\'{c}"), ('Ć', "\\'{C}"),
            ('ś', "\\'{s}"), ('Ś', "\\'{S}"),
            ('ź', "\\'{z}"), ('Ź', "\\'{Z}"),
            ('ń', "\\'{n}"), ('Ń', "\\'{N}"),

            // Grave accent
            ('à', "\\`{a}"), ('À', "\\`{A}"),
            ('è', "\\`{e}"), ('È', "\\`{E}"),
            ('ì', "\\`{i}"), ('Ì', "\\`{I}"),
            ('ò', "\\`{o}"), ('Ò', "\\`{O}"),
            ('ù', "\\`{u}"), ('Ù', "\\`{U}"),

            // Circumflex
            ('â', "\\^{a}"), ('Â', "\\^{A}"),
            ('ê', "\\^{e}"), ('Ê', "\\^{E}"),
            ('î', "\\^{i}"), ('Î', "\\^{I}"),
            ('ô', "\\^{o}"), ('Ô', "\\^{O}"),
            ('û', "\\^{u}"), ('Û', "\\^{U}"),

            // Tilde
            ('ã', "\\~{a}"), ('Ã', "\\~{A}"),
            ('ñ', "\\~{n}"), ('Ñ', "\\~{N}"),
            ('õ', "\\~{o}"), ('Õ', "\\~{O}"),

            // Cedilla
            ('ç', "\\c{c}"), ('Ç', "\\c{C}"),

            // Caron
            ('č', "\\v{c}"), ('Č', "\\v{C}"),
            ('š', "\\v{s}"), ('Š', "\\v{S}"),
            ('ž', "\\v{z}"), ('Ž', "\\v{Z}"),
            ('ř', "\\v{r}"), ('Ř', "\\v{R}"),

            // Breve
            ('ă', "\\u{a}"), ('Ă', "\\u{A}"),
            ('ğ', "\\u{g}"), ('Ğ', "\\u{G}"),

            // Macron
            ('ā', "\\={a}"), ('Ā', "\\={A}"),
            ('ē', "\\={e}"), ('Ē', "\\={E}"),
            ('ī', "\\={i}"), ('Ī', "\\={I}"),
            ('ō', "\\={o}"), ('Ō', "\\={O}"),
            ('ū', "\\={u}"), ('Ū', "\\={U}"),

            // Dot above
            ('ż', "\\.{z}"), ('Ż', "\\.{Z}"),

            // Ogonek
            ('ą', "\\k{a}"), ('Ą', "\\k{A}"),
            ('ę', "\\k{e}"), ('Ę', "\\k{E}"),

            // Letters without an accent argument
            ('ł', "{\\l}"), ('Ł', "{\\L}"),
            ('ø', "{\\o}"), ('Ø', "{\\O}"),
            ('å', "{\\aa}"), ('Å', "{\\AA}"),
            ('æ', "{\\ae}"), ('Æ', "{\\AE}"),
            ('œ', "{\\oe}"), ('Œ', "{\\OE}"),
            ('ß', "{\\ss}"),
            ('ı', "{\\i}"),
        ];
        pairs.iter().copied().collect()
    };
}

/// Build the display form of an author name.
///
/// Both parts are trimmed and internal whitespace runs collapsed, diacritics
/// are replaced by their LaTeX escapes, and with `initials` on every name
/// component except the last is reduced to its first letter, all components
/// tied with `~` for proper LaTeX spacing:
///
/// `("John A.", "Smith")` becomes `J.~A.~Smith`.
pub fn display_name(first: &str, last: &str, initials: bool) -> String {
    let first = collapse_whitespace(first.trim());
    let last = collapse_whitespace(last.trim());

    let full = if first.is_empty() {
        last
    } else if last.is_empty() {
        first
    } else {
        format!("{} {}", first, last)
    };

    let escaped = escape_diacritics(&full);
    if !initials {
        return escaped;
    }

    let compacted = compact_initials(&escaped);
    if !compacted
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        // A leading escape sequence or stray punctuation made it into the
        // initial; the spreadsheet cell needs a look.
        warn!(name = %compacted, "compacted name does not start with an ASCII letter");
    }
    compacted
}

/// Replace every supported diacritic with its LaTeX escape.
///
/// Characters outside the table pass through unchanged.
pub fn escape_diacritics(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match LATEX_ACCENTS.get(&c) {
            Some(escaped) => result.push_str(escaped),
            None => result.push(c),
        }
    }
    result
}

/// Reduce all but the last name component to initials, tied with `~`.
///
/// Single forward pass over the components; components that already are
/// initials ("A.") keep their single letter.
fn compact_initials(name: &str) -> String {
    let components: Vec<&str> = name.split_whitespace().collect();
    let Some((&family, given)) = components.split_last() else {
        return String::new();
    };

    let mut result = String::with_capacity(name.len());
    for part in given {
        if let Some(c) = part.chars().next() {
            result.push(c);
            result.push('.');
            result.push('~');
        }
    }
    result.push_str(family);
    result
}

/// Collapse whitespace runs into a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_plain() {
        assert_eq!(display_name("John A.", "Smith", false), "John A. Smith");
    }

    #[test]
    fn test_display_name_initials() {
        assert_eq!(display_name("John A.", "Smith", true), "J.~A.~Smith");
        assert_eq!(display_name("John", "Smith", true), "J.~Smith");
    }

    #[test]
    fn test_display_name_trims_and_collapses() {
        assert_eq!(display_name("  John  A. ", " Smith ", false), "John A. Smith");
    }

    #[test]
    fn test_display_name_missing_parts() {
        assert_eq!(display_name("", "Smith", true), "Smith");
        assert_eq!(display_name("Prince", "", false), "Prince");
        assert_eq!(display_name("", "", true), "");
    }

    #[test]
    fn test_umlaut_escaping() {
        assert_eq!(
            display_name("Moritz", "Münchmeyer", false),
            "Moritz M\\\"{u}nchmeyer"
        );
        assert_eq!(escape_diacritics("Müller"), "M\\\"{u}ller");
    }

    #[test]
    fn test_acute_and_tilde_escaping() {
        assert_eq!(escape_diacritics("José"), "Jos\\'{e}");
        assert_eq!(escape_diacritics("Muñoz"), "Mu\\~{n}oz");
    }

    #[test]
    fn test_argumentless_letters() {
        assert_eq!(escape_diacritics("Søren"), "S{\\o}ren");
        assert_eq!(escape_diacritics("Straße"), "Stra{\\ss}e");
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(escape_diacritics("plain ASCII-name"), "plain ASCII-name");
    }

    #[test]
    fn test_initials_with_leading_diacritic() {
        // "Ülrich" escapes to \"{U}lrich, so the initial starts with a
        // backslash; the name still renders, only a warning is emitted.
        let name = display_name("Ülrich", "Schmidt", true);
        assert!(name.ends_with("~Schmidt"));
        assert!(!name.starts_with(|c: char| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_initials_single_component() {
        assert_eq!(compact_initials("Smith"), "Smith");
    }
}
