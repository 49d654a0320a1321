//! LaTeX rendering of the author list
//!
//! Two mutually exclusive author-block styles plus the acknowledgements block
//! that is emitted on every run. Output is accumulated into a plain `String`;
//! callers decide where it goes.

use tracing::debug;

use crate::affiliation::AffiliationMap;
use crate::config::RenderStyle;
use crate::roster::Roster;

/// Render the author block for the selected style, then the
/// acknowledgements block.
///
/// With no style selected only the acknowledgements block is produced.
pub fn render(roster: &Roster, affiliations: &AffiliationMap, style: Option<RenderStyle>) -> String {
    let mut out = String::new();
    match style {
        Some(RenderStyle::Apj) => render_apj(&mut out, roster, affiliations),
        Some(RenderStyle::Nature) => render_nature(&mut out, roster, affiliations),
        None => {}
    }
    render_acknowledgements(&mut out, &roster.acknowledgements);
    out
}

/// ApJ style: one `\author` directive per author, each followed by its
/// `\affiliation` directives.
fn render_apj(out: &mut String, roster: &Roster, affiliations: &AffiliationMap) {
    for author in &roster.authors {
        if author.orcid.is_empty() {
            out.push_str(&format!("\\author{{{}}}\n", author.display_name));
        } else {
            out.push_str(&format!(
                "\\author[{}]{{{}}}\n",
                author.orcid, author.display_name
            ));
        }
        for token in &author.affiliations {
            out.push_str(&format!(
                "  \\affiliation{{{}}}\n",
                affiliations.resolve(token)
            ));
        }
    }
}

/// Nature style: a single `\author` block with superscript indices into a
/// shared, first-seen-ordered affiliation list, followed by an
/// `\affils` definition holding that list.
fn render_nature(out: &mut String, roster: &Roster, affiliations: &AffiliationMap) {
    let mut unique: Vec<&str> = Vec::new();

    out.push_str("\\author{\n");
    let last = roster.authors.len().saturating_sub(1);
    for (i, author) in roster.authors.iter().enumerate() {
        // 1-based indices into the global list, deduplicated per author.
        let mut indices: Vec<usize> = Vec::new();
        for token in &author.affiliations {
            let index = match unique.iter().position(|u| *u == token.as_str()) {
                Some(p) => p,
                None => {
                    unique.push(token);
                    unique.len() - 1
                }
            };
            if !indices.contains(&(index + 1)) {
                indices.push(index + 1);
            }
        }

        let superscript = if indices.is_empty() {
            String::new()
        } else {
            let joined = indices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            format!("$^{{{}}}$", joined)
        };
        let separator = if i < last { "," } else { "" };
        out.push_str(&format!(
            "{}{}{} \\allowbreak\n",
            author.display_name, superscript, separator
        ));
    }
    out.push_str("}\n");

    out.push_str("\\newcommand{\\affils}{\n");
    out.push_str("\\begin{affiliations}\n");
    for token in &unique {
        debug!(%token, "resolving affiliation");
        out.push_str(&format!("\\item{{{}}}\n", affiliations.resolve(token)));
    }
    out.push_str("\\end{affiliations}\n");
    out.push_str("}\n");
}

/// Deduplicated, sorted acknowledgements wrapped in an `\allacks` definition.
fn render_acknowledgements(out: &mut String, acknowledgements: &[String]) {
    let mut unique: Vec<&str> = acknowledgements.iter().map(String::as_str).collect();
    unique.sort_unstable();
    unique.dedup();

    out.push_str("% Unique acks:\n");
    out.push_str("\\newcommand{\\allacks}{\n");
    for ack in unique {
        out.push_str(&escape_ampersands(ack));
        out.push_str("\n%\n");
    }
    out.push_str("}\n");
}

/// Escape literal ampersands for LaTeX.
fn escape_ampersands(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '&' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
