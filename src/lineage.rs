//src/lineage.rs

use crate::types::{ClassificationRow, DomainLabel, LabeledRow};

/// How a matcher compares against the row name. Raw (trimmed) text,
/// case-sensitive.
enum Matcher {
    Contains(&'static str),
    Equals(&'static str),
}

/// Ordered matcher table, first match wins.
const DOMAIN_MATCHERS: &[(Matcher, DomainLabel)] = &[
    (Matcher::Contains("Viruses"), DomainLabel::Virus),
    (Matcher::Contains("Bacteria"), DomainLabel::Bacteria),
    (Matcher::Equals("unclassified"), DomainLabel::Unclassified),
    (Matcher::Equals("root"), DomainLabel::Root),
    (Matcher::Contains("cellular organisms"), DomainLabel::Human),
    (Matcher::Contains("Fungi"), DomainLabel::Fungi),
];

/// Candidate domain for a single taxon name, before any propagation.
pub fn classify_name(name: &str) -> Option<DomainLabel> {
    for (matcher, label) in DOMAIN_MATCHERS {
        let hit = match matcher {
            Matcher::Contains(pat) => name.contains(pat),
            Matcher::Equals(pat) => name == *pat,
        };
        if hit {
            return Some(*label);
        }
    }
    None
}

/// Assign a domain label to every row of one sample's report.
///
/// Rows must be in the report's original depth-first order. Each row first
/// gets its own candidate label from `classify_name`; an unlabeled row then
/// inherits the *immediately preceding* row's resolved label from the same
/// pass. The fill never reaches further back than one row, so a resolved
/// label flows down an unlabeled run, but an unlabeled row below another
/// unlabeled row stays unlabeled even when a label exists higher up.
pub fn classify_lineage(rows: &[ClassificationRow]) -> Vec<LabeledRow> {
    let mut labeled = Vec::with_capacity(rows.len());
    let mut prev: Option<DomainLabel> = None;

    for row in rows {
        let label = classify_name(&row.tax_name).or(prev);
        prev = label;
        labeled.push(LabeledRow {
            row: row.clone(),
            label,
        });
    }

    labeled
}
