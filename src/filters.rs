//src/filters.rs

use crate::types::{DomainLabel, LabeledRow};

/// Substrings flagging likely bacteriophage or endogenous-retrovirus signal:
/// phage terms plus bacterial genera whose prophages dominate false-positive
/// viral calls. Matched case-insensitively.
const PHAGE_AND_ENDOGENOUS_PATTERNS: &[&str] = &[
    "phage",
    "endogenous retrovirus",
    "endogenous",
    "escherichia",
    "salmonella",
    "staphylococcus",
    "streptococcus",
    "pseudomonas",
    "klebsiella",
    "enterococcus",
    "acinetobacter",
    "lactococcus",
    "lactobacillus",
    "bacillus",
    "clostridium",
    "mycobacterium",
    "cutibacterium",
    "propionibacterium",
    "haemophilus",
    "vibrio",
    "yersinia",
];

/// Curated blocklist of contaminant and reference-artifact viral taxa:
/// reagent and dietary viruses plus environmental giants that show up in
/// nanopore runs without clinical meaning. Matched case-insensitively by
/// containment.
const VIRUS_BLOCKLIST: &[&str] = &[
    "torque teno virus",
    "pepper mild mottle virus",
    "tobacco mosaic virus",
    "cucumber green mottle mosaic virus",
    "paramecium bursaria chlorella virus",
    "acanthocystis turfacea chlorella virus",
    "pandoravirus",
    "invertebrate iridescent virus",
    "murine leukemia virus",
    "squirrel monkey retrovirus",
];

/// Spike-in / internal-control organisms. These are highlighted in summary
/// tables and exempt from both exclusion filters: MS2 and phiX174 are phages
/// of Escherichia, so the heuristic patterns would otherwise swallow the very
/// rows the control read-out needs. Matched case-insensitively.
pub const SPIKE_IN_PATTERNS: &[&str] = &["escherichia virus ms2", "phix174"];

/// Whether a taxon name is one of the spike-in internal controls.
pub fn is_spike_in_control(name: &str) -> bool {
    matches_any(name, SPIKE_IN_PATTERNS)
}

fn matches_any(name: &str, patterns: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    patterns.iter().any(|pat| lowered.contains(pat))
}

/// Drop Virus-labeled rows whose name hits a phage/endogenous-retrovirus
/// pattern. Rows outside the Virus domain and spike-in controls always
/// survive.
pub fn hide_phage_and_endogenous(rows: Vec<LabeledRow>) -> Vec<LabeledRow> {
    rows.into_iter()
        .filter(|labeled| {
            labeled.label != Some(DomainLabel::Virus)
                || is_spike_in_control(&labeled.row.tax_name)
                || !matches_any(&labeled.row.tax_name, PHAGE_AND_ENDOGENOUS_PATTERNS)
        })
        .collect()
}

/// Drop Virus-labeled rows whose name hits the literal blocklist. Rows
/// outside the Virus domain and spike-in controls always survive.
pub fn hide_blocklisted_viruses(rows: Vec<LabeledRow>) -> Vec<LabeledRow> {
    rows.into_iter()
        .filter(|labeled| {
            labeled.label != Some(DomainLabel::Virus)
                || is_spike_in_control(&labeled.row.tax_name)
                || !matches_any(&labeled.row.tax_name, VIRUS_BLOCKLIST)
        })
        .collect()
}
