//src/metrics.rs

use std::cmp::Reverse;

use crate::filters::is_spike_in_control;
use crate::types::{
    Category, ClassificationRow, LabeledRow, RankSelection, TaxonSummaryRow, AGGREGATE_SAMPLE,
};

/// Total classified + unclassified reads for one sample: the sum of `reads`
/// over the sample's rows named "root" or "unclassified". Computed from the
/// full unfiltered row set, so exclusion toggles never change RPM.
pub fn sample_total_reads(rows: &[ClassificationRow]) -> u64 {
    rows.iter()
        .filter(|row| row.tax_name == "root" || row.tax_name == "unclassified")
        .map(|row| row.reads)
        .sum()
}

/// Total analyzed reads across the whole loaded report. The aggregate sample
/// duplicates every real sample's rows, so when it is present the raw sum
/// counts everything twice and is halved.
pub fn grand_total_reads(rows: &[ClassificationRow]) -> u64 {
    let sum: u64 = rows
        .iter()
        .filter(|row| row.tax_name == "root" || row.tax_name == "unclassified")
        .map(|row| row.reads)
        .sum();
    if rows.iter().any(|row| row.sample_id == AGGREGATE_SAMPLE) {
        sum / 2
    } else {
        sum
    }
}

/// Build the final summary table from the post-filter rows of one sample.
///
/// Selects rows carrying the requested domain at the requested rank, computes
/// RPM against `total_reads`, sorts descending by reads (stable, so ties keep
/// their prior relative order) and flags spike-in controls. A zero total
/// leaves RPM undefined on every row rather than dividing.
pub fn derive_table(
    rows: &[LabeledRow],
    category: Category,
    rank: RankSelection,
    total_reads: u64,
) -> Vec<TaxonSummaryRow> {
    if total_reads == 0 {
        log::warn!("sample has zero classified+unclassified reads, RPM is undefined");
    }

    let mut table: Vec<TaxonSummaryRow> = rows
        .iter()
        .filter(|labeled| {
            labeled.label == Some(category.domain()) && labeled.row.rank_code == rank.code()
        })
        .map(|labeled| TaxonSummaryRow {
            tax_name: labeled.row.tax_name.clone(),
            tax_id: labeled.row.tax_id,
            reads: labeled.row.reads,
            rpm: rpm(labeled.row.reads, total_reads),
            highlight: is_spike_in_control(&labeled.row.tax_name),
        })
        .collect();

    table.sort_by_key(|row| Reverse(row.reads));
    table
}

fn rpm(reads: u64, total_reads: u64) -> Option<u64> {
    if total_reads == 0 {
        return None;
    }
    Some((reads as f64 * 1_000_000.0 / total_reads as f64).round() as u64)
}
