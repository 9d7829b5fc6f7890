// src/lib.rs
pub mod aggregate;
pub mod error;
pub mod filters;
pub mod lineage;
pub mod metrics;
pub mod report;
pub mod types;

use rayon::prelude::*;

use crate::error::SummaryError;
use crate::types::{Category, ClassificationRow, RankSelection, TaxonSummaryRow, AGGREGATE_SAMPLE};

pub use crate::report::read_report_rows;

/// Knobs for one summary table, minus the sample it applies to.
#[derive(Debug, Clone)]
pub struct SummaryParams {
    pub category: Category,
    pub rank: RankSelection,
    pub hide_phage_and_endogenous_retrovirus: bool,
    pub hide_blocklisted_viruses: bool,
}

/// A finished summary for one (sample, category, rank, toggles) tuple.
/// Structured rows only; text is generated on demand.
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub sample_id: String,
    pub category: Category,
    pub rank: RankSelection,
    pub rows: Vec<TaxonSummaryRow>,

    /// Classified + unclassified reads for this sample (RPM denominator).
    pub sample_total_reads: u64,
    /// Classified + unclassified reads across every sample in the loaded
    /// report, aggregate duplication already accounted for.
    pub grand_total_reads: u64,
}

impl SampleSummary {
    /// Generate the summary table as tab-separated text on demand.
    /// Highlighted (spike-in control) rows carry a `*` in the last column;
    /// an undefined RPM renders as `NA`.
    pub fn to_table_text(&self) -> String {
        let mut output = format!(
            "{}\tNCBI taxonomy ID\tReads\tRPM\tControl\n",
            self.rank.column_title()
        );
        for row in &self.rows {
            let rpm = row
                .rpm
                .map(|v| v.to_string())
                .unwrap_or_else(|| "NA".to_string());
            let mark = if row.highlight { "*" } else { "" };
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                row.tax_name, row.tax_id, row.reads, rpm, mark
            ));
        }
        output
    }
}

/// Distinct real sample ids in first-appearance order; the aggregate
/// pseudo-sample is not listed.
pub fn sample_ids(rows: &[ClassificationRow]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for row in rows {
        if row.sample_id != AGGREGATE_SAMPLE && !ids.iter().any(|id| *id == row.sample_id) {
            ids.push(row.sample_id.clone());
        }
    }
    ids
}

/// Run the full pipeline for one sample over an immutable row snapshot:
/// lineage classification, duplicate-taxon merging (aggregate sample only),
/// the toggled exclusion filters, then metrics derivation.
///
/// The snapshot is never mutated, so concurrent calls with different
/// parameters over the same rows are safe.
pub fn summarize_sample(
    rows: &[ClassificationRow],
    sample_id: &str,
    params: &SummaryParams,
) -> Result<SampleSummary, SummaryError> {
    if rows.is_empty() {
        return Err(SummaryError::EmptyReport);
    }

    let sample_rows: Vec<ClassificationRow> = rows
        .iter()
        .filter(|row| row.sample_id == sample_id)
        .cloned()
        .collect();
    if sample_rows.is_empty() {
        return Err(SummaryError::UnknownSample(sample_id.to_string()));
    }

    // RPM denominator comes from the full unfiltered sample, so the
    // exclusion toggles never move it.
    let sample_total = metrics::sample_total_reads(&sample_rows);

    let mut labeled = lineage::classify_lineage(&sample_rows);
    labeled = aggregate::merge_duplicate_taxa(labeled, params.rank);
    if params.hide_phage_and_endogenous_retrovirus {
        labeled = filters::hide_phage_and_endogenous(labeled);
    }
    if params.hide_blocklisted_viruses {
        labeled = filters::hide_blocklisted_viruses(labeled);
    }

    let table = metrics::derive_table(&labeled, params.category, params.rank, sample_total);
    log::info!(
        "sample {}: {} {} rows at rank {}, {} total reads",
        sample_id,
        table.len(),
        params.category.domain(),
        params.rank.code(),
        sample_total
    );

    Ok(SampleSummary {
        sample_id: sample_id.to_string(),
        category: params.category,
        rank: params.rank,
        rows: table,
        sample_total_reads: sample_total,
        grand_total_reads: metrics::grand_total_reads(rows),
    })
}

/// Summarize every real sample in the snapshot with the same parameters, one
/// pipeline invocation per sample, in parallel.
pub fn summarize_all_samples(
    rows: &[ClassificationRow],
    params: &SummaryParams,
) -> Result<Vec<SampleSummary>, SummaryError> {
    let ids = sample_ids(rows);
    if ids.is_empty() {
        return Err(SummaryError::EmptyReport);
    }
    ids.par_iter()
        .map(|id| summarize_sample(rows, id, params))
        .collect()
}
