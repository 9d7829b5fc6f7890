//src/aggregate.rs

use ahash::AHashMap;

use crate::types::{LabeledRow, RankSelection, AGGREGATE_SAMPLE};

/// Collapse duplicate taxa under the aggregate sample at the selected rank.
///
/// The aggregate sample is formed by concatenating every real sample's rows,
/// so the same taxon can appear once per underlying sample at the target
/// rank. Rows with `sample_id == "all"` and the selected rank code are
/// grouped by (taxID, taxName); each group keeps its first occurrence with
/// `reads` replaced by the group sum. Merged rows come first in the output,
/// every other row follows, original relative order preserved within each
/// partition.
pub fn merge_duplicate_taxa(rows: Vec<LabeledRow>, rank: RankSelection) -> Vec<LabeledRow> {
    let mut merged: Vec<LabeledRow> = Vec::new();
    let mut rest: Vec<LabeledRow> = Vec::new();
    // (taxID, taxName) -> index into `merged`
    let mut seen: AHashMap<(u32, String), usize> = AHashMap::new();

    for labeled in rows {
        let is_target =
            labeled.row.sample_id == AGGREGATE_SAMPLE && labeled.row.rank_code == rank.code();
        if !is_target {
            rest.push(labeled);
            continue;
        }

        let key = (labeled.row.tax_id, labeled.row.tax_name.clone());
        match seen.get(&key) {
            Some(&idx) => merged[idx].row.reads += labeled.row.reads,
            None => {
                seen.insert(key, merged.len());
                merged.push(labeled);
            }
        }
    }

    merged.extend(rest);
    merged
}
