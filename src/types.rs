//src/types.rs

use std::fmt;
use std::str::FromStr;

use crate::error::SummaryError;

/// Sample id of the synthetic pseudo-sample carrying a copy of every real
/// sample's rows.
pub const AGGREGATE_SAMPLE: &str = "all";

/// A structured representation of one row of the barcode-tagged report.
/// For example:
///  barcode01  12.50  1250  1180  S  11320  Influenza A virus
/// Columns: sample, %, reads, cladeReads, rank, taxID, taxName.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRow {
    pub sample_id: String,
    pub percent: f32,
    /// Read count summed and reported downstream.
    pub reads: u64,
    /// Second count column of the source format; never consumed, kept so a
    /// row can be written back out unchanged.
    pub clade_reads: u64,
    pub rank_code: String,
    pub tax_id: u32,
    pub tax_name: String,
}

/// Coarse domain assigned to a row by the lineage classifier; not present in
/// the raw report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainLabel {
    Virus,
    Bacteria,
    Unclassified,
    Root,
    Human,
    Fungi,
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DomainLabel::Virus => "Virus",
            DomainLabel::Bacteria => "Bacteria",
            DomainLabel::Unclassified => "unclassified",
            DomainLabel::Root => "root",
            DomainLabel::Human => "Human",
            DomainLabel::Fungi => "Fungi",
        };
        f.write_str(s)
    }
}

/// Domain selectable for a summary table. Narrower than `DomainLabel`:
/// `root` is a bookkeeping label, not a reportable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Virus,
    Bacteria,
    Fungi,
    Human,
    Unclassified,
}

impl Category {
    /// The domain label rows must carry to land in this category's table.
    pub fn domain(&self) -> DomainLabel {
        match self {
            Category::Virus => DomainLabel::Virus,
            Category::Bacteria => DomainLabel::Bacteria,
            Category::Fungi => DomainLabel::Fungi,
            Category::Human => DomainLabel::Human,
            Category::Unclassified => DomainLabel::Unclassified,
        }
    }
}

impl FromStr for Category {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Virus" => Ok(Category::Virus),
            "Bacteria" => Ok(Category::Bacteria),
            "Fungi" => Ok(Category::Fungi),
            "Human" => Ok(Category::Human),
            "unclassified" => Ok(Category::Unclassified),
            other => Err(SummaryError::UnknownCategory(other.to_string())),
        }
    }
}

/// Taxonomic resolution of a summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankSelection {
    Species,
    Genus,
}

impl RankSelection {
    /// Single-letter rank code this selection matches, exactly. Sub-rank
    /// codes such as "S1" are never selected.
    pub fn code(&self) -> &'static str {
        match self {
            RankSelection::Species => "S",
            RankSelection::Genus => "G",
        }
    }

    /// Header of the name column in the rendered table.
    pub fn column_title(&self) -> &'static str {
        match self {
            RankSelection::Species => "Species",
            RankSelection::Genus => "Genus",
        }
    }
}

impl FromStr for RankSelection {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Species" | "S" => Ok(RankSelection::Species),
            "Genus" | "G" => Ok(RankSelection::Genus),
            other => Err(SummaryError::UnknownRank(other.to_string())),
        }
    }
}

/// A report row plus its resolved domain label. `label` stays `None` for rows
/// the classifier could not resolve; those never reach a summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow {
    pub row: ClassificationRow,
    pub label: Option<DomainLabel>,
}

/// One row of a finished summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonSummaryRow {
    pub tax_name: String,
    pub tax_id: u32,
    pub reads: u64,
    /// Reads per million; `None` when the sample has zero classified and
    /// unclassified reads, so the ratio is undefined.
    pub rpm: Option<u64>,
    /// Presentation flag for spike-in / internal-control taxa. Never removes
    /// a row.
    pub highlight: bool,
}
