use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

use nanomet_rs::types::{Category, RankSelection};
use nanomet_rs::{read_report_rows, sample_ids, summarize_sample, SummaryParams};

fn usage() -> ! {
    eprintln!(
        "Usage: nanomet-rs <report.tsv[.gz]> <sample> <category> <taxonomy-level> \
         [--hide-phage-and-endogenous] [--hide-blocklisted]\n\
         \n\
         category        Virus | Bacteria | Fungi | Human | unclassified\n\
         taxonomy-level  Species | Genus\n\
         sample          a barcode from the report, or 'all'"
    );
    std::process::exit(2);
}

fn spinner(color: &str, msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template(&format!("{{spinner:.{color}}} {{msg}}"))
            .expect("Invalid spinner template"),
    );
    bar.set_message(msg.to_string());
    bar
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut hide_phage = false;
    let mut hide_blocklisted = false;
    for arg in &args {
        match arg.as_str() {
            "--hide-phage-and-endogenous" => hide_phage = true,
            "--hide-blocklisted" => hide_blocklisted = true,
            "-h" | "--help" => usage(),
            other if other.starts_with('-') => usage(),
            other => positional.push(other.to_string()),
        }
    }
    if positional.len() != 4 {
        usage();
    }

    let category: Category = positional[2].parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });
    let rank: RankSelection = positional[3].parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });

    // 1. Load the combined report
    let bar = spinner("blue", &format!("Loading report '{}'...", positional[0]));
    let rows = read_report_rows(&positional[0]).expect("Could not load report");
    bar.finish_with_message(format!(
        "Loaded {} rows covering {} barcode(s).",
        rows.len(),
        sample_ids(&rows).len()
    ));

    // 2. Run the pipeline for the requested tuple
    let bar = spinner("green", "Deriving summary table...");
    let params = SummaryParams {
        category,
        rank,
        hide_phage_and_endogenous_retrovirus: hide_phage,
        hide_blocklisted_viruses: hide_blocklisted,
    };
    let summary = summarize_sample(&rows, &positional[1], &params).expect("Summary failed");
    bar.finish_with_message(format!(
        "{} taxa, {} sample reads, {} reads across the run.",
        summary.rows.len(),
        summary.sample_total_reads,
        summary.grand_total_reads
    ));

    // 3. Write the table
    let out_path = format!(
        "{}_{}_{}.tsv",
        summary.sample_id,
        positional[2],
        rank.column_title()
    );
    let bar = spinner("yellow", "Writing summary table...");
    fs::write(&out_path, summary.to_table_text()).expect("Could not write summary table");
    bar.finish_with_message(format!("Summary written to {out_path}."));
}
