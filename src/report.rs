//src/report.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::SummaryError;
use crate::types::ClassificationRow;

/// Read a combined, barcode-tagged report file into rows, supporting .gz.
///
/// Each line carries seven tab-separated columns:
/// ```text
/// <sample>\t<percent>\t<reads>\t<cladeReads>\t<rank>\t<taxID>\t<taxName>
/// ```
/// Row order is preserved exactly: downstream lineage propagation depends on
/// the report's depth-first order. Any malformed row fails the whole load.
pub fn read_report_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ClassificationRow>, SummaryError> {
    let f = File::open(&path)?;

    let is_gz = path
        .as_ref()
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    let mut rows = Vec::new();
    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(&line, idx + 1)?);
    }

    if rows.is_empty() {
        log::warn!("report {:?} contained no rows", path.as_ref());
        return Err(SummaryError::EmptyReport);
    }

    log::info!("loaded {} report rows from {:?}", rows.len(), path.as_ref());
    Ok(rows)
}

/// Parse one tab-separated report line. `line_number` is 1-based and only
/// used in error messages.
pub fn parse_row(line: &str, line_number: usize) -> Result<ClassificationRow, SummaryError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 7 {
        return Err(SummaryError::MalformedRow {
            line: line_number,
            reason: format!("expected 7 tab-separated fields, found {}", fields.len()),
        });
    }

    let percent: f32 = parse_field(fields[1], "percent", line_number)?;
    let reads: u64 = parse_field(fields[2], "reads", line_number)?;
    let clade_reads: u64 = parse_field(fields[3], "cladeReads", line_number)?;
    let tax_id: u32 = parse_field(fields[5], "taxID", line_number)?;

    Ok(ClassificationRow {
        sample_id: fields[0].trim().to_string(),
        percent,
        reads,
        clade_reads,
        rank_code: fields[4].trim().to_string(),
        tax_id,
        // The report encodes tree depth as leading whitespace in the name;
        // only row order matters here, so the name is trimmed before any
        // matching happens.
        tax_name: fields[6].trim().to_string(),
    })
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    field: &str,
    line_number: usize,
) -> Result<T, SummaryError> {
    raw.trim().parse().map_err(|_| SummaryError::MalformedRow {
        line: line_number,
        reason: format!("non-numeric {field} field '{}'", raw.trim()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    const GOOD_LINES: &str = "barcode01\t83.33\t1000\t1000\tR\t1\troot\n\
                              barcode01\t16.67\t200\t200\tU\t0\tunclassified\n";

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("nanomet_{}_{}", std::process::id(), name))
    }

    #[test]
    fn loads_a_plain_report_file() {
        let path = temp_path("plain.tsv");
        fs::write(&path, GOOD_LINES).expect("write report");

        let rows = read_report_rows(&path).expect("load should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tax_name, "root");
        assert_eq!(rows[1].reads, 200);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn any_malformed_row_fails_the_whole_load() {
        let path = temp_path("malformed.tsv");
        let content = format!("{GOOD_LINES}barcode01\t0.01\tnot-a-number\t5\tS\t11320\tInfluenza A virus\n");
        fs::write(&path, content).expect("write report");

        let err = read_report_rows(&path).unwrap_err();
        match err {
            SummaryError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn loads_a_gzipped_report_file() {
        let path = temp_path("report.tsv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(GOOD_LINES.as_bytes()).expect("gzip report");
        let compressed = encoder.finish().expect("finish gzip");
        fs::write(&path, compressed).expect("write report");

        let rows = read_report_rows(&path).expect("load should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].tax_name, "unclassified");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn parses_a_well_formed_row() {
        let row = parse_row("barcode01\t12.50\t1250\t1180\tS\t11320\t  Influenza A virus", 1)
            .expect("row should parse");
        assert_eq!(row.sample_id, "barcode01");
        assert_eq!(row.reads, 1250);
        assert_eq!(row.clade_reads, 1180);
        assert_eq!(row.rank_code, "S");
        assert_eq!(row.tax_id, 11320);
        assert_eq!(row.tax_name, "Influenza A virus");
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_row("barcode01\t12.50\t1250", 3).unwrap_err();
        match err {
            SummaryError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_count() {
        let err = parse_row("barcode01\t12.50\tmany\t1180\tS\t11320\tInfluenza A virus", 8)
            .unwrap_err();
        match err {
            SummaryError::MalformedRow { line, reason } => {
                assert_eq!(line, 8);
                assert!(reason.contains("reads"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
