use anyhow::{Context, Result};
use colored::Colorize;
use fzeri_core::Graph;
use fzeri_ingest_schedaf::{convert_records, read_batch, ConvertSettings, MappedRecord};
use fzeri_rdf::{write_combined, write_per_record, RdfFormat};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub format: RdfFormat,
    pub per_record: bool,
    pub include_preamble: bool,
    pub parallel: bool,
}

/// Records sharing a catalogue number end up in one file; the later record's
/// statements are added to the earlier one's.
fn group_by_entry(records: Vec<MappedRecord>) -> BTreeMap<String, Graph> {
    let mut grouped: BTreeMap<String, Graph> = BTreeMap::new();
    for record in records {
        let graph = grouped.entry(record.entry_id.clone()).or_default();
        if !graph.is_empty() {
            warn!(entry_id = %record.entry_id, "duplicate catalogue number; merging records");
        }
        graph.extend(record.statements);
    }
    grouped
}

pub fn cmd_convert(
    inputs: &[PathBuf],
    out: Option<&Path>,
    report_path: Option<&Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let records = read_batch(inputs)?;
    let settings = ConvertSettings {
        include_preamble: options.include_preamble && !options.per_record,
        parallel: options.parallel,
    };
    let conversion = convert_records(&records, settings);

    match (options.per_record, out) {
        (true, Some(dir)) => {
            let written = write_per_record(dir, options.format, group_by_entry(conversion.records))?;
            eprintln!(
                "{} {} files under {}",
                "wrote".green().bold(),
                written.len(),
                dir.display().to_string().bold()
            );
        }
        (true, None) => anyhow::bail!("--per-record requires --out <dir>"),
        (false, out) => {
            write_combined(&conversion.graph, options.format, out)?;
            if let Some(path) = out {
                eprintln!("{} {}", "wrote".green().bold(), path.display().to_string().bold());
            }
        }
    }

    let report = conversion.report;
    if report.records_skipped > 0 {
        eprintln!(
            "{} {} record(s) skipped (missing catalogue number)",
            "warn".yellow().bold(),
            report.records_skipped
        );
    }
    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report).context("failed to encode batch report")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
