//! schedaF catalogue ingestion.
//!
//! Pipeline per record: XML reader ([`xml`]) → flattener ([`flatten`]) →
//! mapping table ([`mappers`]) → graph assembler ([`assembler`]).
//!
//! Malformed XML or an unreadable file aborts the batch. A record without a
//! natural id is skipped and reported; everything else degrades silently.

pub mod assembler;
pub mod error;
pub mod flatten;
pub mod mappers;
pub mod survey;
pub mod xml;

pub use assembler::{map_record, map_records, BatchReport, GraphAssembler, MappedRecord, RecordOutcome};
pub use error::SchedaError;
pub use flatten::{flatten_record, SkipReason};
pub use mappers::{GroupMapper, MappingTable, RecordContext, StepCounter, SCHEDA_F_V1};
pub use survey::SchemaSurvey;
pub use xml::{RawRecord, read_records, read_records_from_path, read_records_from_str};

use anyhow::{Context, Result};
use fzeri_core::ConversionTables;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Expand inputs: files are kept as given, directories contribute every
/// `*.xml` file below them (sorted).
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.with_context(|| format!("walking {}", path.display()))?;
                if entry.file_type().is_file() && is_xml(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_xml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"))
}

/// Read every record from every input, in input order.
pub fn read_batch(paths: &[PathBuf]) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for path in collect_inputs(paths)? {
        info!(path = %path.display(), "sourcing file");
        let mut from_file = read_records_from_path(&path)
            .with_context(|| format!("failed to read schedaF records from {}", path.display()))?;
        records.append(&mut from_file);
    }
    Ok(records)
}

#[derive(Debug, Clone, Copy)]
pub struct ConvertSettings {
    pub include_preamble: bool,
    pub parallel: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            include_preamble: true,
            parallel: false,
        }
    }
}

/// A converted batch: the combined graph plus every record's own statements.
#[derive(Debug)]
pub struct Conversion {
    pub graph: fzeri_core::Graph,
    pub records: Vec<MappedRecord>,
    pub report: BatchReport,
}

pub fn convert_records(records: &[RawRecord], settings: ConvertSettings) -> Conversion {
    let tables = ConversionTables::new();
    let outcomes = map_records(records, &SCHEDA_F_V1, &tables, settings.parallel);

    let mut assembler = if settings.include_preamble {
        GraphAssembler::with_preamble()
    } else {
        GraphAssembler::new()
    };
    assembler.extend(&outcomes);
    let (graph, report) = assembler.finish();

    let records = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            RecordOutcome::Mapped(record) => Some(record),
            RecordOutcome::Skipped { .. } => None,
        })
        .collect();

    Conversion {
        graph,
        records,
        report,
    }
}

pub fn convert_str(xml: &str, settings: ConvertSettings) -> Result<Conversion> {
    let records = read_records_from_str(xml).context("failed to parse schedaF XML")?;
    Ok(convert_records(&records, settings))
}
