//! Record mapping and graph assembly for a batch.

use crate::flatten::{flatten_record, SkipReason};
use crate::mappers::MappingTable;
use crate::xml::RawRecord;
use fzeri_core::vocab::ontology_preamble;
use fzeri_core::{ConversionTables, Emitter, Graph, Statement};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRecord {
    pub entry_id: String,
    pub statements: Vec<Statement>,
}

impl MappedRecord {
    /// This record's statements as a standalone graph.
    pub fn to_graph(&self) -> Graph {
        self.statements.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Mapped(MappedRecord),
    Skipped {
        heading: Option<String>,
        reason: SkipReason,
    },
}

pub fn map_record(raw: &RawRecord, table: &MappingTable, tables: &ConversionTables) -> RecordOutcome {
    match flatten_record(raw) {
        Ok(record) => {
            let statements = table.map_record(&record, tables).into_statements();
            debug!(entry_id = %record.entry_id, statements = statements.len(), "record mapped");
            RecordOutcome::Mapped(MappedRecord {
                entry_id: record.entry_id,
                statements,
            })
        }
        Err(reason) => {
            warn!(
                heading = raw.heading.as_deref().unwrap_or(""),
                %reason,
                "skipping record"
            );
            RecordOutcome::Skipped {
                heading: raw.heading.clone(),
                reason,
            }
        }
    }
}

/// Map every record. With `parallel`, records are mapped on the rayon pool;
/// outcomes keep input order either way.
pub fn map_records(
    records: &[RawRecord],
    table: &MappingTable,
    tables: &ConversionTables,
    parallel: bool,
) -> Vec<RecordOutcome> {
    if parallel {
        records
            .par_iter()
            .map(|raw| map_record(raw, table, tables))
            .collect()
    } else {
        records
            .iter()
            .map(|raw| map_record(raw, table, tables))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub records_mapped: usize,
    pub records_skipped: usize,
    /// Distinct statements in the assembled graph.
    pub statements: usize,
}

/// Accumulates every mapped record into one graph. Insertion is serial; the
/// graph's set semantics absorb statements repeated across records.
#[derive(Debug, Default)]
pub struct GraphAssembler {
    graph: Graph,
    report: BatchReport,
}

impl GraphAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the ontology property declarations.
    pub fn with_preamble() -> Self {
        let mut out = Emitter::new();
        ontology_preamble(&mut out);
        let mut assembler = Self::new();
        assembler.graph.extend(out.into_statements());
        assembler
    }

    pub fn add(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Mapped(record) => {
                self.graph.extend(record.statements.iter().cloned());
                self.report.records_mapped += 1;
            }
            RecordOutcome::Skipped { .. } => self.report.records_skipped += 1,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn finish(self) -> (Graph, BatchReport) {
        let report = BatchReport {
            statements: self.graph.len(),
            ..self.report
        };
        info!(
            mapped = report.records_mapped,
            skipped = report.records_skipped,
            statements = report.statements,
            "batch assembled"
        );
        (self.graph, report)
    }
}

impl<'a> Extend<&'a RecordOutcome> for GraphAssembler {
    fn extend<T: IntoIterator<Item = &'a RecordOutcome>>(&mut self, iter: T) {
        for outcome in iter {
            self.add(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::SCHEDA_F_V1;
    use crate::xml::read_records_from_str;

    const BATCH: &str = r#"<SCHEDE>
      <SCHEDA intestazione="A">
        <PARAGRAFO etichetta="CLASSIFICATION"><SERCD>1</SERCD><UBFP>Fototeca Zeri</UBFP></PARAGRAFO>
      </SCHEDA>
      <SCHEDA intestazione="no id">
        <PARAGRAFO etichetta="NOTES"><OSS>orphan</OSS></PARAGRAFO>
      </SCHEDA>
      <SCHEDA intestazione="B">
        <PARAGRAFO etichetta="CLASSIFICATION"><SERCD>2</SERCD><UBFP>Fototeca Zeri</UBFP></PARAGRAFO>
      </SCHEDA>
    </SCHEDE>"#;

    #[test]
    fn skipped_records_do_not_abort_the_batch() {
        let records = read_records_from_str(BATCH).expect("xml");
        let outcomes = map_records(&records, &SCHEDA_F_V1, &ConversionTables::new(), false);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(
            outcomes[1],
            RecordOutcome::Skipped {
                reason: SkipReason::MissingIdentifier,
                ..
            }
        ));

        let mut assembler = GraphAssembler::new();
        assembler.extend(&outcomes);
        let (graph, report) = assembler.finish();
        assert_eq!(report.records_mapped, 2);
        assert_eq!(report.records_skipped, 1);
        assert_eq!(report.statements, graph.len());
    }

    #[test]
    fn parallel_mapping_matches_sequential() {
        let records = read_records_from_str(BATCH).expect("xml");
        let tables = ConversionTables::new();
        let sequential = map_records(&records, &SCHEDA_F_V1, &tables, false);
        let parallel = map_records(&records, &SCHEDA_F_V1, &tables, true);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn shared_collection_collapses_across_records() {
        let records = read_records_from_str(BATCH).expect("xml");
        let outcomes = map_records(&records, &SCHEDA_F_V1, &ConversionTables::new(), false);
        let mut assembler = GraphAssembler::new();
        assembler.extend(&outcomes);
        let (graph, _) = assembler.finish();

        let collection = fzeri_core::identity::content_key(
            fzeri_core::vocab::base::COLLECTION,
            "Fototeca Zeri",
        );
        let typed = graph
            .objects(&collection, fzeri_core::vocab::rdf::TYPE)
            .count();
        assert_eq!(typed, 1);
        assert_eq!(
            graph
                .objects(&collection, fzeri_core::vocab::crm::P54_HAS_CURRENT_PERMANENT_LOCATION.inverse)
                .count(),
            2
        );
    }

    #[test]
    fn preamble_is_optional() {
        let (with, _) = GraphAssembler::with_preamble().finish();
        let (without, _) = GraphAssembler::new().finish();
        assert_eq!(with.len(), 16);
        assert!(without.is_empty());
    }
}
