use std::path::PathBuf;

/// Batch-fatal ingestion errors.
///
/// Record-level problems (a missing `SERCD`, an unparsable repetition index)
/// are not errors: they are reported through `RecordOutcome` and logs.
#[derive(Debug, thiserror::Error)]
pub enum SchedaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
    #[error("malformed XML: document ends inside <{0}>")]
    Truncated(String),
}
