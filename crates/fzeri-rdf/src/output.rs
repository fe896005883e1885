//! Output modes: one combined document, or one document per record.

use crate::{write_graph, RdfFormat};
use anyhow::{Context, Result};
use fzeri_core::identity::encode_segment;
use fzeri_core::Graph;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the whole graph to `out`, or to stdout when `out` is `None`.
pub fn write_combined(graph: &Graph, format: RdfFormat, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_graph(graph, format, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), %format, statements = graph.len(), "wrote graph");
        }
        None => {
            let stdout = io::stdout();
            write_graph(graph, format, stdout.lock()).context("failed to write graph to stdout")?;
        }
    }
    Ok(())
}

/// `<dir>/<entry_id>.<ext>`, with the id encoded so it is always a single
/// file name.
pub fn per_record_path(dir: &Path, entry_id: &str, format: RdfFormat) -> PathBuf {
    dir.join(format!("{}.{}", encode_segment(entry_id), format.extension()))
}

/// Write each `(entry_id, graph)` pair to its own file under `dir`, creating
/// the directory if needed. Returns the written paths in input order.
pub fn write_per_record<I>(dir: &Path, format: RdfFormat, records: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = (String, Graph)>,
{
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    for (entry_id, graph) in records {
        let path = per_record_path(dir, &entry_id, format);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_graph(&graph, format, BufWriter::new(file))
            .with_context(|| format!("failed to write record {entry_id} to {}", path.display()))?;
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), %format, "wrote per-record graphs");
    Ok(written)
}
