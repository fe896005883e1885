use anyhow::{Context, Result};
use colored::Colorize;
use fzeri_ingest_schedaf::{read_batch, SchemaSurvey};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn cmd_schema(inputs: &[PathBuf], out: Option<&Path>) -> Result<()> {
    let records = read_batch(inputs)?;
    let mut survey = SchemaSurvey::new();
    survey.extend(&records);
    let rendered = survey.render();

    match out {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "{} {} ({} records)",
                "wrote".green().bold(),
                path.display().to_string().bold(),
                survey.records()
            );
        }
        None => {
            io::stdout()
                .lock()
                .write_all(rendered.as_bytes())
                .context("failed to write survey to stdout")?;
        }
    }
    Ok(())
}
