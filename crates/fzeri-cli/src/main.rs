//! fzeri CLI
//!
//! - `convert`: schedaF XML files/directories → CIDOC-CRM RDF (combined or per record)
//! - `schema`: survey which field codes each paragraph carries in practice

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use fzeri_rdf::RdfFormat;
use std::path::PathBuf;
use tracing::Level;

mod convert;
mod schema;

#[derive(Parser)]
#[command(name = "fzeri")]
#[command(author, version, about = "Convert Fondazione Zeri schedaF catalogue records to CIDOC-CRM RDF")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map schedaF records to RDF.
    Convert(ConvertArgs),

    /// Print every field code seen per paragraph label, with a sample value.
    Schema {
        /// schedaF XML files or directories (searched for `*.xml`).
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Write the survey here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// schedaF XML files or directories (searched for `*.xml`).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (combined mode) or directory (`--per-record`). Combined
    /// output goes to stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// nt|ttl|rdf (aliases: ntriples, turtle, xml, rdfxml). Defaults to the
    /// `--out` extension, then Turtle.
    #[arg(short, long)]
    format: Option<RdfFormat>,

    /// Write one file per record, named by its catalogue number.
    #[arg(long, requires = "out")]
    per_record: bool,

    /// Map records on all cores. Output is identical to a sequential run.
    #[arg(long)]
    parallel: bool,

    /// Omit the ontology property declarations from combined output.
    #[arg(long)]
    no_preamble: bool,

    /// Also write the batch summary as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

impl ConvertArgs {
    fn options(&self) -> convert::ConvertOptions {
        let format = self
            .format
            .or_else(|| {
                self.out
                    .as_deref()
                    .filter(|_| !self.per_record)
                    .and_then(RdfFormat::from_extension)
            })
            .unwrap_or_default();
        convert::ConvertOptions {
            format,
            per_record: self.per_record,
            include_preamble: !self.no_preamble,
            parallel: self.parallel,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => {
            let options = args.options();
            convert::cmd_convert(&args.inputs, args.out.as_deref(), args.report.as_deref(), &options)?;
        }
        Commands::Schema { inputs, out } => {
            schema::cmd_schema(&inputs, out.as_deref())?;
        }
    }
    Ok(())
}
