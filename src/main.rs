use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tagreport_tools::tagreport::tools::export::{self, AppState};
use tagreport_tools::tagreport::tools::host::{DirectorySink, JsonFileFeed, LogSignal};
use tagreport_tools::{ExportError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Export(args) => execute_export(args),
    }
}

fn execute_export(args: ExportArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ExportError::MissingInput(args.input));
    }

    let feed = JsonFileFeed::new(&args.input, args.base_url.unwrap_or_default());
    let mut state = AppState::new();
    futures::executor::block_on(export::refresh(&mut state, &feed))?;

    let signal = LogSignal;
    let sink = DirectorySink::new(&args.output);
    export::export_to_xlsx(&signal, &sink, &state.columns, &state.rows)
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ExportError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export tagged record inventories to Excel workbooks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export the record inventory to an xlsx workbook.
    Export(ExportArgs),
}

#[derive(clap::Args)]
struct ExportArgs {
    /// JSON document holding the record batch.
    #[arg(long)]
    input: PathBuf,

    /// Directory the exported workbook is saved into.
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Base URL to report for the feed handshake.
    #[arg(long)]
    base_url: Option<String>,
}
