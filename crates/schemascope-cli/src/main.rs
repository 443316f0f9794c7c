mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use schemars::schema_for;
use schemascope_core::redact_connection_string;
use schemascope_report::{write_all_reports, ReportOptions};
use schemascope_snapshot::{
    build_database, load_database, load_snapshot, SnapshotFile, SnapshotOptions,
};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("snapshot error: {0}")]
    Snapshot(#[from] schemascope_snapshot::SnapshotError),
    #[error("report error: {0}")]
    Report(#[from] schemascope_report::ReportError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("dependency order did not converge; foreign keys form a cycle")]
    CyclicDependencies,
}

#[derive(Parser, Debug)]
#[command(name = "schemascope", version, about = "Schema dependency reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the full report set from a snapshot file.
    Report(ReportArgs),
    /// Print tables in dependency order.
    Deps(DepsArgs),
    /// Print the snapshot JSON Schema contract.
    Schema,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to a snapshot JSON file.
    snapshot: PathBuf,
    /// Output directory for report files.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Overwrite existing report files.
    #[arg(long, default_value_t = false)]
    overwrite: bool,
    /// Config file supplying defaults.
    #[arg(long)]
    config_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DepsArgs {
    /// Path to a snapshot JSON file.
    snapshot: PathBuf,
    /// Fail when the dependency order does not converge.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CliError::InvalidConfig(_)) => {
            error!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Report(args) => run_report(args),
        Command::Deps(args) => run_deps(args),
        Command::Schema => run_schema(),
    }
}

fn run_report(args: ReportArgs) -> Result<(), CliError> {
    let config_path = args
        .config_file
        .unwrap_or_else(config::default_config_path);
    let config = config::load_or_create(&config_path)?;

    let snapshot = load_snapshot(&args.snapshot)?;
    let db = build_database(&snapshot, &SnapshotOptions::default())?;

    if let Some(conn) = db.connection_string() {
        info!(connection = %redact_connection_string(conn), "loaded snapshot");
    }

    let opts = ReportOptions {
        output_dir: args.output_dir.unwrap_or(config.report.output_dir),
        overwrite: args.overwrite || config.report.overwrite,
    };
    let written = write_all_reports(&db, &opts)?;
    info!(count = written.len(), "reports complete");
    Ok(())
}

fn run_deps(args: DepsArgs) -> Result<(), CliError> {
    let db = load_database(&args.snapshot)?;

    let order = db.dependency_order();
    for table in &order.tables {
        println!("{}", table.full_name());
    }

    if !order.converged {
        if args.strict {
            return Err(CliError::CyclicDependencies);
        }
        warn!(
            passes = order.passes,
            "dependency order did not converge; output is best-effort"
        );
    }
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = schema_for!(SnapshotFile);
    let json = serde_json::to_string_pretty(&schema)
        .map_err(|err| CliError::InvalidConfig(err.to_string()))?;
    println!("{json}");
    Ok(())
}
