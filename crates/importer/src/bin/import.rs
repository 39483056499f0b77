use chrono::Local;
use clap::{Parser, Subcommand};
use importer::{
    AthleteStore, ImportContext, ImporterError, SPREADSHEET, commit_import, spreadsheet,
    validate_batch,
};
use sqlx::postgres::PgPoolOptions;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use storage::dto::import::ImportReport;
use storage::models::{Athlete, NewAthlete};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "athlete-import")]
#[command(about = "Athlete registry spreadsheet importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a spreadsheet and print the report without storing anything
    Validate {
        file: PathBuf,

        /// Skip the duplicate CPF lookup
        #[arg(long)]
        offline: bool,

        /// Write the JSON report to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a spreadsheet and store every valid, new row
    Import { file: PathBuf },
}

/// Store used by `validate --offline`: nothing is registered and nothing can
/// be written.
struct OfflineStore;

#[async_trait::async_trait]
impl AthleteStore for OfflineStore {
    async fn find_by_cpf(&self, _cpf: &str) -> importer::Result<Option<Athlete>> {
        Ok(None)
    }

    async fn insert(&self, _athlete: &NewAthlete) -> importer::Result<Athlete> {
        Err(ImporterError::ImportError(
            "offline mode cannot store athletes".into(),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("athlete_import={},importer={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Validate {
            file,
            offline,
            output,
        } => {
            if offline {
                handle_validate(&file, &OfflineStore, output).await?;
            } else {
                let ctx = connect(cli.database_url.as_deref()).await?;
                handle_validate(&file, &ctx, output).await?;
            }
        }
        Commands::Import { file } => {
            let ctx = connect(cli.database_url.as_deref()).await?;
            handle_import(&file, &ctx).await?;
        }
    }

    Ok(())
}

async fn connect(database_url: Option<&str>) -> Result<ImportContext, Box<dyn std::error::Error>> {
    let database_url =
        database_url.ok_or("DATABASE_URL is required unless --offline is given")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(ImportContext::new(pool))
}

async fn load_report<S: AthleteStore>(
    file: &Path,
    store: &S,
) -> Result<ImportReport, Box<dyn std::error::Error>> {
    tracing::info!("Loading spreadsheet from: {}", file.display());

    let bytes = tokio::fs::read(file).await?;
    let rows = spreadsheet::read_rows(&bytes)?;
    tracing::info!("Read {} data rows", rows.len());

    let report = validate_batch(&rows, &SPREADSHEET, store, Local::now().date_naive()).await;

    for row in report.rows.iter().filter(|r| !r.is_valid) {
        tracing::warn!("  Line {}: {}", row.line, row.errors.join("; "));
    }
    for row in report.rows.iter().filter(|r| r.is_valid && r.is_duplicate) {
        tracing::info!("  Line {}: CPF {} already registered", row.line, row.cpf);
    }

    Ok(report)
}

async fn handle_validate<S: AthleteStore>(
    file: &Path,
    store: &S,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(file, store).await?;

    tracing::info!(
        "Summary: {} rows, {} valid, {} invalid, {} duplicates, {} new",
        report.total,
        report.valid,
        report.invalid,
        report.duplicates,
        report.new
    );

    let json = serde_json::to_value(&report)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, serde_json::to_string_pretty(&json)?).await?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => write_report(&json, &mut std::io::stdout().lock())?,
    }

    Ok(())
}

async fn handle_import(file: &Path, ctx: &ImportContext) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(file, ctx).await?;

    let rows = report
        .rows
        .iter()
        .filter(|r| r.is_new())
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        tracing::warn!("No new valid rows to import");
    }

    tracing::info!("Importing {} new athletes...", rows.len());
    let commit = commit_import(&rows, ctx, Local::now().date_naive()).await;

    for failed in commit.results.iter().filter(|r| !r.success) {
        tracing::error!(
            "  ✗ {}: {}",
            failed.athlete["cpf"].as_str().unwrap_or("?"),
            failed.error.as_deref().unwrap_or_default()
        );
    }

    tracing::info!(
        "Summary: {} succeeded, {} failed",
        commit.succeeded,
        commit.failed
    );
    write_report(&serde_json::to_value(&commit)?, &mut std::io::stdout().lock())?;

    if commit.failed > 0 {
        return Err(format!("{} athlete(s) failed to import", commit.failed).into());
    }

    Ok(())
}

/// Pretty JSON followed by a newline. Logs go to stderr, so stdout carries
/// only the report.
fn write_report<W: Write>(report: &Value, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
