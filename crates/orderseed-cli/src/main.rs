mod registry;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use orderseed_core::{Entity, Error as CoreError};
use orderseed_generate::{GenerationEngine, GenerationError};
use registry::init_run_logging;
use settings::{DEFAULT_SETTINGS_FILE, Settings, SettingsError, load_settings, save_settings};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "orderseed", version, about = "Seed data generator for workers, users and orders")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate seed files.
    Generate(GenerateArgs),
    /// Manage the settings file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a settings file with every default spelled out.
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
struct ConfigInitArgs {
    /// Destination of the settings file.
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    path: PathBuf,
    /// Replace an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Tables to generate: workers, users, orders, order-contains or all.
    #[arg(value_name = "TABLE")]
    tables: Vec<String>,
    /// Settings file (defaults to ./orderseed.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for data files and the run report.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Rows per table.
    #[arg(long)]
    rows: Option<u64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Faker locale (en_US or pt_BR).
    #[arg(long)]
    locale: Option<String>,
    /// Reference date (YYYY-MM-DD) used instead of the current date.
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Plain password hashed for every worker and user.
    #[arg(long)]
    password: Option<String>,
    /// Identifier file for task ids.
    #[arg(long)]
    tasks: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Skip writing generation_report.json.
    #[arg(long, default_value_t = false)]
    no_report: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Config(ConfigCommand::Init(args)) => run_config_init(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(args.config.as_deref())?;
    let log_file = args.log_file.clone().or_else(|| settings.log_file.clone());
    init_run_logging(log_file.as_deref())?;

    let selection = resolve_tables(&args.tables, &settings)?;
    let options = merge_options(settings, args);

    tracing::info!(
        event = "run_started",
        tables = ?selection,
        out_dir = %options.out_dir.display()
    );
    let timer = Instant::now();

    let engine = GenerationEngine::new(options);
    let result = engine.run(&selection)?;

    for table in &result.report.tables {
        println!(
            "{}: {} rows -> {}",
            table.entity,
            table.rows_generated,
            table.path.display()
        );
    }
    println!("seed: {}", result.report.seed);

    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_config_init(args: ConfigInitArgs) -> Result<(), CliError> {
    save_settings(&args.path, &Settings::default(), args.force)?;
    println!("wrote {}", args.path.display());
    Ok(())
}

/// Command-line tables win over the settings file; nothing at all means every table.
fn resolve_tables(tables: &[String], settings: &Settings) -> Result<Vec<Entity>, CliError> {
    if tables.iter().any(|table| table.eq_ignore_ascii_case("all")) {
        return Ok(Entity::ALL.to_vec());
    }
    if !tables.is_empty() {
        return tables
            .iter()
            .map(|table| table.parse::<Entity>().map_err(CliError::from))
            .collect();
    }
    if !settings.tables.is_empty() {
        return Ok(settings.tables.clone());
    }
    Ok(Entity::ALL.to_vec())
}

fn merge_options(settings: Settings, args: GenerateArgs) -> orderseed_generate::GenerateOptions {
    let mut options = settings.generate;
    if let Some(out_dir) = args.out_dir {
        options.out_dir = out_dir;
    }
    if let Some(rows) = args.rows {
        options.rows = rows;
    }
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    if let Some(locale) = args.locale {
        options.locale = locale;
    }
    if args.today.is_some() {
        options.today = args.today;
    }
    if let Some(password) = args.password {
        options.password = password;
        options.password_hash = None;
    }
    if args.tasks.is_some() {
        options.inputs.tasks = args.tasks;
    }
    if args.no_report {
        options.write_report = false;
    }
    options
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, orderseed_core::DATE_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}
