//! sqlchain CLI - Replay a migration script into a DDL file
//!
//! Usage:
//!   sqlchain build <script.toml> [--config <file>] [--output <file>] [--echo]
//!   sqlchain check <script.toml> [--config <file>]
//!
//! Examples:
//!   sqlchain build migrations/2024_users.toml --output schema.sql
//!   sqlchain build migrations/2024_users.toml --prefix app_ --engine InnoDB --echo
//!   sqlchain check migrations/2024_users.toml

use clap::{Args, Parser, Subcommand};
use sqlchain::config::{ChainConfig, SettingsError};
use sqlchain::error::ChainError;
use sqlchain::output::{FsSink, Outcome};
use sqlchain::script::Script;
use sqlchain::SchemaBuilder;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlchain")]
#[command(about = "sqlchain - Chain table declarations into a MySQL DDL script")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options that shape the [`ChainConfig`] for a run.
#[derive(Args, Default)]
struct ConfigArgs {
    /// Config file (defaults to SQLCHAIN_CONFIG, ./sqlchain.toml, user config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Table name prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Storage engine for CREATE statements
    #[arg(long)]
    engine: Option<String>,

    /// Default charset for CREATE statements
    #[arg(long)]
    charset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script and write (or echo) the resulting SQL
    Build {
        /// Path to the migration script
        script: PathBuf,

        #[command(flatten)]
        settings: ConfigArgs,

        /// Output file, overriding the configured filename
        #[arg(short, long)]
        output: Option<String>,

        /// Print the SQL instead of writing a file
        #[arg(long)]
        echo: bool,
    },

    /// Replay and render a script without writing anything
    Check {
        /// Path to the migration script
        script: PathBuf,

        #[command(flatten)]
        settings: ConfigArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            script,
            settings,
            output,
            echo,
        } => cmd_build(script, settings, output, echo),
        Commands::Check { script, settings } => cmd_check(script, settings),
    }
}

fn cmd_build(
    script_path: PathBuf,
    settings: ConfigArgs,
    output: Option<String>,
    echo: bool,
) -> ExitCode {
    let script = match Script::from_file(&script_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading script '{}': {}", script_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut config = match resolve_config(&script, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(output) = output {
        config = config.filename(output);
    }
    if echo {
        config.filename.clear();
    }

    let mut schema = SchemaBuilder::new(config);
    script.apply(&mut schema);

    match schema.finalize(&mut FsSink) {
        Ok(outcome) => {
            match &outcome {
                Outcome::Echoed(sql) => print!("{}", sql),
                Outcome::Written {
                    path,
                    backup: Some(backup),
                } => eprintln!(
                    "Wrote {} (previous file kept as {})",
                    path.display(),
                    backup.display()
                ),
                Outcome::Written { path, backup: None } => eprintln!("Wrote {}", path.display()),
                Outcome::NothingChanged => {}
            }
            eprintln!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_check(script_path: PathBuf, settings: ConfigArgs) -> ExitCode {
    let script = match Script::from_file(&script_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading script '{}': {}", script_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let config = match resolve_config(&script, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut schema = SchemaBuilder::new(config);
    script.apply(&mut schema);

    match check_report(&schema) {
        Ok(summary) => {
            println!("OK: {} ({})", script_path.display(), summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Config file (explicit or searched), then the script's `[config]`, then CLI flags.
fn resolve_config(script: &Script, settings: ConfigArgs) -> Result<ChainConfig, SettingsError> {
    let mut config = match &settings.config {
        Some(path) => ChainConfig::from_file(path)?,
        None => ChainConfig::load()?,
    };

    if let Some(embedded) = &script.config {
        config = merge(config, embedded);
    }

    let overrides = [
        ("prefix", settings.prefix),
        ("engine", settings.engine),
        ("charset", settings.charset),
    ];
    Ok(config.register(
        overrides
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v))),
    ))
}

/// Render the replayed script and summarize it, or return the stored error.
fn check_report(schema: &SchemaBuilder) -> Result<String, &ChainError> {
    if let Some(err) = schema.error() {
        return Err(err);
    }

    let sql = schema.render();
    Ok(format!(
        "{} statements, {} bytes",
        schema.tables().len(),
        sql.len()
    ))
}

fn merge(base: ChainConfig, overlay: &ChainConfig) -> ChainConfig {
    let pairs = [
        ("prefix", &overlay.prefix),
        ("engine", &overlay.engine),
        ("charset", &overlay.charset),
        ("filename", &overlay.filename),
    ];
    base.register(pairs.into_iter().filter(|(_, v)| !v.is_empty()))
}
