// src/bin/appointment_migrate.rs
//! appointment-migrate: operator CLI for the schema-migration engine
//!
//! Commands that write to the database run under the cron mutex, so a
//! deploy hook and a scheduled job never migrate at the same time.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use appointment_schema::config::{self, Config};
use appointment_schema::consts::REVISION_ID_HEX_LEN;
use appointment_schema::db::open_database;
use appointment_schema::error::CoreError;
use appointment_schema::migrate::{MigrationReport, MigrationRunner, Registry};
use appointment_schema::revisions;

#[derive(Parser, Debug)]
#[command(name = "appointment-migrate", version, about = "Appointment schema migrations")]
struct Cli {
    /// Config file (defaults to $APPT_CONFIG, then ./appointment.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file, overriding the config
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply revisions up to TARGET
    Upgrade {
        #[arg(default_value = "head")]
        target: String,
    },
    /// Revert revisions down to TARGET
    Downgrade { target: String },
    /// Print the applied revision
    Current,
    /// List revisions, newest first
    History {
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the head revision
    Heads,
    /// Record TARGET as applied without running anything
    Stamp { target: String },
    /// Generate an id for a new revision
    NewId,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = revisions::registry().context("revision corpus is malformed")?;

    match cli.command {
        Command::NewId => {
            println!("{}", new_revision_id());
            return Ok(());
        }
        Command::History { verbose } => {
            print_history(&registry, verbose);
            return Ok(());
        }
        Command::Heads => {
            println!("{} (head)", registry.head().id);
            return Ok(());
        }
        _ => {}
    }

    let config = load_config(&cli)?;
    let codec = config.codec();
    let runner =
        MigrationRunner::new(&registry, &codec).with_version_table(config.version_table()?);

    let mut conn = open_database(&config.database.path)
        .with_context(|| format!("failed to open {}", config.database.path))?;

    match cli.command {
        Command::Current => {
            let current = runner.current(&conn)?;
            match current.as_deref().and_then(|id| registry.get(id)) {
                Some(rev) => println!("{}{}", rev.id, head_marker(&registry, rev.id)),
                None => match current {
                    Some(unknown) => println!("{unknown} (not in this corpus)"),
                    None => info!("No revision applied"),
                },
            }
        }
        Command::Upgrade { target } => {
            let report = locked(&config, || Ok(runner.upgrade(&mut conn, &target)?))?;
            summarize(&report);
        }
        Command::Downgrade { target } => {
            let report = locked(&config, || Ok(runner.downgrade(&mut conn, &target)?))?;
            summarize(&report);
        }
        Command::Stamp { target } => {
            let stamped = locked(&config, || Ok(runner.stamp(&mut conn, &target)?))?;
            println!("{}", stamped.unwrap_or("base"));
        }
        Command::NewId | Command::History { .. } | Command::Heads => {}
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_path(path)?;
            config.apply_env_overrides();
            config
        }
        None => config::load()?.clone(),
    };
    if let Some(path) = &cli.database {
        config.database.path = path.display().to_string();
    }
    Ok(config)
}

/// Run `job` under the configured cron mutex
fn locked<T>(config: &Config, job: impl FnOnce() -> Result<T, CoreError>) -> Result<T> {
    let mutex = config.lock()?;
    Ok(mutex.run(job)?)
}

fn summarize(report: &MigrationReport) {
    let from = report.from.as_deref().unwrap_or("base");
    let to = report.to.as_deref().unwrap_or("base");
    if report.is_noop() {
        info!("Nothing to do, already at {to}");
    } else {
        info!(
            "{} complete: {from} -> {to} ({} revisions)",
            report.direction,
            report.steps.len()
        );
    }
}

fn print_history(registry: &Registry, verbose: bool) {
    for rev in registry.iter().rev() {
        println!("{rev}{}", head_marker(registry, rev.id));
        if verbose {
            println!("    Revision ID: {}", rev.id);
            if !rev.branch_labels.is_empty() {
                println!("    Branch labels: {}", rev.branch_labels.join(", "));
            }
            if rev.is_merge() {
                println!("    Merges: {}", rev.parents.join(", "));
            }
            println!("    Create Date: {}", rev.created);
            if rev.is_irreversible() {
                println!("    Irreversible");
            }
            println!();
        }
    }
}

fn head_marker(registry: &Registry, id: &str) -> &'static str {
    if registry.head().id == id {
        " (head)"
    } else {
        ""
    }
}

fn new_revision_id() -> String {
    let bytes: [u8; REVISION_ID_HEX_LEN / 2] = rand::random();
    hex::encode(bytes)
}
