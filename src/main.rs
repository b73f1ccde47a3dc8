//! Issue Arcade - one instruction per run
//!
//! Applies an issue title to the stored board, prints a one-line status, and
//! optionally regenerates the markdown page.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use issue_arcade::{
    ArcadeConfig, JsonFileStore, StateStore, TurnRunner, VariantConfig, render_page, render_text,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = ArcadeConfig::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            variant,
            instruction,
            player,
            render,
        } => run_play(config.variant(variant), instruction, player, render),
        Command::Render { variant } => {
            run_render(config.variant(variant))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { variant } => {
            run_show(config.variant(variant))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs go to stderr so stdout carries only the status line.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Apply one instruction to the stored board
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_play(
    config: &VariantConfig,
    instruction: Option<String>,
    player: Option<String>,
    render: bool,
) -> Result<ExitCode> {
    let Some(instruction) = instruction.filter(|i| !i.trim().is_empty()) else {
        eprintln!("Error: No issue title provided");
        return Ok(ExitCode::FAILURE);
    };

    let mut runner = TurnRunner::from_config(config);
    let report = runner.handle(&instruction, player.as_deref())?;
    println!("{}", report.message());

    if render && report.changed_state() {
        run_render(config)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Regenerate the markdown page
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_render(config: &VariantConfig) -> Result<()> {
    let store = JsonFileStore::from_config(config);
    let snapshot = store.load()?;
    let stats = store.load_stats()?;
    let page = render_page(&snapshot, &stats, config);

    let path = config.page_file();
    std::fs::write(path, page).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Page written");
    eprintln!("{} updated successfully!", path.display());
    Ok(())
}

/// Print the stored board
#[instrument(skip(config))]
fn run_show(config: &VariantConfig) -> Result<()> {
    let snapshot = JsonFileStore::from_config(config).load()?;
    print!("{}", render_text(&snapshot));
    if !snapshot.status().is_terminal() {
        println!("{} legal moves", snapshot.legal_targets().len());
    }
    Ok(())
}
