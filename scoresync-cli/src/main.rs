//! ScoreSync command line front-end.
//!
//! Records game results into the local store and reconciles them with the
//! remote leaderboard. Every command works offline except `leaderboard`.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;
mod config_commands;
mod state;

use cli::{Cli, Commands, ConfigCommands};
use scoresync_core::utils::paths;
use state::AppState;

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match flag {
        Some(dir) => paths::ensure_dir(dir)?,
        None => paths::get_data_dir()?,
    };
    Ok(dir)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir).context("Failed to resolve data directory")?;

    let log_dir = cli.log_file.then_some(data_dir.as_path());
    let _log_guard = scoresync_core::modules::logger::init_logger(log_dir)?;

    tracing::debug!(data_dir = %data_dir.display(), "Starting scoresync");

    // Config commands never open the record store.
    if let Commands::Config(cmd) = &cli.command {
        return match cmd {
            ConfigCommands::Show { json } => config_commands::show_config(&data_dir, *json),
            ConfigCommands::Get { key } => config_commands::get_config_value(&data_dir, key),
            ConfigCommands::Set { key, value } => {
                config_commands::set_config_value(&data_dir, key, value)
            },
        };
    }

    let state = AppState::build(&data_dir)?;

    match cli.command {
        Commands::Record { name, score, difficulty } => {
            state.service.start_session().await?;
            commands::record(&state, &name, score, difficulty).await
        },
        Commands::Best => commands::best(&state).await,
        Commands::Leaderboard { json } => commands::leaderboard(&state, json).await,
        Commands::Local { limit } => commands::local(&state, limit).await,
        Commands::Sync => commands::sync(&state).await,
        Commands::Pending => commands::pending(&state).await,
        Commands::Reset { yes } => commands::reset(&state, yes).await,
        Commands::Config(_) => Ok(()),
    }
}
