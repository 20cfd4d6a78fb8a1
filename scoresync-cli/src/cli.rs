use clap::{Parser, Subcommand};
use scoresync_types::Difficulty;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scoresync",
    about = "ScoreSync - offline-first scores with a shared leaderboard",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, env = "SCORESYNC_DATA_DIR", help = "Data directory")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Also write logs to a daily file in the data directory")]
    pub log_file: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Record a finished game")]
    Record {
        #[arg(short, long, default_value = "", help = "Player name (blank uses the placeholder)")]
        name: String,

        #[arg(short, long, allow_negative_numbers = true, help = "Final score")]
        score: i64,

        #[arg(short, long, default_value = "normal", value_parser = parse_difficulty)]
        difficulty: Difficulty,
    },

    #[command(about = "Show the best local score")]
    Best,

    #[command(about = "Fetch and show the remote leaderboard")]
    Leaderboard {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Show the best local records")]
    Local {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    #[command(about = "Push unsynced records to the remote leaderboard")]
    Sync,

    #[command(about = "Show how many records wait for sync")]
    Pending,

    #[command(about = "Delete all local records (remote leaderboard is kept)")]
    Reset {
        #[arg(long, help = "Confirm deleting every local record")]
        yes: bool,
    },

    #[command(subcommand, about = "View and modify configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Config key (e.g. leaderboard_size)")]
        key: String,
    },

    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Config key (e.g. remote.base_url)")]
        key: String,
        #[arg(help = "New value")]
        value: String,
    },
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    value.parse().map_err(|e: scoresync_types::ParseDifficultyError| e.to_string())
}
