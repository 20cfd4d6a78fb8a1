use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use scoresync_core::modules::config as core_config;
use scoresync_types::ScoreSyncConfig;

pub fn show_config(data_dir: &Path, json: bool) -> Result<()> {
    let config = core_config::load_config(data_dir)?;

    if json {
        let mut masked = config.clone();
        masked.remote.api_key = mask_key(&config.remote.api_key);
        println!("{}", serde_json::to_string_pretty(&masked)?);
    } else {
        println!("{}", "Remote Leaderboard:".cyan().bold());
        println!("  URL: {}", config.remote.base_url);
        println!("  Table: {}", config.remote.table);
        println!("  API Key: {}", mask_key(&config.remote.api_key));
        println!("  Timeout: {}s", config.remote.timeout_secs);
        println!("{}", "Local:".cyan().bold());
        println!("  Leaderboard Size: {}", config.leaderboard_size);
        println!("  Default Player: {}", config.default_player_name);
        println!("  Database: {}", data_dir.join(&config.database_file).display());
    }
    Ok(())
}

pub fn get_config_value(data_dir: &Path, key: &str) -> Result<()> {
    let config = core_config::load_config(data_dir)?;

    let value = match key {
        "remote.base_url" => config.remote.base_url,
        "remote.api_key" => config.remote.api_key,
        "remote.table" => config.remote.table,
        "remote.timeout_secs" => config.remote.timeout_secs.to_string(),
        "leaderboard_size" => config.leaderboard_size.to_string(),
        "default_player_name" => config.default_player_name,
        "database_file" => config.database_file,
        _ => anyhow::bail!("Unknown config key: {}", key),
    };

    println!("{}", value);
    Ok(())
}

/// A parsed `config set` request, checked before the file is touched.
enum ConfigUpdate {
    BaseUrl(String),
    ApiKey(String),
    Table(String),
    TimeoutSecs(u64),
    LeaderboardSize(usize),
    DefaultPlayerName(String),
    DatabaseFile(String),
}

impl ConfigUpdate {
    fn parse(key: &str, value: &str) -> Result<Self> {
        Ok(match key {
            "remote.base_url" => Self::BaseUrl(value.to_string()),
            "remote.api_key" => Self::ApiKey(value.to_string()),
            "remote.table" => Self::Table(value.to_string()),
            "remote.timeout_secs" => Self::TimeoutSecs(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid number of seconds: {}", value))?,
            ),
            "leaderboard_size" => Self::LeaderboardSize(
                value.parse().map_err(|_| anyhow::anyhow!("Invalid leaderboard size: {}", value))?,
            ),
            "default_player_name" => Self::DefaultPlayerName(value.trim().to_string()),
            "database_file" => Self::DatabaseFile(value.to_string()),
            _ => anyhow::bail!("Unknown config key: {}", key),
        })
    }

    fn apply(self, config: &mut ScoreSyncConfig) {
        match self {
            Self::BaseUrl(v) => config.remote.base_url = v,
            Self::ApiKey(v) => config.remote.api_key = v,
            Self::Table(v) => config.remote.table = v,
            Self::TimeoutSecs(v) => config.remote.timeout_secs = v,
            Self::LeaderboardSize(v) => config.leaderboard_size = v,
            Self::DefaultPlayerName(v) => config.default_player_name = v,
            Self::DatabaseFile(v) => config.database_file = v,
        }
    }
}

pub fn set_config_value(data_dir: &Path, key: &str, value: &str) -> Result<()> {
    let update = ConfigUpdate::parse(key, value)?;
    core_config::update_config(data_dir, |config| update.apply(config))?;

    let shown = if key == "remote.api_key" { mask_key(value) } else { value.to_string() };
    println!("{} Config updated: {} = {}", "✓".green(), key, shown);
    Ok(())
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
