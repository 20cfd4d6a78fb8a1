use scoresync_types::{ConfigError, ScoreSyncConfig};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "scoresync_config.json";

pub const ENV_REMOTE_URL: &str = "SCORESYNC_REMOTE_URL";
pub const ENV_API_KEY: &str = "SCORESYNC_API_KEY";

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Load the config from `data_dir`, falling back to defaults when the file
/// does not exist. Environment overrides are applied and the result is
/// validated.
pub fn load_config(data_dir: &Path) -> Result<ScoreSyncConfig, ConfigError> {
    let config = read_config_file(data_dir)?;
    apply_overrides(config, |key| std::env::var(key).ok()).validated()
}

fn read_config_file(data_dir: &Path) -> Result<ScoreSyncConfig, ConfigError> {
    let path = config_path(data_dir);
    if !path.exists() {
        return Ok(ScoreSyncConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| ConfigError::ParseError {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
}

/// Apply `SCORESYNC_*` overrides looked up through `lookup`.
pub fn apply_overrides<F>(mut config: ScoreSyncConfig, lookup: F) -> ScoreSyncConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_REMOTE_URL).filter(|v| !v.trim().is_empty()) {
        config.remote.base_url = url;
    }
    if let Some(key) = lookup(ENV_API_KEY) {
        config.remote.api_key = key;
    }
    config
}

/// Save the config atomically (temp file, then rename).
pub fn save_config(data_dir: &Path, config: &ScoreSyncConfig) -> Result<(), ConfigError> {
    let config = config.clone().validated()?;
    let config_path = config_path(data_dir);
    let temp_path = data_dir.join(format!("{}.tmp", CONFIG_FILE));

    let content =
        serde_json::to_string_pretty(&config).map_err(|e| ConfigError::from_json_error(&e))?;

    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::from_io_error(&e))
}

/// Update specific fields in the stored config.
///
/// Works on the file contents only, so environment overrides are never
/// written back.
pub fn update_config<F>(data_dir: &Path, updater: F) -> Result<ScoreSyncConfig, ConfigError>
where
    F: FnOnce(&mut ScoreSyncConfig),
{
    let mut config = read_config_file(data_dir)?;
    updater(&mut config);
    save_config(data_dir, &config)?;
    Ok(config)
}
