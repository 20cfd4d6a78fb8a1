use scoresync_types::ConfigError;
use std::fs;
use std::path::PathBuf;

const DATA_DIR: &str = ".scoresync";

/// Get data directory path.
///
/// Priority:
/// 1. `SCORESYNC_DATA_DIR` environment variable
/// 2. `~/.scoresync`
///
/// The directory is created if it does not exist.
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = if let Ok(custom_dir) = std::env::var("SCORESYNC_DATA_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = dirs::home_dir()
            .ok_or_else(|| ConfigError::NotFound { path: "home directory".to_string() })?;
        home.join(DATA_DIR)
    };

    ensure_dir(data_dir)
}

/// Create `dir` if needed and return it.
pub fn ensure_dir(dir: PathBuf) -> Result<PathBuf, ConfigError> {
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| ConfigError::from_io_error(&e))?;
    }
    Ok(dir)
}
