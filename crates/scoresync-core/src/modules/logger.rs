//! Tracing subscriber setup.
//!
//! Stderr always; an additional daily-rolling file in `log_dir` when given.
//! `RUST_LOG` overrides the default `info` filter.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{AppError, AppResult};

const LOG_FILE_PREFIX: &str = "scoresync.log";

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process, otherwise buffered file output is lost.
pub fn init_logger(log_dir: Option<&Path>) -> AppResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
            Ok(Some(guard))
        },
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))?;
            Ok(None)
        },
    }
}
