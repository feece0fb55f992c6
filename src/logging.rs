//! Tracing subscriber setup
//!
//! Events go to a daily rolling JSON log file. When a process monitor writer
//! is supplied, the same events are also forwarded to the monitor device as
//! plain text lines. If the log directory cannot be created, events go to
//! stderr instead and the command still runs.

use std::path::Path;

use thiserror::Error;
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::config::LogConfig;
use crate::diagnostics::device::DeviceApi;
use crate::diagnostics::writer::MonitorWriter;

const LOG_FILE_PREFIX: &str = "semver-stamp.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Build the filter from RUST_LOG, falling back to the configured level
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the program. No guard is returned when logging fell back to
/// stderr.
pub fn init<D: DeviceApi + 'static>(
    config: &LogConfig,
    monitor: Option<MonitorWriter<D>>,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let (file_output, fallback) = match file_writer(&config.directory()) {
        Ok(output) => (Some(output), None),
        Err(e) => (None, Some(e)),
    };
    let (non_blocking, guard) = file_output.unzip();

    let file_layer = non_blocking.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    });

    let stderr_layer = fallback
        .is_some()
        .then(|| fmt::layer().with_writer(std::io::stderr));

    let monitor_layer = monitor.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(file_layer)
        .with(stderr_layer)
        .with(monitor_layer)
        .try_init()?;

    if let Some(e) = fallback {
        warn!("Logging to stderr: {}", e);
    }

    Ok(guard)
}

fn file_writer(directory: &Path) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    create_log_dir(directory)?;

    let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(file_appender))
}

fn create_log_dir(path: &Path) -> Result<(), LoggingError> {
    std::fs::create_dir_all(path).map_err(|source| LoggingError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::device::FileDevice;

    #[test]
    fn create_log_dir_creates_nested_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("a/b/logs");

        create_log_dir(&path).unwrap();

        assert!(path.is_dir());
    }

    #[test]
    fn unwritable_log_directory_falls_back_to_stderr() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = LogConfig {
            level: "debug".to_string(),
            directory: Some(file.path().join("logs")),
        };

        let guard = init::<FileDevice>(&config, None).unwrap();

        assert!(guard.is_none());
        assert!(!file.path().join("logs").exists());
    }

    #[test]
    fn create_log_dir_fails_below_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().join("logs");

        assert!(matches!(
            create_log_dir(&path),
            Err(LoggingError::CreateDir { .. })
        ));
    }
}
