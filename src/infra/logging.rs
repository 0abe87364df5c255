use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Installs the global subscriber. Stdout stays free for shell output, so
/// logs go to stderr unless a log file is configured.
///
/// The returned guard must be held for the life of the process when a log
/// file is in use; dropping it flushes and stops the writer thread.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let Some(path) = config.file.as_deref() else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(AppError::LoggingInit)?;
        return Ok(None);
    };

    let appender = file_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(Some(guard))
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, AppError> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rcpt.log".to_owned());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|source| AppError::LogFileOpen {
            path: path.to_path_buf(),
            source,
        })
}
