//! File logging. A full-screen TUI owns stdout/stderr, so diagnostics go to
//! rotated files under the config directory.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "folio";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceLock<(PathBuf, LoggerHandle)> = OnceLock::new();

/// Starts the file logger. Calling again is a no-op that returns the active directory.
///
/// # Errors
/// Returns a readable message if the directory cannot be created or the level is invalid.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<PathBuf, String> {
    if let Some((dir, _)) = LOGGER.get() {
        return Ok(dir.clone());
    }

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=app_start version={} level={level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    let (dir, _) = LOGGER.get_or_init(|| (log_dir.to_path_buf(), handle));
    Ok(dir.clone())
}

/// Flushes buffered log lines. Call before the process exits.
pub fn flush() {
    if let Some((_, handle)) = LOGGER.get() {
        handle.flush();
    }
}
