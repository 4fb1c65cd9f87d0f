//! File logging bootstrap.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start logging to rotated files under `log_dir`. Safe to call more than
/// once; only the first call configures anything.
pub fn init_logging(level: &str, log_dir: &Path) -> std::result::Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            std::fs::create_dir_all(log_dir)
                .map_err(|e| format!("cannot create log directory: {e}"))?;

            Logger::try_with_str(level)
                .map_err(|e| format!("invalid log level {level:?}: {e}"))?
                .log_to_file(
                    FileSpec::default()
                        .directory(log_dir)
                        .basename("tablonette"),
                )
                .rotate(
                    Criterion::Size(5_000_000),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(3),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .start()
                .map_err(|e| format!("cannot start logger: {e}"))
        })
        .map(|_| ())
}

pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init_logging("info", dir.path()).is_ok());
        assert!(init_logging("debug", dir.path()).is_ok());
    }
}
