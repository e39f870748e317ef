use std::path::Path;

use flexi_logger::{FileSpec, FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Starts file logging under `dir_path`. Keep the returned handle alive
/// until shutdown or buffered lines are lost.
pub fn init_logger(
    level: &str,
    dir_path: &Path,
    prefix: &str,
) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level)?
        .log_to_file(FileSpec::default().directory(dir_path).basename(prefix))
        .write_mode(WriteMode::BufferAndFlush)
        .start()
}
