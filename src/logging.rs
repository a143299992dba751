//! Logger setup for the binary

use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Start logging to stderr.
///
/// An explicit `filter` wins over `RUST_LOG`. Keep the returned handle alive
/// for as long as the program should log.
pub fn setup_logging(filter: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = match filter {
        Some(filter) => Logger::try_with_str(filter)?,
        None => Logger::try_with_env_or_str(DEFAULT_LOG_FILTER)?,
    };
    logger.log_to_stderr().format(opt_format).start()
}
