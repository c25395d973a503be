use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Starts logging to stderr. `RUST_LOG` takes precedence over `level`.
///
/// The returned handle must be kept alive for as long as the process logs.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
}
