use flexi_logger::{Logger, LoggerHandle};

/// Logs go to stderr so stdout only carries command output.
pub fn init(level: &str) -> miette::Result<LoggerHandle> {
    Logger::try_with_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|err| {
            miette::diagnostic!(
                severity = miette::Severity::Error,
                code = "logging::Init",
                "failed to start logger with `{level}`: {err}",
            )
            .into()
        })
}
