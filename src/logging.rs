//! Logging bootstrap for the CLI binary.
//!
//! Logs go to stderr so command output stays pipeable. The level comes
//! from `ADDRBOOK_LOG` when set, otherwise from the build mode.

use flexi_logger::{Logger, LoggerHandle};

/// Starts stderr logging once at process start.
///
/// The returned handle must stay alive for the duration of the program;
/// dropping it shuts the logger down.
pub fn init() -> Result<LoggerHandle, String> {
    let spec = std::env::var("ADDRBOOK_LOG").unwrap_or(default_level().to_string());

    Logger::try_with_str(&spec)
        .map_err(|err| format!("invalid log level `{spec}`: {err}"))?
        .log_to_stderr()
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "warn" }
}
