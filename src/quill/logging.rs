//! Stderr logging for the binary.
//!
//! The library only emits through the `log` facade; installing a backend is
//! left to `main`. Level precedence: `--verbose` (debug), then the `QUILL_LOG`
//! spec string (e.g. `quill::codec=trace`), then `warn`.

use crate::error::{QuillError, Result};
use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

pub const LOG_ENV_VAR: &str = "QUILL_LOG";
const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Resolves the logger spec string. Pure, so it can be tested without a logger.
pub fn level_spec(verbose: bool, env_value: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match env_value.map(str::trim) {
        Some(spec) if !spec.is_empty() => spec.to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Starts the logger once per process; later calls are no-ops.
pub fn init_logging(verbose: bool) -> Result<()> {
    LOGGER
        .get_or_try_init(|| {
            let env_value = std::env::var(LOG_ENV_VAR).ok();
            let spec = level_spec(verbose, env_value.as_deref());
            Logger::try_with_str(&spec)
                .map_err(|e| QuillError::Config(format!("invalid log spec `{}`: {}", spec, e)))?
                .log_to_stderr()
                .format(flexi_logger::default_format)
                .start()
                .map_err(|e| QuillError::Config(format!("failed to start logger: {}", e)))
        })
        .map(|_| ())
}
