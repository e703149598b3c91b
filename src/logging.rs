//! File logging for BuildUp
//!
//! The TUI owns the terminal, so everything goes to a daily-rolled file in
//! the configured log directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_PREFIX: &str = "buildup";
const LOG_FILE_SUFFIX: &str = "log";
const DEFAULT_FILTER: &str = "buildup=debug,reqwest=info,warn";

/// Install the global subscriber writing to `<log_dir>/buildup.YYYY-MM-DD.log`.
///
/// `RUST_LOG` overrides the default filter (`buildup` at DEBUG, `reqwest` at
/// INFO, everything else at WARN). Buffered lines are flushed when the
/// returned guard is dropped, so keep it until shutdown.
pub fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let file_appender = rolling_appender(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}

fn rolling_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)?;
    Ok(appender)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log the outcome of a catalog request: result count or error, plus any
/// extra fields given after the result.
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr $(, $($field:tt)+)?) => {
        match &$result {
            Ok(items) => tracing::info!(operation = $operation, results = items.len(), $($($field)+,)? "Catalog request succeeded"),
            Err(e) => tracing::error!(operation = $operation, error = %e, $($($field)+,)? "Catalog request failed"),
        }
    };
}

/// Log the start of a catalog request with its parameters
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "Catalog request started");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appender_creates_missing_log_dir() {
        let dir = std::env::temp_dir().join(format!("buildup-logs-{}", std::process::id()));
        let nested = dir.join("nested");
        let _ = std::fs::remove_dir_all(&dir);

        rolling_appender(&nested).unwrap();
        assert!(nested.is_dir());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
