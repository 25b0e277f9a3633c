use tracing_subscriber::EnvFilter;

use crate::frameworks::config::{log_format, LogFormat, DEFAULT_LOG_FILTER};

// Install the process-wide tracing subscriber and panic hook.
//
// Returns false when a global subscriber was already set; the existing one is kept.
pub fn init_tracing() -> bool {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = match log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .try_init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init(),
    }
    .is_ok();

    if installed {
        std::panic::set_hook(Box::new(|info| {
            let backtrace = std::backtrace::Backtrace::capture();
            tracing::error!(%info, ?backtrace, "panic");
        }));
    }

    installed
}
