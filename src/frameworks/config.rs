use std::env;

// Filter used when RUST_LOG is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    // Only an exact `json` switches to JSON output.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

pub fn log_format() -> LogFormat {
    LogFormat::parse(env::var("LOG_FORMAT").ok().as_deref())
}
