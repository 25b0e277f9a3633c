use chrono::{DateTime, Utc};

use crate::domain::errors::SinkError;
use crate::domain::ports::{Clock, LogRecord, LogSink};

// System clock adapter used by the normalizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// Log sink that writes failure reports through `tracing` at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, context: &str, record: &LogRecord<'_>) -> Result<(), SinkError> {
        match record {
            LogRecord::Failure { failure, message } => {
                tracing::error!(%context, ?failure, normalized = %message, "failure reported");
            }
            LogRecord::StackTrace { stack } => {
                tracing::error!(%context, %stack, "failure stack trace");
            }
        }
        Ok(())
    }
}
