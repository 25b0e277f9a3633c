use chrono::{DateTime, Utc};

use crate::domain::errors::SinkError;
use crate::domain::failure::CapturedFailure;

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// One diagnostic record emitted while reporting a failure.
#[derive(Debug)]
pub enum LogRecord<'a> {
    Failure {
        failure: &'a CapturedFailure,
        message: &'a str,
    },
    StackTrace {
        stack: &'a str,
    },
}

// Port for the operator-visible diagnostic stream.
pub trait LogSink: Send + Sync {
    fn record(&self, context: &str, record: &LogRecord<'_>) -> Result<(), SinkError>;
}
