use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::errors::SinkError;
use crate::domain::failure::CapturedFailure;
use crate::domain::ports::{Clock, LogRecord, LogSink};

// 2024-05-01T12:00:00Z, shared by deterministic use-case tests.
pub(crate) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("expected a valid fixed instant")
}

// Shared fixed time source for deterministic use-case tests.
#[derive(Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Owned copy of a log record, so tests can inspect it after the call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum RecordedEntry {
    Failure {
        failure: CapturedFailure,
        message: String,
    },
    StackTrace(String),
}

#[derive(Clone)]
pub(crate) struct RecordingSink {
    entries: Arc<Mutex<Vec<(String, RecordedEntry)>>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn entries(&self) -> Vec<(String, RecordedEntry)> {
        let guard = self.entries.lock().expect("entries mutex poisoned");
        guard.clone()
    }
}

impl LogSink for RecordingSink {
    fn record(&self, context: &str, record: &LogRecord<'_>) -> Result<(), SinkError> {
        let entry = match record {
            LogRecord::Failure { failure, message } => RecordedEntry::Failure {
                failure: (*failure).clone(),
                message: (*message).to_string(),
            },
            LogRecord::StackTrace { stack } => RecordedEntry::StackTrace((*stack).to_string()),
        };

        let mut guard = self.entries.lock().expect("entries mutex poisoned");
        guard.push((context.to_string(), entry));
        Ok(())
    }
}

// Sink that is never reachable; counts every write it refuses.
#[derive(Clone, Default)]
pub(crate) struct FailingSink {
    attempts: Arc<AtomicUsize>,
}

impl FailingSink {
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl LogSink for FailingSink {
    fn record(&self, _context: &str, _record: &LogRecord<'_>) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::Unavailable)
    }
}

// Sink that blows up on every write, after counting it.
#[derive(Clone, Default)]
pub(crate) struct PanickingSink {
    attempts: Arc<AtomicUsize>,
}

impl PanickingSink {
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl LogSink for PanickingSink {
    fn record(&self, _context: &str, _record: &LogRecord<'_>) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        panic!("log sink exploded");
    }
}
