use chrono::SecondsFormat;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};

use crate::domain::failure::CapturedFailure;
use crate::domain::payload::ErrorResponsePayload;
use crate::domain::ports::{Clock, LogRecord, LogSink};
use crate::interface_adapters::sinks::{SystemClock, TracingSink};

// Message used when nothing readable can be pulled out of a failure.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

// Flatten a captured failure into a single human-readable message.
//
// Precedence: structured error message, then plain string, then an object's
// `message` field, then the fixed fallback.
pub fn extract_message(failure: &CapturedFailure) -> String {
    match failure {
        CapturedFailure::Error(error) => error.message().to_string(),
        CapturedFailure::Text(text) | CapturedFailure::Value(Value::String(text)) => text.clone(),
        CapturedFailure::Value(Value::Object(fields)) => fields
            .get("message")
            .map(coerce_to_string)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        CapturedFailure::Value(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}

// Strings pass through; everything else renders as compact JSON (`42`, `true`, `null`).
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// Error normalizer with injected clock and log sink.
pub struct ErrorNormalizer<C, L> {
    pub clock: C,
    pub sink: L,
}

// Normalizer wired to the wall clock and the tracing pipeline.
pub type DefaultNormalizer = ErrorNormalizer<SystemClock, TracingSink>;

impl Default for DefaultNormalizer {
    fn default() -> Self {
        Self {
            clock: SystemClock,
            sink: TracingSink,
        }
    }
}

impl<C, L> ErrorNormalizer<C, L>
where
    C: Clock,
    L: LogSink,
{
    pub fn new(clock: C, sink: L) -> Self {
        Self { clock, sink }
    }

    // Build the response envelope; `None` leaves `error` absent, while any
    // supplied failure (even an empty string) populates it.
    pub fn build_response_payload(
        &self,
        message: &str,
        failure: Option<&CapturedFailure>,
    ) -> ErrorResponsePayload {
        let timestamp = self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true);

        ErrorResponsePayload::new(message.to_string(), failure.map(extract_message), timestamp)
    }

    // Log a failure under `context`, plus its stack trace when one was captured.
    // Sink errors and sink panics are swallowed.
    pub fn report_failure(&self, context: &str, failure: &CapturedFailure) {
        let message = extract_message(failure);
        self.emit(
            context,
            &LogRecord::Failure {
                failure,
                message: &message,
            },
        );

        if let CapturedFailure::Error(error) = failure {
            if let Some(stack) = error.stack() {
                self.emit(context, &LogRecord::StackTrace { stack });
            }
        }
    }

    fn emit(&self, context: &str, record: &LogRecord<'_>) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.sink.record(context, record)));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                tracing::debug!(%context, %error, "log sink rejected failure report");
            }
            Err(_) => {
                tracing::debug!(%context, "log sink panicked while reporting failure");
            }
        }
    }
}
