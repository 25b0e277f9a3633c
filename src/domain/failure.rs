use serde_json::Value;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

// A value caught at a failure boundary, narrowed into the shapes we know how to read.
#[derive(Clone, Debug, PartialEq)]
pub enum CapturedFailure {
    // A structured error raised through the std error protocol.
    Error(StructuredError),
    // A bare string thrown or returned in place of an error.
    Text(String),
    // Anything else: objects, numbers, booleans, arrays or null.
    Value(Value),
}

impl CapturedFailure {
    // Wrap any std error, capturing a backtrace when the environment enables one.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Error(StructuredError::new(&error))
    }
}

impl From<StructuredError> for CapturedFailure {
    fn from(error: StructuredError) -> Self {
        Self::Error(error)
    }
}

impl From<Box<dyn Error + Send + Sync>> for CapturedFailure {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::Error(StructuredError::new(&*error))
    }
}

impl From<String> for CapturedFailure {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CapturedFailure {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for CapturedFailure {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

// Snapshot of a std error: its message, cause chain and (optionally) a stack trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredError {
    message: String,
    sources: Vec<String>,
    stack: Option<String>,
}

impl StructuredError {
    pub fn new(error: &dyn Error) -> Self {
        // Backtrace::capture honours RUST_BACKTRACE / RUST_LIB_BACKTRACE.
        let backtrace = Backtrace::capture();
        let stack = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };

        Self {
            message: error.to_string(),
            sources: source_chain(error),
            stack,
        }
    }

    // Build from an error whose stack trace was recorded elsewhere.
    pub fn with_stack(error: &dyn Error, stack: impl Into<String>) -> Self {
        Self {
            message: error.to_string(),
            sources: source_chain(error),
            stack: Some(stack.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

fn source_chain(error: &dyn Error) -> Vec<String> {
    let mut sources = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        sources.push(cause.to_string());
        current = cause.source();
    }
    sources
}
