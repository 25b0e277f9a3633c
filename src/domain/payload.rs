use serde::{Deserialize, Serialize};

// JSON error envelope returned by callers; `error` is omitted entirely when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponsePayload {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    timestamp: String,
}

impl ErrorResponsePayload {
    pub(crate) fn new(message: String, error: Option<String>, timestamp: String) -> Self {
        Self {
            message,
            error,
            timestamp,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
