use std::error::Error;
use std::fmt;

// Failures a log sink may report back; the normalizer swallows all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Unavailable => write!(f, "log sink unavailable"),
            SinkError::Rejected(reason) => write!(f, "log sink rejected record: {reason}"),
        }
    }
}

impl Error for SinkError {}
