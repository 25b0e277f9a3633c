pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::failure::{CapturedFailure, StructuredError};
pub use domain::payload::ErrorResponsePayload;
pub use frameworks::logging::init_tracing;
pub use interface_adapters::http::{error_reply, ErrorReply};
pub use use_cases::normalizer::{
    extract_message, DefaultNormalizer, ErrorNormalizer, UNKNOWN_ERROR_MESSAGE,
};
