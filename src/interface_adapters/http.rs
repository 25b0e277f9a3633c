use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::payload::ErrorResponsePayload;

// JSON error reply for handlers; the status code is the caller's choice.
#[derive(Debug)]
pub struct ErrorReply {
    pub status: StatusCode,
    pub payload: ErrorResponsePayload,
}

impl ErrorReply {
    pub fn new(status: StatusCode, payload: ErrorResponsePayload) -> Self {
        Self { status, payload }
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        error_reply(self.status, self.payload).into_response()
    }
}

// Helper to build a JSON error response.
pub fn error_reply(
    status: StatusCode,
    payload: ErrorResponsePayload,
) -> (StatusCode, Json<ErrorResponsePayload>) {
    (status, Json(payload))
}
