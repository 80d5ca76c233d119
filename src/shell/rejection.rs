// Requests refused before they reach a use case handler.
//
// These answer with a plain text body rather than the JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestRejection {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body")]
    InvalidRequestBody,

    #[error("Invalid comment ID")]
    InvalidCommentId,
}

impl RequestRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestRejection::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RequestRejection::InvalidRequestBody | RequestRejection::InvalidCommentId => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for RequestRejection {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status(), reason = %self, "request rejected");
        (self.status(), self.to_string()).into_response()
    }
}

pub async fn method_not_allowed() -> RequestRejection {
    RequestRejection::MethodNotAllowed
}

/// CORS preflight on the mutating routes: 200 with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
