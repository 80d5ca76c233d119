use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::comments::core::comment::CommentId;
use crate::modules::comments::use_cases::delete_comment::command::DeleteComment;
use crate::modules::comments::use_cases::delete_comment::handler::DeleteCommentError;
use crate::shared::core::envelope::Envelope;
use crate::shared::core::query_params::{QueryPairs, first_value};
use crate::shell::rejection::RequestRejection;
use crate::shell::state::AppState;

/// The id must be a bare integer; surrounding whitespace is rejected.
fn parse_id(params: Result<Query<QueryPairs>, QueryRejection>) -> Option<CommentId> {
    let Query(pairs) = params.ok()?;
    first_value(&pairs, "id")?.parse().ok()
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> impl IntoResponse {
    let Some(id) = parse_id(params) else {
        return RequestRejection::InvalidCommentId.into_response();
    };

    match state.delete_handler.handle(DeleteComment { id }).await {
        Ok(()) => Json(Envelope::empty()).into_response(),
        Err(e @ DeleteCommentError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, Json(Envelope::failure(e.to_string()))).into_response()
        }
    }
}
