use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::comments::use_cases::add_comment::command::AddComment;
use crate::shared::core::envelope::Envelope;
use crate::shell::rejection::RequestRejection;
use crate::shell::state::AppState;

/// Absent fields are taken as empty strings.
#[derive(Debug, Deserialize)]
pub struct AddCommentBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddCommentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return RequestRejection::InvalidRequestBody.into_response(),
    };

    let command = AddComment {
        name: body.name,
        content: body.content,
    };

    let comment = state.add_handler.handle(command).await;
    Json(Envelope::success(comment)).into_response()
}
