use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::comments::core::pagination::PageRequest;
use crate::shared::core::envelope::Envelope;
use crate::shared::core::query_params::{QueryPairs, first_value};
use crate::shell::state::AppState;

/// Page and size stay raw strings: bad values fall back to defaults.
pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> impl IntoResponse {
    let pairs = params.map(|Query(p)| p).unwrap_or_default();
    let request =
        PageRequest::from_raw(first_value(&pairs, "page"), first_value(&pairs, "size"));
    let page = state.list_handler.handle(request).await;
    Json(Envelope::success(page))
}
