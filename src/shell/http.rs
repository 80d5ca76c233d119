use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::modules::comments::use_cases::add_comment::inbound::http as add_http;
use crate::modules::comments::use_cases::delete_comment::inbound::http as delete_http;
use crate::modules::comments::use_cases::list_comments::inbound::http as list_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::rejection::{method_not_allowed, preflight};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .merge(listing_routes())
        .merge(mutating_routes())
        .route("/health", get(health))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

// GET only. HEAD and OPTIONS fall through to 405, so the CORS layer (which
// answers every OPTIONS itself) stays off this route.
fn listing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comment/get",
            get(list_http::handle)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

fn mutating_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/comment/add",
            post(add_http::handle)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/comment/delete",
            post(delete_http::handle)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
