use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use comment_board::shell::config::AppConfig;
use comment_board::shell::graphql::GRAPHQL_PATH;
use comment_board::shell::http::router;
use comment_board::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let app = router(AppState::seeded());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Comment board listening on http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
