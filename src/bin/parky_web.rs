//! Web tier entry point.

use tracing_subscriber::EnvFilter;

use parky::web::{config::WebConfig, error::WebError, router, startup, state::WebState};

#[tokio::main]
async fn main() -> Result<(), WebError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = WebConfig::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = reqwest::Client::new();

    let app = router::router()
        .with_state(WebState::new(http_client, config.api_base_url.clone()))
        .layer(session);

    tracing::info!("Web tier listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
