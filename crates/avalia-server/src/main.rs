use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use avalia_gemini::GeminiClient;
use avalia_server::config::ServerConfig;
use avalia_server::state::{AppState, Session};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        model = %config.gemini.model,
        credential_configured = config.gemini.has_credential(),
        "analysis client configured"
    );

    let client = GeminiClient::new(config.gemini.clone());
    let state = AppState::new(Session::default(), Arc::new(client));
    let app = avalia_server::router(state);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
