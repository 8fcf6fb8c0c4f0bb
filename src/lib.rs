// Modules
pub mod ai;
pub mod audio;
pub mod commands;
pub mod config;
pub mod db;
pub mod i18n;
pub mod server;
pub mod song;
pub mod telemetry;

use commands::AppState;
use config::AppConfig;
use server::ServerState;
use std::sync::Arc;

/// Open the database, start the API server and run until Ctrl-C.
pub async fn run(config: AppConfig, token: Option<String>) -> Result<(), String> {
    let host = config.host.clone();
    let port = config.port;
    let app = AppState::open(config).map_err(|e| format!("Failed to open database: {}", e))?;
    if app.api_key().is_none() {
        tracing::warn!("No Gemini API key configured, generation requests will fail");
    }

    let state = Arc::new(ServerState { app, token });
    let server = server::start_server(state, &host, port).await?;
    tracing::info!(addr = %server.addr, "Listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for Ctrl-C: {}", e))?;
    server.stop().await;
    Ok(())
}
