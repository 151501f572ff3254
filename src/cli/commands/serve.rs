use anyhow::Context;
use std::sync::Arc;

use crate::app::{app, AppState};
use crate::auth::TokenService;
use crate::config;
use crate::database::{DatabaseManager, MySqlProcedures};

pub async fn handle(port: Option<u16>, bind: Option<String>) -> anyhow::Result<()> {
    let config = config::config();
    tracing::info!("Starting POS API in {:?} mode", config.environment);

    let tokens = TokenService::new(&config.security.secret_key).context("SECRET_KEY is not usable")?;
    let pool = DatabaseManager::connect_lazy(&config.database).context("DATABASE_URL is not usable")?;
    let state = AppState::new(Arc::new(MySqlProcedures::new(pool)), tokens);

    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let port = port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", bind, port);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app(state, config)).await.context("server error")?;
    Ok(())
}
