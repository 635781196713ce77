mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::services::contact::PgContactStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let state = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "contact messages stored in postgres");
            state::AppState::new(Arc::new(PgContactStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, contact messages kept in memory only");
            state::AppState::in_memory()
        }
    };

    let app = routes::leptos_app(state, &config.static_dir).expect("router init failed");

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
