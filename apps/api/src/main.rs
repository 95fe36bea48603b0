mod analysis;
mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod resume;
mod routes;
mod skills;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::db::create_pool;
use crate::resume::{DemoResumeScanner, ResumeScanner};
use crate::routes::build_router;
use crate::skills::store::PgProfileStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Gap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgProfileStore::new(db));

    // Resume scanner: fixed demo output, no extraction
    let scanner = Arc::new(DemoResumeScanner);
    info!("Resume scanner: {}", scanner.method());

    let tokens = Arc::new(TokenVerifier::new(&config.jwt_secret));
    info!("Upload directory: {}", config.upload_dir.display());

    let state = AppState {
        store,
        scanner,
        tokens,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
