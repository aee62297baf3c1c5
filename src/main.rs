use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod shutdown;

use crate::config::Config;

/// Shared application state. Immutable after startup, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub started_at: DateTime<Utc>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,impact_analyzer=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Environmental Impact Analyzer API   ║");
    info!("║  v{:<35}║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let state = AppState {
        started_at: Utc::now(),
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Service ─────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Assessment ──────────────────────────────────────────────────────
        .route("/api/v1/assess", post(handlers::assessment::assess_product))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/api/v1/products/:product_id",
            get(handlers::products::get_product),
        )

        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
