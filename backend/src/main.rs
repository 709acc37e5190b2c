//! Jal-Mitra - Groundwater Advisory Server
//!
//! Serves the advisory pipeline over HTTP: reading lookups, per-session
//! conversations and an optional generative assistant.

use axum::{routing::get, Router};
use shared::ReadingStore;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use external::GeminiClient;
use services::SessionRegistry;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<ReadingStore>,
    pub sessions: SessionRegistry,
    pub gemini: Option<GeminiClient>,
}

impl AppState {
    pub fn new(config: Config, store: ReadingStore, gemini: Option<GeminiClient>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            sessions: SessionRegistry::new(),
            gemini,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jal_mitra_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Jal-Mitra Server");
    tracing::info!("Environment: {}", config.environment);

    let store = services::dataset::load_store(&config.dataset)?;

    let gemini = GeminiClient::from_config(&config.gemini)?;
    match &gemini {
        Some(client) => tracing::info!("Generative assistant enabled ({})", client.model()),
        None => tracing::info!("Generative assistant disabled: no API key configured"),
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config, store, gemini);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Jal-Mitra Groundwater Advisory API v1"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
