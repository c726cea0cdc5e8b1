//! Game Review Backend
//!
//! A REST backend exposing game reviews and per-user watchlists over MongoDB.

mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Game Review Backend");
    tracing::info!("Database name: {}", config.db_name);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect to MongoDB and ensure indexes
    let database = db::init_database(&config).await?;
    let repo = Arc::new(Repository::new(&database));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Reviews
        .route("/reviews", get(api::list_reviews))
        .route("/reviews", post(api::create_review))
        .route("/reviews/{id}", get(api::get_review))
        .route("/reviews/{id}", put(api::update_review))
        .route("/reviews/{id}", delete(api::delete_review))
        .route("/top-rated", get(api::top_rated))
        .route("/myreviews", get(api::my_reviews))
        // Watchlist. GET takes an owner email, DELETE an entry id; axum
        // requires a single capture name for both, so the handlers name it.
        .route("/watchlist", post(api::add_watchlist_entry))
        .route("/watchlist/{key}", get(api::list_watchlist))
        .route("/watchlist/{key}", delete(api::delete_watchlist_entry))
        // Liveness check
        .route("/", get(liveness))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolves when the process receives a shutdown signal.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}

/// Liveness check endpoint.
async fn liveness() -> &'static str {
    "Game review server is running"
}
