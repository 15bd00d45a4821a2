//! AgriVoice - Backend Server
//!
//! A consolidated service for farmer-facing water conservation assistance:
//! voice/text chat backed by hosted AI models, irrigation planning from
//! live weather data, and water-conservation practice analysis.

use axum::{routing::get, Router};
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
mod routes;
mod services;

pub use config::Config;

use external::{ModelSet, PlatformClient, WeatherClient};
use services::{Assistant, PracticeClassifier};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub models: ModelSet,
    pub assistant: Arc<Assistant>,
    pub classifier: PracticeClassifier,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrivoice_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AgriVoice Server");
    tracing::info!("Environment: {}", config.environment);

    // Weather and geocoding client
    let weather = WeatherClient::new(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
        config.weather.geocoding_endpoint.clone(),
    );

    // Connect the hosted models; all four are verified concurrently and
    // joined before the server starts serving traffic
    tracing::info!("Connecting to model platform...");
    let platform = PlatformClient::new(
        config.platform.api_endpoint.clone(),
        config.platform.api_key.clone(),
    )?;
    let models = ModelSet::connect(platform, &config.platform).await?;
    tracing::info!("Model platform connection established");

    let assistant = Arc::new(Assistant::new(
        models.clone(),
        config.assistant.memory_window,
    ));
    let classifier = PracticeClassifier::new(config.classifier.api_endpoint.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        weather,
        models,
        assistant,
        classifier,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
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
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriVoice Assistant API v1.0"
}
