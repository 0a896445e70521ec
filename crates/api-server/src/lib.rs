use application::ExerciseTrackerApp;
use axum::{
    routing::{get, post},
    Router,
};
use config::Config;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod dto;
pub mod error;
pub mod handlers;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<ExerciseTrackerApp>,
}

/// Build the HTTP router. Static assets are served from `public_dir`
/// under `/public`.
pub fn router(app: Arc<ExerciseTrackerApp>, public_dir: &str) -> Router {
    let state = AppState { app };

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/users/:id/exercises", post(handlers::add_exercise))
        .route("/api/users/:id/logs", get(handlers::get_logs))
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the store and serve the API until the process is terminated.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    info!("💾 Using database: {}", config.database_url);
    let app = Arc::new(ExerciseTrackerApp::new(&config.database_url)?);

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   GET  /                        - Landing page");
    info!("   POST /api/users               - Create user (form: username)");
    info!("   GET  /api/users               - List users");
    info!("   POST /api/users/:id/exercises - Add exercise (form: description, duration, date?)");
    info!("   GET  /api/users/:id/logs      - Exercise log (query: from?, to?, limit?)");

    axum::serve(listener, router(app, &config.public_dir)).await?;

    Ok(())
}
