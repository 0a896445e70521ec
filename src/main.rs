use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("exercise_tracker=debug,api_server=debug,domain=debug,infrastructure=info,tower_http=debug")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚀 Starting Exercise Tracker API Server");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("🌐 API server will bind to: {}", config.api_address());

    api_server::serve(&config).await
}
