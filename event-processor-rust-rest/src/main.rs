use anyhow::Context;
use event_processor_rust::{
    app::{self, AppState},
    config::{Config, LogFormat},
    constants::API_NAME,
    repository::HealthRepository,
    service::{EventProcessingService, EventRouter},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config);

    tracing::info!("{} Starting Event Processor on port {}", API_NAME, config.server_port);

    let router = EventRouter::with_default_handlers();
    tracing::info!("{} Registered event handlers: {:?}", API_NAME, router);

    let state = AppState::new(
        EventProcessingService::new(router),
        HealthRepository::connect_lazy(&config.database),
    );

    app::serve(&config, state).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
