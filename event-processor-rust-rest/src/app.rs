//! Router assembly and server lifecycle.

use std::net::SocketAddr;

use axum::{extract::FromRef, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::constants::API_NAME;
use crate::handlers::{event, health};
use crate::repository::HealthRepository;
use crate::service::EventProcessingService;

/// Shared state handed to every request. Both parts are cheap to clone and
/// carry nothing that changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub service: EventProcessingService,
    pub health: HealthRepository,
}

impl AppState {
    pub fn new(service: EventProcessingService, health: HealthRepository) -> Self {
        Self { service, health }
    }
}

impl FromRef<AppState> for EventProcessingService {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

impl FromRef<AppState> for HealthRepository {
    fn from_ref(state: &AppState) -> Self {
        state.health.clone()
    }
}

pub fn build_router(state: AppState, cors_enabled: bool) -> Router {
    let router = Router::new()
        .merge(event::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http());

    let router = if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

/// Binds the listener and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state, config.cors_enabled);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("{} Event Processor is running on: {}", API_NAME, listener.local_addr()?);
    tracing::info!("{} Environment: {}", API_NAME, config.environment);
    tracing::info!("{} Ready to receive Pub/Sub messages at POST /events", API_NAME);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server stopped", API_NAME);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("{} Failed to install Ctrl+C handler: {}", API_NAME, e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("{} Failed to install SIGTERM handler: {}", API_NAME, e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("{} Received Ctrl+C, shutting down", API_NAME),
        () = terminate => tracing::info!("{} Received SIGTERM, shutting down", API_NAME),
    }
}
