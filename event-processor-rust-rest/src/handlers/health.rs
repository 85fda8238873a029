use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::constants::{API_NAME, SERVICE_VERSION};
use crate::repository::HealthRepository;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInfo {
    pub database: ComponentHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub info: HealthInfo,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// Always answers 200; a failed ping is reported in the body.
async fn health_check(State(health): State<HealthRepository>) -> Json<HealthResponse> {
    let (status, database) = match health.ping().await {
        Ok(()) => (HealthStatus::Ok, ComponentStatus::Up),
        Err(e) => {
            tracing::warn!("{} Health check failed: {}", API_NAME, e);
            (HealthStatus::Error, ComponentStatus::Down)
        }
    };

    Json(HealthResponse {
        status,
        info: HealthInfo {
            database: ComponentHealth { status: database },
        },
        timestamp: Utc::now(),
        version: SERVICE_VERSION.to_string(),
    })
}
