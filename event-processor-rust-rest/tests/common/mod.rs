#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use event_processor_rust::{
    app::{build_router, AppState},
    config::Config,
    repository::HealthRepository,
    service::{EventProcessingService, EventRouter},
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Health repository pointed at a port nothing listens on.
pub fn unreachable_database() -> HealthRepository {
    let mut config = Config::from_lookup(|_| None).expect("default config");
    config.database.host = "127.0.0.1".to_string();
    config.database.port = 1;
    config.database.health_timeout = Duration::from_millis(500);
    HealthRepository::connect_lazy(&config.database)
}

pub async fn spawn_server(router: EventRouter) -> SocketAddr {
    let state = AppState::new(EventProcessingService::new(router), unreachable_database());
    let app = build_router(state, false);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut retries = 0;
    while retries < 10 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        retries += 1;
    }

    addr
}

pub fn encode(payload: &Value) -> String {
    STANDARD.encode(payload.to_string())
}

pub fn envelope(data: &str) -> Value {
    json!({
        "message": {
            "data": data,
            "messageId": "m1",
            "publishTime": "2024-01-01T00:00:00Z"
        },
        "subscription": "sub1"
    })
}

pub fn envelope_for(payload: &Value) -> Value {
    envelope(&encode(payload))
}
