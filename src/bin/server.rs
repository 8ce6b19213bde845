//! Ply Homogenization HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use ply_homogenization::api::{self, HomogenizeRequest};

const DEFAULT_PORT: u16 = 8086;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn homogenize(Json(request): Json<HomogenizeRequest>) -> impl IntoResponse {
    let response = api::homogenize(request);
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

fn port_from_env() -> u16 {
    std::env::var("PLY_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .filter(|&p| p > 0)
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/homogenize", post(homogenize))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port_from_env()));
    log::info!("Ply homogenization server listening on http://{}", addr);
    println!("Ply Homogenization Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Homogenize:   POST /api/v1/homogenize");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
