//! Welcome page and environment/build metadata handlers

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// API version exposed by the metadata endpoints
const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Welcome page listing the available endpoints
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Bienvenue sur l'API CI/CD Demo",
        "version": API_VERSION,
        "endpoints": {
            "GET /": "Cette page",
            "GET /health": "Health check",
            "POST /calculate": "Calculatrice (body: a, b, operation)",
            "GET /info": "Informations d'environnement",
            "GET /version": "Version et build",
        },
    }))
}

/// Environment information response
#[derive(Serialize)]
pub struct InfoResponse {
    pub environment: String,
    pub rust_version: &'static str,
    pub api_version: &'static str,
    pub deployed_at: String,
}

/// Runtime environment details
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        environment: state.environment.clone(),
        rust_version: env!("CARGO_PKG_RUST_VERSION"),
        api_version: API_VERSION,
        deployed_at: state.deployed_at.to_rfc3339(),
    })
}

/// Build metadata response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
    pub git_sha: String,
    pub build_date: String,
    pub environment: String,
}

/// Build and version metadata, stamped by the deployment pipeline
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION,
        git_sha: state.git_sha.clone(),
        build_date: state.build_date.clone(),
        environment: state.environment.clone(),
    })
}
