//! HTTP server mode for REST API access to the pipeline
//!
//! Every request carries the document text itself; the server keeps no
//! per-client state.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::GeneratorConfig;
use crate::editor;
use crate::error::{Error, Result};
use crate::overlay::SchemaModifications;
use crate::session::Session;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Generator settings used when a request does not send its own
    pub generator: GeneratorConfig,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Request body for infer/generate endpoints
#[derive(Debug, Deserialize)]
struct DocumentRequest {
    /// JSON document text
    json: String,
    /// Edits keyed by node id
    #[serde(default)]
    modifications: SchemaModifications,
    /// Generator settings (server defaults when absent)
    #[serde(default)]
    config: Option<GeneratorConfig>,
}

/// Request body for `/edit/add`
#[derive(Debug, Deserialize)]
struct AddRequest {
    json: String,
    path: String,
    key: String,
    #[serde(default = "empty_string_value")]
    value: Value,
}

/// Request body for `/edit/remove`
#[derive(Debug, Deserialize)]
struct RemoveRequest {
    json: String,
    path: String,
}

/// Request body for `/edit/update`
#[derive(Debug, Deserialize)]
struct UpdateRequest {
    json: String,
    path: String,
    value: Value,
}

fn empty_string_value() -> Value {
    Value::String(String::new())
}

/// Response body for edit endpoints
#[derive(Debug, Serialize)]
struct EditResponse {
    json: String,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router
pub fn app(config: ServerConfig) -> Router {
    let state = AppState { config };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/infer", post(infer))
        .route("/generate", post(generate))
        .route("/edit/add", post(edit_add))
        .route("/edit/remove", post(edit_remove))
        .route("/edit/update", post(edit_update))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = app(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {port}"))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

/// Effective schema tree for a document
async fn infer(Json(req): Json<DocumentRequest>) -> Response {
    let session = Session::new(req.json).with_modifications(req.modifications);

    match session.effective_tree() {
        Ok(tree) => (StatusCode::OK, Json(ApiResponse::success(tree))).into_response(),
        Err(e) => bad_request(&e),
    }
}

/// Every generator output for a document
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DocumentRequest>,
) -> Response {
    let config = req
        .config
        .unwrap_or_else(|| state.config.generator.clone());
    if let Err(e) = config.validate() {
        return bad_request(&e);
    }

    let session = Session::new(req.json).with_modifications(req.modifications);
    match session.render(&config) {
        Ok(artifacts) => (StatusCode::OK, Json(ApiResponse::success(artifacts))).into_response(),
        Err(e) => bad_request(&e),
    }
}

async fn edit_add(Json(req): Json<AddRequest>) -> Response {
    edited(editor::add_node(&req.json, &req.path, &req.key, req.value))
}

async fn edit_remove(Json(req): Json<RemoveRequest>) -> Response {
    edited(editor::remove_node(&req.json, &req.path))
}

async fn edit_update(Json(req): Json<UpdateRequest>) -> Response {
    edited(editor::update_node_value(&req.json, &req.path, req.value))
}

/// Edits are fail-soft, so they always succeed with some text
fn edited(json: String) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::success(EditResponse { json })),
    )
        .into_response()
}

fn bad_request(e: &Error) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(e.to_string())),
    )
        .into_response()
}
