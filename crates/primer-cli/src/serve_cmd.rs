use std::net::SocketAddr;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use primer_core::intake::{self, PlanRequest};
use primer_core::summary::SummaryService;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// The request was readable but carried no usable child record.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    /// The request body was not valid JSON. The caller gets a fixed
    /// generic message; detail stays in the server log.
    pub fn invalid_payload() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid request payload.".to_string(),
        }
    }

    /// The completion call failed. Same policy: generic message out,
    /// detail logged.
    pub fn generation_failed() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Failed to generate draft summary.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DraftPlanResponse {
    pub summary: String,
    pub normalized: PlanRequest,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(service: SummaryService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/draft-plan", post(draft_plan))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(service: SummaryService, bind: &str, port: u16) -> Result<()> {
    let mode = if service.is_generative() {
        "generative"
    } else {
        "offline"
    };
    let app = build_router(service);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("primer serve listening on http://{addr} ({mode} mode)");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("primer serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

const INDEX_HTML: &str = "<!DOCTYPE html>\
<html><head><title>primer</title></head><body>\
<h1>primer</h1>\
<p>Homeschool draft-plan service.</p>\
<p>POST <code>/api/draft-plan</code> with \
<code>{\"children\": [{\"name\", \"age\", \"grade\"}], \"philosophy\", \
\"location\", \"goals\"}</code> to receive a draft summary.</p>\
</body></html>";

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn draft_plan(
    State(service): State<SummaryService>,
    body: Bytes,
) -> Result<axum::response::Response, AppError> {
    // Parse the body by hand so malformed JSON maps to the fixed generic
    // message instead of the extractor's default rejection.
    let payload: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "draft-plan: malformed request body");
        AppError::invalid_payload()
    })?;

    let normalized =
        intake::normalize(&payload).map_err(|e| AppError::validation(e.to_string()))?;

    let summary = service.draft(&normalized).await.map_err(|e| {
        tracing::error!(error = %e, "draft-plan: completion call failed");
        AppError::generation_failed()
    })?;

    Ok(Json(DraftPlanResponse {
        summary,
        normalized,
    })
    .into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
