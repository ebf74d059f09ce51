//! HTTP API consumed by the browser page and the `submit` command.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use crate::core::service::EkmanService;
use crate::domain::model::{CalculationRequest, CalculationResponse, ParameterRanges};
use crate::render::page::index_page;
use crate::utils::error::{ErrorCategory, EkmanError};

pub use axum;

#[cfg(test)]
mod tests;

pub type ExtractState = State<Arc<EkmanService>>;

pub fn route(service: EkmanService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate_ekman", post(calculate_ekman))
        .route("/get_parameters", get(get_parameters))
        .with_state(Arc::new(service))
}

/// Serves until the listener fails.
pub async fn serve(listener: TcpListener, service: EkmanService) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🌊 Ekman transport server listening on http://{}", addr);
    }
    axum::serve(listener, route(service).into_make_service()).await
}

async fn index(State(service): ExtractState) -> Html<String> {
    Html(index_page(service.language()))
}

async fn calculate_ekman(
    State(service): ExtractState,
    Json(request): Json<CalculationRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    tracing::debug!("calculate_ekman request: {:?}", request);
    Ok(Json(service.respond(&request)?))
}

async fn get_parameters(State(service): ExtractState) -> Json<ParameterRanges> {
    Json(service.ranges().clone())
}

/// Error body: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub EkmanError);

impl From<EkmanError> for ApiError {
    fn from(e: EkmanError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.category() {
            ErrorCategory::Input => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        } else {
            tracing::warn!("rejected request: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
