use axum::{Json, http::StatusCode, response::IntoResponse};

/// Liveness probe. Never touches the provider.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
