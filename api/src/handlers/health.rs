// Health check endpoint handler implementation

use axum::Json;

use crate::models::HealthCheckResponse;

/// Handler for GET /health - reports that the process is up without touching the database
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
