use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::converters;
use crate::error::LocustGenError;
use crate::models::{GenerationRequest, GenerationResponse};

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response for /health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: LocustGenError) -> ApiError {
    let status = match err {
        LocustGenError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

/// GET /health - Readiness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// POST /generate - Render a locustfile from a parsed OpenAPI document
pub async fn generate(
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let locustfile = converters::generate_locustfile(&request).map_err(|e| {
        tracing::warn!(error = %e, "Rejected generation request");
        error_response(e)
    })?;

    tracing::info!(
        client_type = %request.client_type,
        bytes = locustfile.len(),
        "Generated locustfile"
    );

    Ok(Json(GenerationResponse { locustfile }))
}
