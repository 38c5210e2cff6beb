pub mod routes;

use crate::error::{ApiError, ApiResult};
use crate::AppData;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use card::{render_document, validate, NormalizedRoster};
use log::{error, warn};
use std::sync::Arc;

pub fn pdf_routes() -> Router<AppData> {
    routes::routes()
}

/// Generates a match card PDF from the posted match data. Validation
/// failures never touch the rendering engine; everything after
/// validation collapses to the generic internal failure.
pub async fn pdf_action(
    State(state): State<AppData>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let raw = serde_json::from_slice(&body).map_err(|e| {
        warn!("match card payload is not JSON: {}", e);
        ApiError::InvalidInput
    })?;

    let request = validate(raw).map_err(|e| {
        warn!("rejected match card payload: {}", e);
        ApiError::InvalidInput
    })?;

    let roster = NormalizedRoster::from_entries(&request.team_players);
    let document = render_document(&request, &roster).map_err(|e| {
        error!("match card template failed to render: {}", e);
        ApiError::Internal
    })?;

    // The engine work is blocking; running it on the blocking pool
    // also lets teardown finish even if the client hangs up mid-render.
    let pipeline = Arc::clone(&state.pipeline);
    let render = tokio::task::spawn_blocking(move || pipeline.render_document(&document));

    let pdf = match tokio::time::timeout(state.render_timeout, render).await {
        Err(_) => {
            error!("PDF render timed out after {:?}", state.render_timeout);
            return Err(ApiError::Internal);
        }
        Ok(Err(e)) => {
            error!("PDF render task aborted: {}", e);
            return Err(ApiError::Internal);
        }
        Ok(Ok(Err(e))) => {
            error!("PDF pipeline failed: {}", e);
            return Err(ApiError::Internal);
        }
        Ok(Ok(Ok(bytes))) => bytes,
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        pdf,
    ))
}
