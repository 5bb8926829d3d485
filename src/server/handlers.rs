use super::types::{GenerateRequest, ListDescriptor, ResponseEnvelope};
use crate::{Error, Result, doctors::DoctorId, photos::PhotoResolver};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::{any::Any, sync::Arc};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<PhotoResolver>,
}

pub async fn generate_photos(
    State(state): State<AppState>,
    body: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    match handle_generate(&state.resolver, body).await {
        Ok((status, envelope)) => {
            info!(
                %request_id,
                "Photo request completed with status {}: {}", status, envelope.message
            );
            (status, Json(envelope)).into_response()
        }
        Err(e) if e.is_client_error() => {
            warn!(%request_id, "Rejected photo request: {}", e);
            let envelope = match e {
                Error::UnknownDoctor { .. } => ResponseEnvelope::unknown_doctor(),
                _ => ResponseEnvelope::invalid_body(),
            };
            (StatusCode::BAD_REQUEST, Json(envelope)).into_response()
        }
        Err(e) => {
            error!(%request_id, "Failed to process photo request: {}", e);
            internal_error_response()
        }
    }
}

pub async fn list_photos() -> Json<ListDescriptor> {
    Json(ListDescriptor::current())
}

pub async fn handle_generate(
    resolver: &PhotoResolver,
    body: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseEnvelope)> {
    // Checked before the body so every caller gets the fallbacks.
    if !resolver.is_configured() {
        return Ok((StatusCode::OK, ResponseEnvelope::not_configured()));
    }

    let Json(request) = body.map_err(|e| Error::invalid_request(e.body_text()))?;

    if request.generate_all == Some(true) {
        let photos = resolver.resolve_all().await;
        return Ok((StatusCode::OK, ResponseEnvelope::batch(photos)));
    }

    let doctor_id = match request.doctor_id.as_deref().map(str::trim) {
        Some(doctor_id) if !doctor_id.is_empty() => doctor_id,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                ResponseEnvelope::missing_parameters(),
            ));
        }
    };

    let id: DoctorId = doctor_id.parse()?;
    let outcome = resolver.resolve(id.as_str()).await;

    Ok((
        StatusCode::OK,
        ResponseEnvelope::photo(id, outcome.url().map(str::to_string)),
    ))
}

/// Renders a panic raised anywhere below the router as an internal error.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!("Request handler panicked: {}", detail);
    internal_error_response()
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ResponseEnvelope::internal_error()),
    )
        .into_response()
}
