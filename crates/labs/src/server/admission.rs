use crate::gate::AdmissionGate;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Seconds a rejected client is told to wait before retrying.
pub const RETRY_AFTER_SECS: u64 = 30;

/// The gate was full when the request arrived.
///
/// Answered with `503 Service Unavailable` and a `Retry-After` header. Distinct
/// from a pipeline error: the request never reached the pipeline.
#[derive(Debug)]
pub struct AdmissionRejected;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RejectionBody {
    error: &'static str,
    message: &'static str,
    retry_after: String,
}

impl IntoResponse for AdmissionRejected {
    fn into_response(self) -> Response {
        let body = RejectionBody {
            error: "Service Unavailable",
            message: "Maximum concurrent requests limit reached",
            retry_after: format!("{RETRY_AFTER_SECS} seconds"),
        };

        (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, RETRY_AFTER_SECS.to_string())],
            Json(body),
        )
            .into_response()
    }
}

/// Middleware that runs the inner service only while holding a gate slot.
///
/// The permit lives until the inner response is produced, including when the
/// handler fails or the future is dropped.
pub async fn admit(
    State(gate): State<Arc<AdmissionGate>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(_permit) = gate.try_enter() else {
        log::warn!(
            "Rejected {} {}: all {} slots in use",
            request.method(),
            request.uri().path(),
            gate.capacity()
        );
        return AdmissionRejected.into_response();
    };

    log::debug!(
        "Admitted {} {} ({}/{})",
        request.method(),
        request.uri().path(),
        gate.in_flight(),
        gate.capacity()
    );

    next.run(request).await
}
