use super::AppState;
use crate::process::process_data;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use labs_core::{ProcessError, ResultRecord, SortAlgorithm};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LabsQuery {
    pub input: String,
    #[serde(rename = "isQuickSort", alias = "is_quick_sort", default)]
    pub is_quick_sort: bool,
}

/// A pipeline error rendered as `400 Bad Request`.
#[derive(Debug)]
pub struct PipelineRejection(pub ProcessError);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl IntoResponse for PipelineRejection {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
            kind: self.0.kind(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `GET /labs?input=...&isQuickSort=...`
pub async fn labs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LabsQuery>,
) -> Result<Json<ResultRecord>, PipelineRejection> {
    let algorithm = SortAlgorithm::from_quick_sort_flag(query.is_quick_sort);

    let record = process_data(&query.input, algorithm, &state.blacklist, &state.random)
        .await
        .map_err(|e| {
            log::debug!("Rejected input {:?}: {e}", query.input);
            PipelineRejection(e)
        })?;

    Ok(Json(record))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    status: &'static str,
    in_flight: usize,
    capacity: usize,
}

/// `GET /health`, outside the admission gate.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        in_flight: state.gate.in_flight(),
        capacity: state.gate.capacity(),
    })
}
