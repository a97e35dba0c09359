// Request dispatch handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use fetcharr_core::{DispatchOutcome, ErrorKind, RequestItem};

use crate::server::AppState;

/// POST /api/request
///
/// Routes the posted item to its acquisition target. The outcome body
/// is returned verbatim; the status code mirrors its error kind so
/// plain HTTP clients can tell broker misuse from upstream trouble.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(item): Json<RequestItem>,
) -> (StatusCode, Json<DispatchOutcome>) {
    let outcome = state.dispatch.dispatch(&item).await;
    (status_for(&outcome), Json(outcome))
}

fn status_for(outcome: &DispatchOutcome) -> StatusCode {
    match outcome.error_kind {
        None => StatusCode::OK,
        Some(ErrorKind::Validation) => StatusCode::BAD_REQUEST,
        Some(ErrorKind::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
        Some(ErrorKind::UpstreamUnreachable | ErrorKind::UpstreamRejected) => {
            StatusCode::BAD_GATEWAY
        }
        Some(ErrorKind::ConfigurationUnresolvable) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
