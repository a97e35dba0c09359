// Search handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use fetcharr_core::SearchResult;

use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "type", default)]
    pub media_type: String,
    #[serde(rename = "q", default)]
    pub query: String,
}

/// GET /api/search?type=movies&q=matrix
///
/// Always answers 200 with a JSON array; empty on short queries,
/// unknown media types and provider failures.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchResult>> {
    Json(state.search.search(&params.media_type, &params.query).await)
}
