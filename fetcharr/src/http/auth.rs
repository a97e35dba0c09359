// Login handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http::error::{AppError, AppResult};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
    pub user_id: String,
}

/// POST /api/login
///
/// Proxies the credentials to Jellyfin and returns its access token.
/// The broker holds no user store of its own.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if body.username.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::bad_request("Username and password are required"));
    }

    let session = state.jellyfin.login(&body.username, &body.password).await?;
    info!(user = %session.user_name, "login succeeded");

    Ok(Json(LoginResponse {
        token: session.access_token,
        user: session.user_name,
        user_id: session.user_id,
    }))
}
