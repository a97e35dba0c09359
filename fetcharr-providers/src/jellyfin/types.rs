//! Jellyfin HTTP API Types

use serde::Deserialize;

/// Response from `/Users/AuthenticateByName`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
    #[serde(rename = "User", default)]
    pub user: AuthUser,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// Normalized login outcome handed to the HTTP layer.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub user_name: String,
}
