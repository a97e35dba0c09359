//! Listenarr HTTP Client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::TargetError;
use crate::http::{expect_status, API_KEY_HEADER, SHARED_CLIENT};

/// Static configuration for Listenarr.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenarrSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

impl ListenarrSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.url, &self.api_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

/// Listenarr audiobook-manager client (reuses the shared connection pool).
#[derive(Debug)]
pub struct ListenarrClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ListenarrClient {
    pub fn from_settings(settings: &ListenarrSettings) -> Result<Self, TargetError> {
        if !settings.is_configured() {
            return Err(TargetError::NotConfigured {
                target: "listenarr",
            });
        }
        Ok(Self {
            base_url: settings
                .url
                .as_deref()
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            api_key: settings.api_key.clone().unwrap_or_default(),
            client: SHARED_CLIENT.clone(),
        })
    }

    /// Post one wanted item. The foreign id is forwarded verbatim.
    pub async fn submit(&self, foreign_id: &str, title: &str) -> Result<(), TargetError> {
        let url = format!("{}/api/v1/wanted", self.base_url);
        let body = json!({
            "foreignId": foreign_id,
            "title": title,
        });

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        expect_status(response, &[200, 201, 202]).await
    }
}
