//! Overseerr HTTP Client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::TargetError;
use crate::http::{expect_status, API_KEY_HEADER, SHARED_CLIENT};
use crate::resolve::media_id_value;

/// Static configuration for the Overseerr gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverseerrSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

impl OverseerrSettings {
    /// Both URL and API key present and non-empty. The dispatch resolver
    /// uses this to prefer the gateway over the direct managers.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.url, &self.api_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

/// Which Overseerr media type a request maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverseerrMediaType {
    Movie,
    Tv,
}

impl OverseerrMediaType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

/// Overseerr request-gateway client (reuses the shared connection pool).
#[derive(Debug)]
pub struct OverseerrClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OverseerrClient {
    pub fn from_settings(settings: &OverseerrSettings) -> Result<Self, TargetError> {
        if !settings.is_configured() {
            return Err(TargetError::NotConfigured {
                target: "overseerr",
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

    /// Submit one request to the approval gateway. TV requests ask for
    /// all seasons; the id is forwarded verbatim as the media id.
    pub async fn submit(
        &self,
        media_type: OverseerrMediaType,
        media_id: &str,
    ) -> Result<(), TargetError> {
        let url = format!("{}/api/v1/request", self.base_url);

        let mut body = json!({
            "mediaType": media_type.as_str(),
            "mediaId": media_id_value(media_id),
        });
        if media_type == OverseerrMediaType::Tv {
            body["seasons"] = json!("all");
        }

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        expect_status(response, &[200, 201]).await
    }
}
