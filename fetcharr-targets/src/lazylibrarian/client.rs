//! LazyLibrarian HTTP Client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::TargetError;
use crate::http::{expect_status, url_encode, SHARED_CLIENT};

/// Static configuration for LazyLibrarian.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyLibrarianSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

impl LazyLibrarianSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.url, &self.api_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

/// LazyLibrarian book-manager client (reuses the shared connection pool).
#[derive(Debug)]
pub struct LazyLibrarianClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl LazyLibrarianClient {
    pub fn from_settings(settings: &LazyLibrarianSettings) -> Result<Self, TargetError> {
        if !settings.is_configured() {
            return Err(TargetError::NotConfigured {
                target: "lazylibrarian",
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

    /// Invoke the `addBook` command with the item id and title as query
    /// parameters. Only an exact 200 is success.
    pub async fn submit(&self, book_id: &str, title: &str) -> Result<(), TargetError> {
        let url = format!(
            "{}/api?cmd=addBook&apikey={}&id={}&name={}",
            self.base_url,
            url_encode(&self.api_key),
            url_encode(book_id),
            url_encode(title),
        );

        let response = self.client.get(&url).send().await?;
        expect_status(response, &[200]).await
    }
}
