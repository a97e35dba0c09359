//! Radarr HTTP Client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::types::{QualityProfile, RootFolder};
use crate::error::TargetError;
use crate::http::{expect_status, read_json, API_KEY_HEADER, SHARED_CLIENT};
use crate::resolve::{media_id_value, normalize_base_url, numeric_override, resolve_first};

/// Static configuration for Radarr. `quality_profile_id` and
/// `root_folder` are nullable intents: absence (or a non-numeric profile
/// id) means "resolve automatically at dispatch time".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarrSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub quality_profile_id: Option<String>,
    pub root_folder: Option<String>,
    /// Ask Radarr to search for the movie immediately after adding it.
    /// Defaults to true.
    pub search_on_add: Option<bool>,
}

impl RadarrSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.url, &self.api_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

/// Radarr movie-manager client (reuses the shared connection pool).
#[derive(Debug)]
pub struct RadarrClient {
    base_url: String,
    api_key: String,
    quality_profile_override: Option<i64>,
    root_folder_override: Option<String>,
    search_on_add: bool,
    client: Client,
}

impl RadarrClient {
    pub fn from_settings(settings: &RadarrSettings) -> Result<Self, TargetError> {
        if !settings.is_configured() {
            return Err(TargetError::NotConfigured { target: "radarr" });
        }
        Ok(Self {
            base_url: normalize_base_url(settings.url.as_deref().unwrap_or_default()),
            api_key: settings.api_key.clone().unwrap_or_default(),
            quality_profile_override: numeric_override(settings.quality_profile_id.as_deref()),
            root_folder_override: settings.root_folder.clone().filter(|path| !path.is_empty()),
            search_on_add: settings.search_on_add.unwrap_or(true),
            client: SHARED_CLIENT.clone(),
        })
    }

    /// Resolve quality profile and root folder, then add the movie,
    /// requesting an immediate search unless disabled. If resolution
    /// leaves any required field empty the submission aborts before the
    /// write.
    pub async fn submit(&self, tmdb_id: &str, title: &str) -> Result<(), TargetError> {
        let (quality_profile_id, root_folder_path) = self.resolve().await?;

        let url = format!("{}/api/v3/movie", self.base_url);
        let body = json!({
            "tmdbId": media_id_value(tmdb_id),
            "title": title,
            "qualityProfileId": quality_profile_id,
            "rootFolderPath": root_folder_path,
            "monitored": true,
            "addOptions": { "searchForMovie": self.search_on_add },
        });

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        expect_status(response, &[200, 201]).await
    }

    /// The two lookups have no ordering dependency; issue them
    /// concurrently and skip each one a static override covers. Resolved
    /// values are never cached across dispatches.
    async fn resolve(&self) -> Result<(i64, String), TargetError> {
        let quality = async {
            if let Some(id) = self.quality_profile_override {
                return Ok::<_, TargetError>(Some(id));
            }
            Ok(resolve_first(self.quality_profiles().await?).map(|profile| profile.id))
        };
        let folder = async {
            if let Some(path) = &self.root_folder_override {
                return Ok::<_, TargetError>(Some(path.clone()));
            }
            Ok(resolve_first(self.root_folders().await?).map(|folder| folder.path))
        };

        match tokio::try_join!(quality, folder)? {
            (Some(quality), Some(folder)) => Ok((quality, folder)),
            (quality, folder) => {
                let mut fields = Vec::new();
                if quality.is_none() {
                    fields.push("qualityProfileId");
                }
                if folder.is_none() {
                    fields.push("rootFolderPath");
                }
                Err(TargetError::Unresolvable { fields })
            }
        }
    }

    async fn quality_profiles(&self) -> Result<Vec<QualityProfile>, TargetError> {
        let url = format!("{}/api/v3/qualityprofile", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        read_json(response).await
    }

    async fn root_folders(&self) -> Result<Vec<RootFolder>, TargetError> {
        let url = format!("{}/api/v3/rootfolder", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        read_json(response).await
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(url: &str) -> RadarrSettings {
        RadarrSettings {
            url: Some(url.to_string()),
            api_key: Some("key".to_string()),
            ..RadarrSettings::default()
        }
    }

    #[test]
    fn test_from_settings_normalizes_base_url() {
        for url in ["http://host/api/v3", "http://host/api", "http://host"] {
            let client = RadarrClient::from_settings(&configured(url)).unwrap();
            assert_eq!(client.base_url(), "http://host");
        }
    }

    #[test]
    fn test_non_numeric_override_triggers_auto_resolution() {
        let mut settings = configured("http://host");
        settings.quality_profile_id = Some("hd-1080p".to_string());

        let client = RadarrClient::from_settings(&settings).unwrap();
        assert_eq!(client.quality_profile_override, None);
    }

    #[test]
    fn test_numeric_override_is_parsed() {
        let mut settings = configured("http://host");
        settings.quality_profile_id = Some("4".to_string());

        let client = RadarrClient::from_settings(&settings).unwrap();
        assert_eq!(client.quality_profile_override, Some(4));
    }

    #[test]
    fn test_search_on_add_defaults_to_true() {
        let client = RadarrClient::from_settings(&configured("http://host")).unwrap();
        assert!(client.search_on_add);

        let mut settings = configured("http://host");
        settings.search_on_add = Some(false);
        let client = RadarrClient::from_settings(&settings).unwrap();
        assert!(!client.search_on_add);
    }

    #[test]
    fn test_missing_api_key_short_circuits() {
        let settings = RadarrSettings {
            url: Some("http://host".to_string()),
            ..RadarrSettings::default()
        };
        let err = RadarrClient::from_settings(&settings).unwrap_err();
        assert!(matches!(err, TargetError::NotConfigured { target: "radarr" }));
    }
}
