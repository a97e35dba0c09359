//! Sonarr HTTP Client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::types::{LanguageProfile, QualityProfile, RootFolder};
use crate::error::TargetError;
use crate::http::{expect_status, read_json, API_KEY_HEADER, SHARED_CLIENT};
use crate::resolve::{media_id_value, normalize_base_url, numeric_override, resolve_first};

/// Static configuration for Sonarr. The three optional fields are
/// nullable intents: absence (or a non-numeric profile id) means
/// "resolve automatically at dispatch time".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SonarrSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub quality_profile_id: Option<String>,
    pub language_profile_id: Option<String>,
    pub root_folder: Option<String>,
    /// Ask Sonarr to search for missing episodes immediately after
    /// adding the series. Defaults to true.
    pub search_on_add: Option<bool>,
}

impl SonarrSettings {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        matches!(
            (&self.url, &self.api_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }
}

/// Fully resolved profile/folder set for one series add. Ephemeral:
/// recomputed every dispatch, never cached.
#[derive(Debug)]
struct ResolvedProfiles {
    quality_profile_id: i64,
    language_profile_id: i64,
    root_folder_path: String,
}

/// Sonarr show-manager client (reuses the shared connection pool).
#[derive(Debug)]
pub struct SonarrClient {
    base_url: String,
    api_key: String,
    quality_profile_override: Option<i64>,
    language_profile_override: Option<i64>,
    root_folder_override: Option<String>,
    search_on_add: bool,
    client: Client,
}

impl SonarrClient {
    pub fn from_settings(settings: &SonarrSettings) -> Result<Self, TargetError> {
        if !settings.is_configured() {
            return Err(TargetError::NotConfigured { target: "sonarr" });
        }
        Ok(Self {
            base_url: normalize_base_url(settings.url.as_deref().unwrap_or_default()),
            api_key: settings.api_key.clone().unwrap_or_default(),
            quality_profile_override: numeric_override(settings.quality_profile_id.as_deref()),
            language_profile_override: numeric_override(settings.language_profile_id.as_deref()),
            root_folder_override: settings.root_folder.clone().filter(|path| !path.is_empty()),
            search_on_add: settings.search_on_add.unwrap_or(true),
            client: SHARED_CLIENT.clone(),
        })
    }

    /// Resolve profiles and folder, then add the series monitored,
    /// searching for missing episodes unless disabled. If resolution
    /// leaves any required field empty the submission aborts before the
    /// write.
    pub async fn submit(&self, series_id: &str, title: &str) -> Result<(), TargetError> {
        let resolved = self.resolve().await?;

        let url = format!("{}/api/v3/series", self.base_url);
        let body = json!({
            "tvdbId": media_id_value(series_id),
            "title": title,
            "qualityProfileId": resolved.quality_profile_id,
            "languageProfileId": resolved.language_profile_id,
            "rootFolderPath": resolved.root_folder_path,
            "monitored": true,
            "addOptions": { "searchForMissingEpisodes": self.search_on_add },
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

    /// The three lookups have no ordering dependency; issue them
    /// concurrently and skip each one a static override covers.
    async fn resolve(&self) -> Result<ResolvedProfiles, TargetError> {
        let quality = async {
            if let Some(id) = self.quality_profile_override {
                return Ok::<_, TargetError>(Some(id));
            }
            Ok(resolve_first(self.quality_profiles().await?).map(|profile| profile.id))
        };
        let language = async {
            if let Some(id) = self.language_profile_override {
                return Ok::<_, TargetError>(Some(id));
            }
            Ok(resolve_first(self.language_profiles().await?).map(|profile| profile.id))
        };
        let folder = async {
            if let Some(path) = &self.root_folder_override {
                return Ok::<_, TargetError>(Some(path.clone()));
            }
            Ok(resolve_first(self.root_folders().await?).map(|folder| folder.path))
        };

        match tokio::try_join!(quality, language, folder)? {
            (Some(quality), Some(language), Some(folder)) => Ok(ResolvedProfiles {
                quality_profile_id: quality,
                language_profile_id: language,
                root_folder_path: folder,
            }),
            (quality, language, folder) => {
                let mut fields = Vec::new();
                if quality.is_none() {
                    fields.push("qualityProfileId");
                }
                if language.is_none() {
                    fields.push("languageProfileId");
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

    async fn language_profiles(&self) -> Result<Vec<LanguageProfile>, TargetError> {
        let url = format!("{}/api/v3/languageprofile", self.base_url);
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
