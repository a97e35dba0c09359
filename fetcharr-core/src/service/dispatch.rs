//! Request dispatch routing

use tracing::{info, warn};

use fetcharr_providers::models::MediaType;
use fetcharr_targets::{
    LazyLibrarianClient, ListenarrClient, OverseerrClient, OverseerrMediaType, RadarrClient,
    SonarrClient, TargetError,
};

use crate::config::Config;
use crate::models::{DispatchOutcome, RequestItem, Target};

/// Routes an approved request to the acquisition system responsible for
/// its media type. Movies and TV prefer the Overseerr gateway when it is
/// configured and fall back to the direct managers otherwise; books and
/// audiobooks always go to their single manager.
///
/// Clients are built per dispatch from the stored settings, so resolved
/// profiles and folders are never cached across requests.
pub struct DispatchService {
    config: Config,
}

impl DispatchService {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Route one request. Validation failures (unknown type, missing id)
    /// never touch the network.
    pub async fn dispatch(&self, item: &RequestItem) -> DispatchOutcome {
        if item.id.trim().is_empty() {
            return DispatchOutcome::validation("request is missing an id");
        }

        let Some(media_type) = MediaType::parse(&item.media_type) else {
            return DispatchOutcome::validation(format!(
                "unsupported media type: {}",
                item.media_type
            ));
        };

        let (target, result) = match media_type {
            MediaType::Movies => {
                if self.config.overseerr.is_configured() {
                    (
                        Target::Overseerr,
                        self.via_overseerr(OverseerrMediaType::Movie, item).await,
                    )
                } else {
                    (Target::Radarr, self.via_radarr(item).await)
                }
            }
            MediaType::Tv => {
                if self.config.overseerr.is_configured() {
                    (
                        Target::Overseerr,
                        self.via_overseerr(OverseerrMediaType::Tv, item).await,
                    )
                } else {
                    (Target::Sonarr, self.via_sonarr(item).await)
                }
            }
            MediaType::Books => (Target::Lazylibrarian, self.via_lazylibrarian(item).await),
            MediaType::Audiobooks => (Target::Listenarr, self.via_listenarr(item).await),
        };

        match result {
            Ok(()) => {
                info!(target = ?target, id = %item.id, title = %item.title, "request dispatched");
                DispatchOutcome::ok(target)
            }
            Err(e) => {
                warn!(target = ?target, id = %item.id, error = %e, "dispatch failed");
                DispatchOutcome::failed(target, &e)
            }
        }
    }

    async fn via_overseerr(
        &self,
        media_type: OverseerrMediaType,
        item: &RequestItem,
    ) -> Result<(), TargetError> {
        OverseerrClient::from_settings(&self.config.overseerr)?
            .submit(media_type, &item.id)
            .await
    }

    async fn via_radarr(&self, item: &RequestItem) -> Result<(), TargetError> {
        RadarrClient::from_settings(&self.config.radarr)?
            .submit(&item.id, &item.title)
            .await
    }

    async fn via_sonarr(&self, item: &RequestItem) -> Result<(), TargetError> {
        SonarrClient::from_settings(&self.config.sonarr)?
            .submit(&item.id, &item.title)
            .await
    }

    async fn via_lazylibrarian(&self, item: &RequestItem) -> Result<(), TargetError> {
        LazyLibrarianClient::from_settings(&self.config.lazylibrarian)?
            .submit(&item.id, &item.title)
            .await
    }

    async fn via_listenarr(&self, item: &RequestItem) -> Result<(), TargetError> {
        ListenarrClient::from_settings(&self.config.listenarr)?
            .submit(&item.id, &item.title)
            .await
    }
}
