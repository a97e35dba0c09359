//! Radarr HTTP API Types

use serde::Deserialize;

/// Entry from `/api/v3/qualityprofile`.
#[derive(Debug, Deserialize)]
pub struct QualityProfile {
    pub id: i64,
}

/// Entry from `/api/v3/rootfolder`.
#[derive(Debug, Deserialize)]
pub struct RootFolder {
    pub path: String,
}
