//! Shared HTTP plumbing for acquisition target clients.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::TargetError;

/// Fixed timeout applied to every outbound target call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// API key header used by the *arr family of services.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Shared HTTP client for all target requests (connection pooling).
/// Redirects are disabled to prevent SSRF via redirect to private IPs.
pub(crate) static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(REQUEST_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(10)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build shared target HTTP client")
});

/// URL-encode a string for safe use in query parameters
pub(crate) fn url_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Deserialize a lookup response, rejecting non-success statuses with the
/// upstream's raw body as detail.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TargetError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TargetError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json()
        .await
        .map_err(|e| TargetError::Parse(e.to_string()))
}

/// Gate a write response on an explicit allow-list of status codes.
/// Anything else is a rejection carrying the upstream's raw body.
pub(crate) async fn expect_status(
    response: reqwest::Response,
    allowed: &[u16],
) -> Result<(), TargetError> {
    let status = response.status().as_u16();
    if allowed.contains(&status) {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(TargetError::Rejected { status, body })
}
