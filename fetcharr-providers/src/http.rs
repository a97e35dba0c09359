//! Shared HTTP plumbing for provider clients.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

/// Fixed timeout applied to every outbound provider call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Shared HTTP client for all provider requests (connection pooling).
/// Redirects are disabled to prevent SSRF via redirect to private IPs.
pub(crate) static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(REQUEST_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(10)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build shared provider HTTP client")
});

/// URL-encode a string for safe use in query parameters
pub(crate) fn url_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
