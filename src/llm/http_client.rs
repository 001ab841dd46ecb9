use reqwest::Client;
use std::time::Duration;

/// Shared reqwest client for provider calls.
///
/// No request-level timeout; the remote service's own timeout governs
/// failure latency. Connect-level tuning only.
pub fn build_provider_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
