use reqwest::Client;
use std::time::Duration;

/// Pooled HTTP client shared by the chat and image clients.
pub fn build_provider_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "HTTP client builder failed, using defaults");
            Client::new()
        })
}
