use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client for completion calls
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Some(Duration::from_secs(90)))
                .tcp_nodelay(true)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
