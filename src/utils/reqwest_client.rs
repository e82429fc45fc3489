use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: Lazy<Arc<Client>> = Lazy::new(|| {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(0)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("[reqwest_client] Unable to build client with timeout, using defaults: {:?}", e);
            Client::new()
        });
    Arc::new(client)
});

pub fn get_client() -> Arc<Client> {
    Arc::clone(&CLIENT)
}
