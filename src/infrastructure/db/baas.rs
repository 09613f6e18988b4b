use std::{sync::Arc, time::Duration};

use anyhow::Context;
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::{
    repositories::{data_store::DataStore, memory_store::MemoryStore, rest_store::RestStore},
    settings::AppConfig,
};

/// Builds the data store the service runs against.
///
/// With a backend URL configured the endpoint is probed with exponential
/// backoff before the store is handed out; without one, an in-memory
/// store is used.
pub async fn create_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DataStore>> {
    let Some(raw_url) = config.baas_url.as_deref() else {
        warn!("No BaaS URL configured, records are kept in memory only.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let baas_url = Url::parse(raw_url).context("Invalid BaaS URL")?;
    let client = Client::builder()
        .timeout(config.request_timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let store = RestStore::new(
        client,
        &baas_url,
        &config.baas_api_key,
        config.baas_access_token.as_deref(),
    )
    .context("Invalid BaaS REST endpoint")?;

    let max_retries = 5;
    let mut retry_count = 0;
    let mut wait_seconds = 2;

    loop {
        match store.ping().await {
            Ok(status) => {
                info!("BaaS endpoint {} reachable (status {}).", store.rest_url(), status);
                return Ok(Arc::new(store));
            }
            Err(e) if retry_count < max_retries => {
                retry_count += 1;
                info!(
                    "Failed to reach BaaS (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, max_retries, e, wait_seconds);

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => return Err(e).context("BaaS endpoint unreachable"),
        }
    }
}
