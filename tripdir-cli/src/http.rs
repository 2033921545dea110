//! HTTP tile fetching.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use tripdir_core::error::{TripDirError, TripDirResult};
use tripdir_core::tiles::fetch::TileFetcher;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetches tiles with plain anonymous GETs. Tile servers want a real
/// user agent, so we send the crate name and version.
pub struct HttpTileFetcher {
    client: reqwest::Client,
}

impl HttpTileFetcher {
    pub fn new() -> TripDirResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tripdir/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| TripDirError::Fetch(e.to_string()))?;
        Ok(HttpTileFetcher { client })
    }
}

impl TileFetcher for HttpTileFetcher {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> TripDirResult<Vec<u8>> {
        // The token also aborts the in-flight request, not just the loop
        // between tiles.
        tokio::select! {
            _ = cancel.cancelled() => Err(TripDirError::Fetch("cancelled".into())),
            result = self.client.get(url).send() => {
                let response = result.map_err(|e| TripDirError::Fetch(e.to_string()))?;
                if !response.status().is_success() {
                    return Err(TripDirError::Fetch(format!("HTTP {}", response.status())));
                }
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| TripDirError::Fetch(e.to_string()))?;
                Ok(bytes.to_vec())
            }
        }
    }
}
