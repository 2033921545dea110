//! Tile fetching capability.
//!
//! The actual HTTP client lives in tripdir-cli; the core only sees this
//! trait, which keeps the orchestrator testable without a network.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::TripDirResult;

/// Fetches one tile image. Implementations must honor the cancellation
/// token for in-flight requests where the transport allows it, and should
/// send plain anonymous requests (no cookies, no auth).
pub trait TileFetcher {
    fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = TripDirResult<Vec<u8>>>;
}
