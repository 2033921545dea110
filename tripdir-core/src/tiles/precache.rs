//! Sequential tile pre-cache orchestration.
//!
//! Tiles are fetched one at a time on purpose: it bounds server and
//! storage load, and it keeps progress counts exact and monotonic with no
//! out-of-order completions to reconcile.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::TileServerConfig;
use super::cache::{AVERAGE_TILE_BYTES, TileCache};
use super::fetch::TileFetcher;
use crate::geo::TileCoordinates;

/// A short pause is inserted after every `THROTTLE_EVERY` tiles to avoid
/// bursting the tile server.
const THROTTLE_EVERY: usize = 10;
const THROTTLE_PAUSE: Duration = Duration::from_millis(50);

/// Terminal summary of one pre-cache run. Never mutated after the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreCacheResult {
    pub cached: usize,
    pub failed: usize,
    pub total: usize,
    pub cancelled: bool,
    pub estimated_bytes: u64,
}

impl PreCacheResult {
    /// The all-zero result used when the cache could not be opened at
    /// all. A zero-total result means "caching unsupported here", not an
    /// error.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Fetch and store `tiles` one at a time.
///
/// - already-cached URLs count as cached without a network request, so
///   re-running over the same area is cheap
/// - individual fetch or store failures are tallied, never propagated
/// - the cancellation token is checked before every tile; once set, the
///   run stops with a consistent partial result and `cancelled: true`
/// - `on_progress` is invoked after every tile with `(done, total)`
///
/// Pass `None` for the cache when opening it failed: the run degrades to
/// the all-zero unavailable result instead of erroring.
pub async fn pre_cache_tiles<C, F, P>(
    cache: Option<&C>,
    fetcher: &F,
    server: &TileServerConfig,
    tiles: &[TileCoordinates],
    cancel: &CancellationToken,
    mut on_progress: P,
) -> PreCacheResult
where
    C: TileCache,
    F: TileFetcher,
    P: FnMut(usize, usize),
{
    let Some(cache) = cache else {
        return PreCacheResult::unavailable();
    };

    let total = tiles.len();
    let mut cached = 0usize;
    let mut failed = 0usize;

    for (i, tile) in tiles.iter().enumerate() {
        if cancel.is_cancelled() {
            return PreCacheResult {
                cached,
                failed,
                total,
                cancelled: true,
                estimated_bytes: cached as u64 * AVERAGE_TILE_BYTES,
            };
        }

        let url = server.tile_url(tile);

        if cache.contains(&url).unwrap_or(false) {
            cached += 1;
        } else {
            match fetcher.fetch(&url, cancel).await {
                Ok(bytes) => match cache.put(&url, &bytes) {
                    Ok(()) => cached += 1,
                    Err(_) => failed += 1,
                },
                Err(_) => failed += 1,
            }
        }

        on_progress(cached + failed, total);

        if (i + 1) % THROTTLE_EVERY == 0 && i + 1 < total {
            tokio::time::sleep(THROTTLE_PAUSE).await;
        }
    }

    PreCacheResult {
        cached,
        failed,
        total,
        cancelled: false,
        estimated_bytes: cached as u64 * AVERAGE_TILE_BYTES,
    }
}
