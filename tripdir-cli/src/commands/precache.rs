use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio_util::sync::CancellationToken;

use crate::http::HttpTileFetcher;
use crate::render::Render;
use tripdir_core::tiles::cache::FsTileCache;
use tripdir_core::tiles::{plan, precache};
use tripdir_core::tripdir::{TripDir, TripHandle};

/// Zoom levels cached when none are given: overview down to street level.
const DEFAULT_ZOOM_LEVELS: [u8; 4] = [10, 12, 14, 16];

pub async fn run(
    handle: TripHandle,
    zoom: Vec<u8>,
    radius: Option<u32>,
    max_tiles: Option<usize>,
) -> Result<()> {
    let tripdir = TripDir::load()?;
    let server = tripdir.config().tiles.clone();

    let Some(center) = handle.trip.location else {
        anyhow::bail!(
            "Trip '{}' has no destination coordinates.\n\
            Create trips with --lat/--lon to enable offline maps.",
            handle.slug
        );
    };

    let zoom_levels = if zoom.is_empty() {
        DEFAULT_ZOOM_LEVELS.to_vec()
    } else {
        zoom
    };
    let max_tiles = max_tiles.unwrap_or(server.max_tiles);
    let tiles = plan::tiles_to_cache(center, &zoom_levels, radius, max_tiles);

    // A cache that cannot be opened degrades the run to a no-op result.
    let cache = FsTileCache::open(&server.cache_name).ok();
    if cache.is_none() {
        println!(
            "{}",
            "Tile caching is unavailable on this system".yellow()
        );
    }

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let fetcher = HttpTileFetcher::new()?;

    let bar = ProgressBar::new(tiles.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} tiles")
            .unwrap(),
    );

    let result = precache::pre_cache_tiles(
        cache.as_ref(),
        &fetcher,
        &server,
        &tiles,
        &cancel,
        |done, _total| bar.set_position(done as u64),
    )
    .await;
    bar.finish_and_clear();

    println!("{}", result.render());
    Ok(())
}
