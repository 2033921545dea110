//! Tile cache capability and implementations.
//!
//! The cache is a named blob store keyed by tile URL. It is treated as
//! unreliable: opening may fail outright (no platform cache directory, no
//! write permission), and callers degrade to an "unavailable" result
//! instead of failing the surrounding operation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;

use crate::error::{TripDirError, TripDirResult};

/// Heuristic size of one cached tile. Stats and estimates are derived
/// from key counts, not measured bytes.
pub const AVERAGE_TILE_BYTES: u64 = 15 * 1024;

/// A named, URL-keyed blob store for tile images.
pub trait TileCache {
    fn contains(&self, url: &str) -> TripDirResult<bool>;
    fn put(&self, url: &str, bytes: &[u8]) -> TripDirResult<()>;
    fn keys(&self) -> TripDirResult<Vec<String>>;
}

/// Cache statistics derived from key enumeration.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CacheStats {
    pub tiles: usize,
    pub estimated_bytes: u64,
}

/// Filesystem cache: one file per URL under a named directory in the
/// platform cache dir (e.g. `~/.cache/tripdir/tiles`).
pub struct FsTileCache {
    dir: PathBuf,
}

impl FsTileCache {
    /// Open the named cache, creating its directory if needed. Fails when
    /// no platform cache directory exists; callers treat that as "tile
    /// caching unsupported here".
    pub fn open(name: &str) -> TripDirResult<Self> {
        let root = dirs::cache_dir().ok_or_else(|| {
            TripDirError::Config("Could not determine cache directory".into())
        })?;
        Self::open_in(&root.join("tripdir"), name)
    }

    /// Open a named cache under an explicit root. Used directly in tests.
    pub fn open_in(root: &Path, name: &str) -> TripDirResult<Self> {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir)?;
        Ok(FsTileCache { dir })
    }

    /// Delete the entire named cache. An absent cache is already clear.
    pub fn clear(name: &str) -> TripDirResult<()> {
        let Some(root) = dirs::cache_dir() else {
            return Ok(());
        };
        let dir = root.join("tripdir").join(name);
        if dir.exists() {
            std::fs::remove_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Best-effort statistics for the named cache. Unavailable or empty
    /// caches both report zero.
    pub fn stats_for(name: &str) -> CacheStats {
        match Self::open(name) {
            Ok(cache) => cache.stats(),
            Err(_) => CacheStats::default(),
        }
    }

    pub fn stats(&self) -> CacheStats {
        let tiles = self.keys().map(|keys| keys.len()).unwrap_or(0);
        CacheStats {
            tiles,
            estimated_bytes: tiles as u64 * AVERAGE_TILE_BYTES,
        }
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(filename_for_url(url))
    }
}

impl TileCache for FsTileCache {
    fn contains(&self, url: &str) -> TripDirResult<bool> {
        Ok(self.entry_path(url).exists())
    }

    fn put(&self, url: &str, bytes: &[u8]) -> TripDirResult<()> {
        let path = self.entry_path(url);
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, bytes)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn keys(&self) -> TripDirResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file()
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                keys.push(name.to_string());
            }
        }
        Ok(keys)
    }
}

/// In-memory cache, used in tests and wherever persistence is not wanted.
#[derive(Default)]
pub struct MemoryTileCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryTileCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TileCache for MemoryTileCache {
    fn contains(&self, url: &str) -> TripDirResult<bool> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.contains_key(url))
    }

    fn put(&self, url: &str, bytes: &[u8]) -> TripDirResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(url.to_string(), bytes.to_vec());
        Ok(())
    }

    fn keys(&self) -> TripDirResult<Vec<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.keys().cloned().collect())
    }
}

/// Whether one tile is already cached. Best-effort: an unreadable cache
/// reports the tile as absent.
pub fn is_tile_cached<C: TileCache>(
    cache: &C,
    server: &super::TileServerConfig,
    tile: &crate::geo::TileCoordinates,
) -> bool {
    cache.contains(&server.tile_url(tile)).unwrap_or(false)
}

/// Stable filename for a URL: alphanumerics kept, everything else folded
/// to '-'. Tile URLs differ in their digits and subdomain letter, so the
/// mapping stays collision-free for any one tile server.
fn filename_for_url(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
