//! Offline map tile pre-caching.
//!
//! Everything needed to take a trip's destination and make the surrounding
//! map usable offline: planning which tiles to fetch (`plan`), a cache
//! capability over tile URLs (`cache`), the fetch capability (`fetch`) and
//! the sequential pre-cache orchestrator (`precache`).

pub mod cache;
pub mod fetch;
pub mod plan;
pub mod precache;

use serde::{Deserialize, Serialize};

use crate::geo::TileCoordinates;

fn default_url_template() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_subdomains() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

fn default_max_tiles() -> usize {
    200
}

fn default_cache_name() -> String {
    "tiles".to_string()
}

/// Tile server settings, part of the global config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileServerConfig {
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Subdomains requests are spread across.
    #[serde(default = "default_subdomains")]
    pub subdomains: Vec<String>,

    /// Hard cap on tiles per pre-cache run.
    #[serde(default = "default_max_tiles")]
    pub max_tiles: usize,

    /// Name of the local cache the tiles land in.
    #[serde(default = "default_cache_name")]
    pub cache_name: String,
}

impl Default for TileServerConfig {
    fn default() -> Self {
        TileServerConfig {
            url_template: default_url_template(),
            subdomains: default_subdomains(),
            max_tiles: default_max_tiles(),
            cache_name: default_cache_name(),
        }
    }
}

impl TileServerConfig {
    /// URL for a tile. The subdomain is a deterministic function of the
    /// tile, so a re-run looks up exactly the key an earlier run stored.
    pub fn tile_url(&self, tile: &TileCoordinates) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            &self.subdomains[(tile.x as usize + tile.y as usize) % self.subdomains.len()]
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}
