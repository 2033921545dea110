//! Global tripdir configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::booking::CapacityPolicy;
use crate::error::{TripDirError, TripDirResult};
use crate::tiles::TileServerConfig;

static DEFAULT_TRIPS_PATH: &str = "~/trips";

fn default_trips_path() -> PathBuf {
    PathBuf::from(DEFAULT_TRIPS_PATH)
}

fn is_default_trips_path(p: &PathBuf) -> bool {
    *p == default_trips_path()
}

fn default_share_base_url() -> String {
    "http://localhost:4150".to_string()
}

/// Global configuration at ~/.config/tripdir/config.toml
///
/// Everything trip-specific lives inside the trip's own directory; this
/// file only holds machine-wide settings.
#[derive(Serialize, Deserialize, Clone)]
pub struct TripDirConfig {
    #[serde(default = "default_trips_path", skip_serializing_if = "is_default_trips_path")]
    pub trips_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_trip: Option<String>,

    /// Whether over-capacity bookings warn or are refused.
    #[serde(default)]
    pub capacity_policy: CapacityPolicy,

    /// Base URL share links are printed with (where tripdir-server runs).
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    #[serde(default)]
    pub tiles: TileServerConfig,
}

impl Default for TripDirConfig {
    fn default() -> Self {
        TripDirConfig {
            trips_dir: default_trips_path(),
            default_trip: None,
            capacity_policy: CapacityPolicy::default(),
            share_base_url: default_share_base_url(),
            tiles: TileServerConfig::default(),
        }
    }
}

impl TripDirConfig {
    pub fn config_path() -> TripDirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TripDirError::Config("Could not determine config directory".into()))?
            .join("tripdir");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/tripdir/config.toml
    pub fn save(&self) -> TripDirResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| TripDirError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| TripDirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> TripDirResult<()> {
        let contents = format!(
            "\
# tripdir configuration

# Where your trips live:
# trips_dir = \"{}\"

# Default trip for commands that don't name one:
# default_trip = \"summer-in-brittany\"

# Whether booking past a room's capacity warns or is refused:
# capacity_policy = \"warn\"

# Base URL used when printing share links:
# share_base_url = \"http://localhost:4150\"

# [tiles]
# url_template = \"https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png\"
# subdomains = [\"a\", \"b\", \"c\"]
# max_tiles = 200
# cache_name = \"tiles\"
",
            DEFAULT_TRIPS_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TripDirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TripDirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
