//! Trip root directory management.

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::date_span::DateSpan;
use crate::error::{TripDirError, TripDirResult};
use crate::geo::Coordinates;
use crate::store::{TRIP_FILE, TripStore};
use crate::trip::Trip;
use crate::tripdir_config::TripDirConfig;

/// A discovered trip: its directory slug, its path, and the trip record.
#[derive(Debug, Clone)]
pub struct TripHandle {
    pub slug: String,
    pub path: PathBuf,
    pub trip: Trip,
}

impl TripHandle {
    pub fn store(&self) -> TripStore {
        TripStore::open(&self.path)
    }
}

#[derive(Clone)]
pub struct TripDir {
    config: TripDirConfig,
}

impl TripDir {
    pub fn load() -> TripDirResult<Self> {
        let config_path = TripDirConfig::config_path()?;

        if !config_path.exists() {
            TripDirConfig::create_default_config(&config_path)?;
        }

        let config: TripDirConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| TripDirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TripDirError::Config(e.to_string()))?;

        Ok(TripDir { config })
    }

    /// Build from an explicit config, bypassing the global config file.
    pub fn with_config(config: TripDirConfig) -> Self {
        TripDir { config }
    }

    pub fn config(&self) -> &TripDirConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.trips_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the trips directory in display-friendly form, keeping `~`
    /// instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.trips_dir.clone()
    }

    /// Discover trips by scanning trips_dir for subdirectories holding a
    /// trip.json file.
    pub fn trips(&self) -> Vec<TripHandle> {
        let data_path = self.data_path();

        let Ok(entries) = std::fs::read_dir(&data_path) else {
            return Vec::new();
        };

        let mut trips: Vec<TripHandle> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir() && path.join(TRIP_FILE).exists())
            .filter_map(|path| {
                let slug = path.file_name()?.to_str()?.to_string();
                let trip = TripStore::open(&path).load_trip().ok()?;
                Some(TripHandle { slug, path, trip })
            })
            .collect();

        trips.sort_by(|a, b| a.slug.cmp(&b.slug));
        trips
    }

    /// Find one trip by slug or by trip id.
    pub fn find_trip(&self, slug_or_id: &str) -> Option<TripHandle> {
        self.trips()
            .into_iter()
            .find(|t| t.slug == slug_or_id || t.trip.id == slug_or_id)
    }

    pub fn default_trip(&self) -> Option<TripHandle> {
        let slug = self.config.default_trip.as_ref()?;
        self.find_trip(slug)
    }

    /// Create a trip directory named after the trip, with numeric suffixes
    /// on slug collisions.
    pub fn create_trip(
        &self,
        name: &str,
        span: DateSpan,
        location: Option<Coordinates>,
    ) -> TripDirResult<TripHandle> {
        let data_path = self.data_path();
        std::fs::create_dir_all(&data_path)?;

        let mut trip = Trip::new(name, span)?;
        trip.location = location;

        let slug = unique_slug(&slug::slugify(name), &data_path)?;
        let path = data_path.join(&slug);
        TripStore::init(&path, &trip)?;

        Ok(TripHandle { slug, path, trip })
    }

    /// Set the default trip if one isn't already configured.
    /// Returns true if the default was set.
    pub fn set_default_trip_if_unset(&mut self, slug: &str) -> TripDirResult<bool> {
        if self.config.default_trip.is_some() {
            return Ok(false);
        }
        self.config.default_trip = Some(slug.to_string());
        self.config.save()?;
        Ok(true)
    }
}

/// Find an unused directory name, adding -2, -3, etc. on collisions.
fn unique_slug(base: &str, trips_dir: &Path) -> TripDirResult<String> {
    let base = if base.is_empty() { "trip" } else { base };

    if !trips_dir.join(base).exists() {
        return Ok(base.to_string());
    }

    for n in 2..=100 {
        let suffixed = format!("{base}-{n}");
        if !trips_dir.join(&suffixed).exists() {
            return Ok(suffixed);
        }
    }

    Err(TripDirError::Constraint(format!(
        "Too many trips named '{base}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tripdir_config::TripDirConfig;

    fn make_test_tripdir(tmp: &Path) -> TripDir {
        let config = TripDirConfig {
            trips_dir: tmp.to_path_buf(),
            ..Default::default()
        };
        TripDir::with_config(config)
    }

    fn july() -> DateSpan {
        DateSpan::parse("2024-07-15", "2024-07-29").unwrap()
    }

    #[test]
    fn test_create_and_discover_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let tripdir = make_test_tripdir(tmp.path());

        tripdir.create_trip("Summer in Brittany", july(), None).unwrap();
        tripdir.create_trip("Alps", july(), None).unwrap();

        let trips = tripdir.trips();
        assert_eq!(trips.len(), 2);
        // Sorted by slug.
        assert_eq!(trips[0].slug, "alps");
        assert_eq!(trips[1].slug, "summer-in-brittany");
    }

    #[test]
    fn test_slug_collisions_get_suffixes() {
        let tmp = tempfile::tempdir().unwrap();
        let tripdir = make_test_tripdir(tmp.path());

        let first = tripdir.create_trip("Alps", july(), None).unwrap();
        let second = tripdir.create_trip("Alps", july(), None).unwrap();
        assert_eq!(first.slug, "alps");
        assert_eq!(second.slug, "alps-2");
    }

    #[test]
    fn test_find_trip_by_slug_or_id() {
        let tmp = tempfile::tempdir().unwrap();
        let tripdir = make_test_tripdir(tmp.path());
        let created = tripdir.create_trip("Alps", july(), None).unwrap();

        assert!(tripdir.find_trip("alps").is_some());
        assert!(tripdir.find_trip(&created.trip.id).is_some());
        assert!(tripdir.find_trip("nope").is_none());
    }

    #[test]
    fn test_non_trip_directories_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let tripdir = make_test_tripdir(tmp.path());
        std::fs::create_dir_all(tmp.path().join("random-stuff")).unwrap();
        tripdir.create_trip("Alps", july(), None).unwrap();

        assert_eq!(tripdir.trips().len(), 1);
    }
}
