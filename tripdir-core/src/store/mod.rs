//! File-backed trip storage.
//!
//! Each trip is a directory; each record is a single JSON file inside a
//! per-kind subdirectory:
//!
//! ```text
//! <trips_dir>/<trip-slug>/
//!     trip.json
//!     rooms/<id>.json
//!     persons/<id>.json
//!     assignments/<id>.json
//!     transports/<id>.json
//! ```
//!
//! Deleting the trip directory removes everything that belongs to it.

mod create;
mod delete;
mod list;
mod update;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::assignment::RoomAssignment;
use crate::error::{TripDirError, TripDirResult};
use crate::person::Person;
use crate::room::Room;
use crate::transport::Transport;
use crate::trip::Trip;

pub(crate) use create::write_json;

/// Filename of the trip record inside its directory.
pub const TRIP_FILE: &str = "trip.json";

/// A record type stored in its own subdirectory of a trip.
pub trait Record: Serialize + DeserializeOwned {
    /// Subdirectory name.
    const KIND: &'static str;
    /// Singular name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> &str;
}

impl Record for Room {
    const KIND: &'static str = "rooms";
    const NAME: &'static str = "Room";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Person {
    const KIND: &'static str = "persons";
    const NAME: &'static str = "Person";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for RoomAssignment {
    const KIND: &'static str = "assignments";
    const NAME: &'static str = "Assignment";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Transport {
    const KIND: &'static str = "transports";
    const NAME: &'static str = "Transport";
    fn id(&self) -> &str {
        &self.id
    }
}

/// Storage handle for one trip directory.
pub struct TripStore {
    dir: PathBuf,
}

impl TripStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        TripStore { dir: dir.into() }
    }

    /// Create the trip directory and write its trip record.
    pub fn init(dir: impl Into<PathBuf>, trip: &Trip) -> TripDirResult<Self> {
        let store = TripStore { dir: dir.into() };
        if store.dir.join(TRIP_FILE).exists() {
            return Err(TripDirError::Constraint(format!(
                "A trip already exists at {}",
                store.dir.display()
            )));
        }
        std::fs::create_dir_all(&store.dir)?;
        store.save_trip(trip)?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_trip(&self) -> TripDirResult<Trip> {
        let path = self.dir.join(TRIP_FILE);
        if !path.exists() {
            return Err(TripDirError::not_found(
                "Trip",
                self.dir.display().to_string(),
            ));
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| TripDirError::Serialization(e.to_string()))
    }

    pub fn save_trip(&self, trip: &Trip) -> TripDirResult<()> {
        write_json(&self.dir.join(TRIP_FILE), trip)
    }

    pub fn exists<R: Record>(&self, id: &str) -> bool {
        self.record_path::<R>(id).exists()
    }

    fn kind_dir<R: Record>(&self) -> PathBuf {
        self.dir.join(R::KIND)
    }

    fn record_path<R: Record>(&self, id: &str) -> PathBuf {
        self.kind_dir::<R>().join(format!("{id}.json"))
    }
}
