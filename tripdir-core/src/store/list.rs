//! Read records from a trip directory.

use super::{Record, TripStore};
use crate::assignment::RoomAssignment;
use crate::error::{TripDirError, TripDirResult};

impl TripStore {
    /// Load one record by id.
    pub fn get<R: Record>(&self, id: &str) -> TripDirResult<R> {
        let path = self.record_path::<R>(id);
        if !path.exists() {
            return Err(TripDirError::not_found(R::NAME, id));
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| TripDirError::Serialization(e.to_string()))
    }

    /// List every record of a kind, sorted by id for deterministic output.
    /// Files that fail to parse are skipped rather than failing the listing.
    pub fn list<R: Record>(&self) -> TripDirResult<Vec<R>> {
        let dir = self.kind_dir::<R>();
        let mut records: Vec<R> = Vec::new();

        if !dir.exists() {
            return Ok(records);
        }

        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();

            if path.extension().map(|e| e == "json").unwrap_or(false)
                && let Ok(contents) = std::fs::read_to_string(&path)
                && let Ok(record) = serde_json::from_str::<R>(&contents)
            {
                records.push(record);
            }
        }

        records.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(records)
    }

    /// Assignments for one person, read fresh from disk. Conflict checks
    /// go through this so they always see the latest committed state.
    pub fn assignments_for_person(&self, person_id: &str) -> TripDirResult<Vec<RoomAssignment>> {
        Ok(self
            .list::<RoomAssignment>()?
            .into_iter()
            .filter(|a| a.person_id == person_id)
            .collect())
    }
}
