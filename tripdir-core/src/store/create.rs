//! Create record files in a trip directory.

use std::path::Path;

use serde::Serialize;

use super::{Record, TripStore};
use crate::error::{TripDirError, TripDirResult};

impl TripStore {
    /// Persist a new record, failing if its id is already taken.
    pub fn create<R: Record>(&self, record: &R) -> TripDirResult<()> {
        let dir = self.kind_dir::<R>();
        std::fs::create_dir_all(&dir)?;

        let path = self.record_path::<R>(record.id());
        if path.exists() {
            return Err(TripDirError::Constraint(format!(
                "{} {} already exists",
                R::NAME,
                record.id()
            )));
        }
        write_json(&path, record)
    }
}

/// Write a value as pretty JSON via a temp file and rename, so a crash
/// mid-write never leaves a half-written record behind.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> TripDirResult<()> {
    let contents = serde_json::to_string_pretty(value)
        .map_err(|e| TripDirError::Serialization(e.to_string()))?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, contents)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}
