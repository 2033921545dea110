//! Update record files in a trip directory.

use super::{Record, TripStore, write_json};
use crate::error::{TripDirError, TripDirResult};

impl TripStore {
    /// Replace an existing record. The id must already exist.
    pub fn update<R: Record>(&self, record: &R) -> TripDirResult<()> {
        let path = self.record_path::<R>(record.id());
        if !path.exists() {
            return Err(TripDirError::not_found(R::NAME, record.id()));
        }
        write_json(&path, record)
    }
}
