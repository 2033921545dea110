//! Delete record files from a trip directory.

use super::{Record, TripStore};
use crate::assignment::RoomAssignment;
use crate::error::{TripDirError, TripDirResult};
use crate::person::Person;
use crate::room::Room;

impl TripStore {
    /// Delete one record by id.
    pub fn delete<R: Record>(&self, id: &str) -> TripDirResult<()> {
        let path = self.record_path::<R>(id);
        if !path.exists() {
            return Err(TripDirError::not_found(R::NAME, id));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }

    /// Delete a person together with every booking they appear in.
    pub fn delete_person_cascade(&self, person_id: &str) -> TripDirResult<()> {
        for assignment in self.list::<RoomAssignment>()? {
            if assignment.person_id == person_id {
                self.delete::<RoomAssignment>(&assignment.id)?;
            }
        }
        self.delete::<Person>(person_id)
    }

    /// Delete a room together with every booking into it.
    pub fn delete_room_cascade(&self, room_id: &str) -> TripDirResult<()> {
        for assignment in self.list::<RoomAssignment>()? {
            if assignment.room_id == room_id {
                self.delete::<RoomAssignment>(&assignment.id)?;
            }
        }
        self.delete::<Room>(room_id)
    }

    /// Remove the whole trip directory, cascading to every record.
    pub fn delete_trip(self) -> TripDirResult<()> {
        std::fs::remove_dir_all(&self.dir)?;
        Ok(())
    }
}
