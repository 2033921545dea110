//! Rooms people can be booked into.

use serde::{Deserialize, Serialize};

use crate::error::{TripDirError, TripDirResult};
use crate::ids;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    /// How many people the room sleeps. Enforcement depends on the
    /// configured capacity policy.
    pub capacity: u32,
}

impl Room {
    pub fn new(
        trip_id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
    ) -> TripDirResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TripDirError::validation("Room name cannot be empty"));
        }
        if capacity == 0 {
            return Err(TripDirError::validation(
                "Room capacity must be at least 1",
            ));
        }
        Ok(Room {
            id: ids::new_id(),
            trip_id: trip_id.into(),
            name,
            capacity,
        })
    }
}
