//! People travelling on a trip.

use serde::{Deserialize, Serialize};

use crate::error::{TripDirError, TripDirResult};
use crate::ids;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub trip_id: String,
    pub name: String,
}

impl Person {
    pub fn new(trip_id: impl Into<String>, name: impl Into<String>) -> TripDirResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TripDirError::validation("Person name cannot be empty"));
        }
        Ok(Person {
            id: ids::new_id(),
            trip_id: trip_id.into(),
            name,
        })
    }
}
