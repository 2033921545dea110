pub mod assign;
pub mod cache;
pub mod delete;
pub mod new;
pub mod person;
pub mod precache;
pub mod room;
pub mod share;
pub mod status;
pub mod transport;
pub mod trips;

use anyhow::{Result, anyhow};
use tripdir_core::person::Person;
use tripdir_core::room::Room;
use tripdir_core::store::TripStore;

/// Find a room by name or id.
pub fn find_room(store: &TripStore, name_or_id: &str) -> Result<Room> {
    let rooms: Vec<Room> = store.list()?;
    let available: Vec<_> = rooms.iter().map(|r| r.name.clone()).collect();
    rooms
        .into_iter()
        .find(|r| r.name == name_or_id || r.id == name_or_id)
        .ok_or_else(|| {
            anyhow!(
                "Room '{}' not found. Available: {}",
                name_or_id,
                available.join(", ")
            )
        })
}

/// Find a person by name or id.
pub fn find_person(store: &TripStore, name_or_id: &str) -> Result<Person> {
    let persons: Vec<Person> = store.list()?;
    let available: Vec<_> = persons.iter().map(|p| p.name.clone()).collect();
    persons
        .into_iter()
        .find(|p| p.name == name_or_id || p.id == name_or_id)
        .ok_or_else(|| {
            anyhow!(
                "Person '{}' not found. Available: {}",
                name_or_id,
                available.join(", ")
            )
        })
}
