//! Trip sharing via URL-safe tokens.
//!
//! A share token grants read access to one trip through a public link of
//! the form `{base}/share/{token}`. Resolving a token that is malformed or
//! unknown is a normal outcome (`ShareLookup::NotFound`), not an error.

use serde::Serialize;

use crate::assignment::RoomAssignment;
use crate::error::TripDirResult;
use crate::ids;
use crate::person::Person;
use crate::room::Room;
use crate::store::TripStore;
use crate::transport::Transport;
use crate::trip::Trip;
use crate::tripdir::TripHandle;

/// Result of resolving a share token.
#[derive(Debug)]
pub enum ShareLookup {
    Found(TripHandle),
    NotFound,
}

/// Enable sharing for a trip. Generates a token on first use and keeps
/// returning the same one afterwards.
pub fn ensure_share_token(store: &TripStore) -> TripDirResult<String> {
    let mut trip = store.load_trip()?;
    if let Some(token) = &trip.share_token {
        return Ok(token.clone());
    }

    let token = ids::new_share_token();
    trip.share_token = Some(token.clone());
    store.save_trip(&trip)?;
    Ok(token)
}

/// Disable sharing for a trip. The old link stops resolving.
pub fn revoke_share_token(store: &TripStore) -> TripDirResult<()> {
    let mut trip = store.load_trip()?;
    if trip.share_token.take().is_some() {
        store.save_trip(&trip)?;
    }
    Ok(())
}

/// Resolve a token against the given trips.
pub fn resolve_share(trips: Vec<TripHandle>, token: &str) -> ShareLookup {
    if !ids::is_well_formed_token(token) {
        return ShareLookup::NotFound;
    }
    for handle in trips {
        if handle.trip.share_token.as_deref() == Some(token) {
            return ShareLookup::Found(handle);
        }
    }
    ShareLookup::NotFound
}

/// The path segment a token is embedded under.
pub fn share_path(token: &str) -> String {
    format!("/share/{token}")
}

/// Everything a shared link exposes: the trip and all of its records.
#[derive(Debug, Serialize)]
pub struct SharedTrip {
    pub trip: Trip,
    pub rooms: Vec<Room>,
    pub persons: Vec<Person>,
    pub assignments: Vec<RoomAssignment>,
    pub transports: Vec<Transport>,
}

impl SharedTrip {
    pub fn load(handle: &TripHandle) -> TripDirResult<Self> {
        let store = handle.store();
        Ok(SharedTrip {
            trip: store.load_trip()?,
            rooms: store.list()?,
            persons: store.list()?,
            assignments: store.list()?,
            transports: store.list()?,
        })
    }
}
