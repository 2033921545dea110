use anyhow::Result;
use owo_colors::OwoColorize;

use tripdir_core::tripdir::{TripDir, TripHandle};

/// Delete a trip directory and everything in it (rooms, people, bookings,
/// transports).
pub fn run(handle: TripHandle) -> Result<()> {
    let tripdir = TripDir::load()?;

    let name = handle.trip.name.clone();
    let slug = handle.slug.clone();
    handle.store().delete_trip()?;

    // Drop a dangling default_trip so the next command doesn't trip on it.
    if tripdir.config().default_trip.as_deref() == Some(slug.as_str()) {
        let mut config = tripdir.config().clone();
        config.default_trip = None;
        config.save()?;
    }

    println!("Deleted {}", name.red());
    Ok(())
}
