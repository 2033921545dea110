use std::collections::HashMap;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use tripdir_core::assignment::{RoomAssignment, peak_occupancy};
use tripdir_core::person::Person;
use tripdir_core::room::Room;
use tripdir_core::transport::Transport;
use tripdir_core::tripdir::TripHandle;

pub fn run(handle: TripHandle) -> Result<()> {
    let store = handle.store();
    let trip = store.load_trip()?;

    let rooms: Vec<Room> = store.list()?;
    let persons: Vec<Person> = store.list()?;
    let assignments: Vec<RoomAssignment> = store.list()?;
    let transports: Vec<Transport> = store.list()?;

    let person_names: HashMap<&str, &str> = persons
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    println!("{}", handle.render());

    for room in &rooms {
        let peak = peak_occupancy(&assignments, &room.id, &trip.span());
        let occupancy = format!("({peak}/{})", room.capacity);
        if peak > room.capacity {
            println!("  {} {}", room.name, occupancy.yellow());
        } else {
            println!("  {} {}", room.name, occupancy.dimmed());
        }

        for a in assignments.iter().filter(|a| a.room_id == room.id) {
            let name = person_names.get(a.person_id.as_str()).unwrap_or(&"?");
            println!(
                "    {} {}",
                name,
                format!("{} to {}", a.start_date, a.end_date).dimmed()
            );
        }
    }
    if rooms.is_empty() {
        println!("  {}", "No rooms yet. Add one with: tripdir room add".dimmed());
    }

    let unassigned: Vec<&Person> = persons
        .iter()
        .filter(|p| !assignments.iter().any(|a| a.person_id == p.id))
        .collect();
    if !unassigned.is_empty() {
        let names: Vec<_> = unassigned.iter().map(|p| p.name.as_str()).collect();
        println!("  Unassigned: {}", names.join(", ").yellow());
    }

    if !transports.is_empty() {
        println!();
        for t in &transports {
            println!(
                "  {} {} {}",
                t.date.to_string().dimmed(),
                t.kind.label(),
                format!("{} -> {}", t.origin, t.destination)
            );
        }
    }

    Ok(())
}
