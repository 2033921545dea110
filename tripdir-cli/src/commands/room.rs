use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use super::find_room;
use crate::resolve_trip;
use tripdir_core::ids;
use tripdir_core::room::Room;

#[derive(Subcommand)]
pub enum RoomCommand {
    /// Add a room to a trip
    Add {
        name: String,

        /// How many people the room sleeps
        #[arg(long, default_value_t = 2)]
        capacity: u32,

        #[arg(short, long)]
        trip: Option<String>,
    },

    /// List the rooms of a trip
    List {
        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Remove a room and every booking into it
    Remove {
        name: String,

        #[arg(short, long)]
        trip: Option<String>,
    },
}

impl RoomCommand {
    pub fn run(self) -> Result<()> {
        match self {
            RoomCommand::Add {
                name,
                capacity,
                trip,
            } => {
                let handle = resolve_trip(trip.as_deref())?;
                let store = handle.store();

                let mut room = Room::new(&handle.trip.id, &name, capacity)?;
                room.id = ids::generate_unique_id(
                    |id| store.exists::<Room>(id),
                    ids::ID_ATTEMPTS,
                )?;
                store.create(&room)?;

                println!("Added {} (sleeps {})", room.name.green(), room.capacity);
                Ok(())
            }
            RoomCommand::List { trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                let rooms: Vec<Room> = handle.store().list()?;
                if rooms.is_empty() {
                    println!("No rooms in {} yet", handle.slug);
                }
                for room in rooms {
                    println!("{} {}", room.name, format!("(sleeps {})", room.capacity).dimmed());
                }
                Ok(())
            }
            RoomCommand::Remove { name, trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                let store = handle.store();
                let room = find_room(&store, &name)?;
                store.delete_room_cascade(&room.id)?;
                println!("Removed {} and its bookings", room.name.red());
                Ok(())
            }
        }
    }
}
