mod commands;
mod http;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tripdir_core::tripdir::{TripDir, TripHandle};

#[derive(Parser)]
#[command(name = "tripdir")]
#[command(about = "Plan trips in your tripdir and take their maps offline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new trip
    New {
        name: String,

        /// First night (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Checkout morning (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Destination latitude, used for offline maps
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Destination longitude
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },

    /// List all trips
    Trips,

    /// Delete a trip and everything in it
    Delete {
        /// Trip to delete (by slug)
        trip: String,
    },

    /// Show rooms, people and bookings for a trip
    Status {
        /// Only operate on this trip (by slug)
        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Manage rooms
    Room {
        #[command(subcommand)]
        command: commands::room::RoomCommand,
    },

    /// Manage people
    Person {
        #[command(subcommand)]
        command: commands::person::PersonCommand,
    },

    /// Manage transports
    Transport {
        #[command(subcommand)]
        command: commands::transport::TransportCommand,
    },

    /// Book a person into a room
    Assign {
        person: String,
        room: String,

        /// First night (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Checkout morning (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Move or re-date an existing booking
    Reassign {
        /// Id of the booking to change
        assignment: String,

        /// New room (defaults to the current one)
        #[arg(long)]
        room: Option<String>,

        /// New first night (defaults to the current one)
        #[arg(long)]
        from: Option<String>,

        /// New checkout morning (defaults to the current one)
        #[arg(long)]
        to: Option<String>,

        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Remove a booking
    Unassign {
        /// Id of the booking to remove
        assignment: String,

        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Create or print the read-only share link for a trip
    Share {
        #[arg(short, long)]
        trip: Option<String>,

        /// Open the link in a browser
        #[arg(long)]
        open: bool,

        /// Stop sharing this trip
        #[arg(long)]
        revoke: bool,
    },

    /// Download map tiles around the trip destination for offline use
    Precache {
        #[arg(short, long)]
        trip: Option<String>,

        /// Zoom levels to cache (defaults to 10 12 14 16)
        #[arg(long)]
        zoom: Vec<u8>,

        /// Tile radius around the center (defaults per zoom level)
        #[arg(long)]
        radius: Option<u32>,

        /// Hard cap on the number of tiles
        #[arg(long)]
        max_tiles: Option<usize>,
    },

    /// Inspect or clear the offline tile cache
    Cache {
        #[command(subcommand)]
        command: commands::cache::CacheCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            name,
            from,
            to,
            lat,
            lon,
        } => commands::new::run(&name, &from, &to, lat.zip(lon)),
        Commands::Trips => commands::trips::run(),
        Commands::Delete { trip } => {
            let handle = resolve_trip(Some(&trip))?;
            commands::delete::run(handle)
        }
        Commands::Status { trip } => {
            let handle = resolve_trip(trip.as_deref())?;
            commands::status::run(handle)
        }
        Commands::Room { command } => command.run(),
        Commands::Person { command } => command.run(),
        Commands::Transport { command } => command.run(),
        Commands::Assign {
            person,
            room,
            from,
            to,
            trip,
        } => {
            let handle = resolve_trip(trip.as_deref())?;
            commands::assign::run(handle, &person, &room, &from, &to)
        }
        Commands::Reassign {
            assignment,
            room,
            from,
            to,
            trip,
        } => {
            let handle = resolve_trip(trip.as_deref())?;
            commands::assign::rerun(handle, &assignment, room.as_deref(), from.as_deref(), to.as_deref())
        }
        Commands::Unassign { assignment, trip } => {
            let handle = resolve_trip(trip.as_deref())?;
            commands::assign::remove(handle, &assignment)
        }
        Commands::Share { trip, open, revoke } => {
            let handle = resolve_trip(trip.as_deref())?;
            commands::share::run(handle, open, revoke)
        }
        Commands::Precache {
            trip,
            zoom,
            radius,
            max_tiles,
        } => {
            let handle = resolve_trip(trip.as_deref())?;
            commands::precache::run(handle, zoom, radius, max_tiles).await
        }
        Commands::Cache { command } => command.run(),
    }
}

pub(crate) fn resolve_trip(trip_filter: Option<&str>) -> Result<TripHandle> {
    let tripdir = TripDir::load()?;
    let trips = tripdir.trips();

    if trips.is_empty() {
        anyhow::bail!(
            "No trips found.\n\n\
            Create your first trip with:\n  \
            tripdir new \"Summer in Brittany\" --from 2024-07-15 --to 2024-07-29"
        );
    }

    match trip_filter {
        Some(slug) => match tripdir.find_trip(slug) {
            Some(handle) => Ok(handle),
            None => {
                let available: Vec<_> = trips.iter().map(|t| t.slug.clone()).collect();
                anyhow::bail!(
                    "Trip '{}' not found. Available: {}",
                    slug,
                    available.join(", ")
                );
            }
        },
        None => {
            if let Some(handle) = tripdir.default_trip() {
                return Ok(handle);
            }
            let mut trips = trips;
            if trips.len() == 1 {
                return Ok(trips.remove(0));
            }
            let available: Vec<_> = trips.iter().map(|t| t.slug.clone()).collect();
            anyhow::bail!(
                "Several trips found, pass one with --trip: {}",
                available.join(", ")
            );
        }
    }
}
