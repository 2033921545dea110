use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use crate::resolve_trip;
use tripdir_core::date_span::parse_date;
use tripdir_core::ids;
use tripdir_core::transport::{Transport, TransportKind};

#[derive(Subcommand)]
pub enum TransportCommand {
    /// Add a transport leg to a trip
    Add {
        /// flight, train, bus, car, ferry or other
        kind: String,
        origin: String,
        destination: String,

        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(short, long)]
        trip: Option<String>,
    },

    /// List the transports of a trip
    List {
        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Remove a transport leg
    Remove {
        /// Id of the transport to remove
        id: String,

        #[arg(short, long)]
        trip: Option<String>,
    },
}

impl TransportCommand {
    pub fn run(self) -> Result<()> {
        match self {
            TransportCommand::Add {
                kind,
                origin,
                destination,
                date,
                trip,
            } => {
                let handle = resolve_trip(trip.as_deref())?;
                let store = handle.store();

                let kind: TransportKind = kind.parse()?;
                let mut transport =
                    Transport::new(&handle.trip.id, kind, &origin, &destination, parse_date(&date)?)?;
                transport.id = ids::generate_unique_id(
                    |id| store.exists::<Transport>(id),
                    ids::ID_ATTEMPTS,
                )?;
                store.create(&transport)?;

                println!(
                    "Added {} {} -> {} on {}",
                    transport.kind.label().green(),
                    transport.origin,
                    transport.destination,
                    transport.date
                );
                Ok(())
            }
            TransportCommand::List { trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                let transports: Vec<Transport> = handle.store().list()?;
                if transports.is_empty() {
                    println!("No transports on {} yet", handle.slug);
                }
                for t in transports {
                    println!(
                        "{} {} {} -> {} {}",
                        t.date.to_string().dimmed(),
                        t.kind.label(),
                        t.origin,
                        t.destination,
                        t.id.dimmed()
                    );
                }
                Ok(())
            }
            TransportCommand::Remove { id, trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                handle.store().delete::<Transport>(&id)?;
                println!("Removed transport {}", id.red());
                Ok(())
            }
        }
    }
}
