use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use super::find_person;
use crate::resolve_trip;
use tripdir_core::ids;
use tripdir_core::person::Person;

#[derive(Subcommand)]
pub enum PersonCommand {
    /// Add a person to a trip
    Add {
        name: String,

        #[arg(short, long)]
        trip: Option<String>,
    },

    /// List the people on a trip
    List {
        #[arg(short, long)]
        trip: Option<String>,
    },

    /// Remove a person and every booking they appear in
    Remove {
        name: String,

        #[arg(short, long)]
        trip: Option<String>,
    },
}

impl PersonCommand {
    pub fn run(self) -> Result<()> {
        match self {
            PersonCommand::Add { name, trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                let store = handle.store();

                let mut person = Person::new(&handle.trip.id, &name)?;
                person.id = ids::generate_unique_id(
                    |id| store.exists::<Person>(id),
                    ids::ID_ATTEMPTS,
                )?;
                store.create(&person)?;

                println!("Added {}", person.name.green());
                Ok(())
            }
            PersonCommand::List { trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                let persons: Vec<Person> = handle.store().list()?;
                if persons.is_empty() {
                    println!("Nobody on {} yet", handle.slug);
                }
                for person in persons {
                    println!("{}", person.name);
                }
                Ok(())
            }
            PersonCommand::Remove { name, trip } => {
                let handle = resolve_trip(trip.as_deref())?;
                let store = handle.store();
                let person = find_person(&store, &name)?;
                store.delete_person_cascade(&person.id)?;
                println!("Removed {} and their bookings", person.name.red());
                Ok(())
            }
        }
    }
}
