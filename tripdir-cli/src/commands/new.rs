use anyhow::Result;
use owo_colors::OwoColorize;

use tripdir_core::date_span::DateSpan;
use tripdir_core::geo::Coordinates;
use tripdir_core::tripdir::TripDir;

pub fn run(name: &str, from: &str, to: &str, lat_lon: Option<(f64, f64)>) -> Result<()> {
    let mut tripdir = TripDir::load()?;

    let span = DateSpan::parse(from, to)?;
    let location = lat_lon.map(|(lat, lon)| Coordinates { lat, lon });
    let handle = tripdir.create_trip(name, span, location)?;

    println!(
        "Created {} at {}",
        handle.trip.name.green(),
        handle.path.display()
    );

    if tripdir.set_default_trip_if_unset(&handle.slug)? {
        println!("Set {} as your default trip", handle.slug.dimmed());
    }

    Ok(())
}
