use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use tripdir_core::tripdir::TripDir;

pub fn run() -> Result<()> {
    let tripdir = TripDir::load()?;
    let trips = tripdir.trips();

    if trips.is_empty() {
        println!(
            "No trips in {} yet. Create one with: tripdir new",
            tripdir.display_path().display()
        );
        return Ok(());
    }

    for handle in &trips {
        let shared = if handle.trip.share_token.is_some() {
            " (shared)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{}{}", handle.render(), shared);
    }

    Ok(())
}
