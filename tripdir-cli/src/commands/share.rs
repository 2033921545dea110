use anyhow::Result;
use owo_colors::OwoColorize;

use tripdir_core::share;
use tripdir_core::tripdir::{TripDir, TripHandle};

pub fn run(handle: TripHandle, open_link: bool, revoke: bool) -> Result<()> {
    let tripdir = TripDir::load()?;
    let store = handle.store();

    if revoke {
        share::revoke_share_token(&store)?;
        println!("Stopped sharing {}", handle.slug.red());
        return Ok(());
    }

    let token = share::ensure_share_token(&store)?;
    let url = format!(
        "{}{}",
        tripdir.config().share_base_url,
        share::share_path(&token)
    );

    println!("{}", url.green());
    println!(
        "   {}",
        "Anyone with this link can view the trip (tripdir-server must be running)".dimmed()
    );

    if open_link {
        open::that(&url)?;
    }

    Ok(())
}
