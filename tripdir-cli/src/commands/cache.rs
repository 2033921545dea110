use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use crate::render::format_bytes;
use tripdir_core::tiles::cache::FsTileCache;
use tripdir_core::tripdir::TripDir;

#[derive(Subcommand)]
pub enum CacheCommand {
    /// Show how many tiles are cached and their estimated size
    Stats,

    /// Delete every cached tile
    Clear,
}

impl CacheCommand {
    pub fn run(self) -> Result<()> {
        let tripdir = TripDir::load()?;
        let cache_name = &tripdir.config().tiles.cache_name;

        match self {
            CacheCommand::Stats => {
                let stats = FsTileCache::stats_for(cache_name);
                if stats.tiles == 0 {
                    println!("Tile cache is empty");
                } else {
                    println!(
                        "{} tiles cached, ~{}",
                        stats.tiles,
                        format_bytes(stats.estimated_bytes)
                    );
                }
                Ok(())
            }
            CacheCommand::Clear => {
                FsTileCache::clear(cache_name)?;
                println!("{}", "Tile cache cleared".red());
                Ok(())
            }
        }
    }
}
