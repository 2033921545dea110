use anyhow::Result;
use tripdir_core::tripdir::TripDir;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // We reload TripDir on each request to pick up filesystem changes
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Verify tripdir can be loaded at startup
        let _ = TripDir::load()?;
        Ok(AppState {})
    }

    pub fn tripdir(&self) -> Result<TripDir> {
        Ok(TripDir::load()?)
    }
}
