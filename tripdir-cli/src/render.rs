//! TUI rendering traits for tripdir types.
//!
//! Extension traits that add colored terminal rendering to tripdir-core
//! types using owo_colors.

use owo_colors::OwoColorize;

use tripdir_core::booking::CapacityWarning;
use tripdir_core::tiles::precache::PreCacheResult;
use tripdir_core::tripdir::TripHandle;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TripHandle {
    fn render(&self) -> String {
        format!(
            "{} {}",
            self.trip.name.bold(),
            format!("{} to {}", self.trip.start_date, self.trip.end_date).dimmed()
        )
    }
}

impl Render for CapacityWarning {
    fn render(&self) -> String {
        format!(
            "{}",
            format!(
                "Warning: {} sleeps {} but would hold {} people",
                self.room_name, self.capacity, self.peak
            )
            .yellow()
        )
    }
}

impl Render for PreCacheResult {
    fn render(&self) -> String {
        if self.total == 0 {
            return "No tiles to cache".dimmed().to_string();
        }

        let summary = format!(
            "{} of {} tiles cached (~{})",
            self.cached,
            self.total,
            format_bytes(self.estimated_bytes)
        );

        let mut parts = vec![summary.green().to_string()];
        if self.failed > 0 {
            parts.push(format!("{} failed", self.failed).red().to_string());
        }
        if self.cancelled {
            parts.push("cancelled".yellow().to_string());
        }
        parts.join(", ")
    }
}

/// Human-readable byte count for estimates (multiples of 1024).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(15 * 1024), "15.0 KB");
        assert_eq!(format_bytes(200 * 15 * 1024), "2.9 MB");
    }
}
