//! The trip itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_span::DateSpan;
use crate::error::{TripDirError, TripDirResult};
use crate::geo::Coordinates;
use crate::ids;

/// A planned trip. Rooms, people, bookings and transports all hang off a
/// trip and are removed with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Destination center used for offline map pre-caching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,

    /// Read-only sharing token, present once sharing has been enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
}

impl Trip {
    pub fn new(name: impl Into<String>, span: DateSpan) -> TripDirResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TripDirError::validation("Trip name cannot be empty"));
        }
        Ok(Trip {
            id: ids::new_id(),
            name,
            start_date: span.start,
            end_date: span.end,
            location: None,
            share_token: None,
        })
    }

    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Whether a booking span sticks out past the trip's own dates.
    /// Not an error anywhere, but callers may want to point it out.
    pub fn covers(&self, span: &DateSpan) -> bool {
        self.start_date <= span.start && span.end <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_name() {
        let span = DateSpan::parse("2024-07-15", "2024-07-20").unwrap();
        assert!(Trip::new("  ", span).is_err());
        assert!(Trip::new("Summer in Brittany", span).is_ok());
    }

    #[test]
    fn test_covers() {
        let span = DateSpan::parse("2024-07-15", "2024-07-20").unwrap();
        let trip = Trip::new("Summer", span).unwrap();
        assert!(trip.covers(&DateSpan::parse("2024-07-16", "2024-07-18").unwrap()));
        assert!(!trip.covers(&DateSpan::parse("2024-07-14", "2024-07-18").unwrap()));
        assert!(!trip.covers(&DateSpan::parse("2024-07-18", "2024-07-21").unwrap()));
    }
}
