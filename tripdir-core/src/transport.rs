//! Transports getting people to, from and around the destination.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TripDirError, TripDirResult};
use crate::ids;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Flight,
    Train,
    Bus,
    Car,
    Ferry,
    Other,
}

impl TransportKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransportKind::Flight => "flight",
            TransportKind::Train => "train",
            TransportKind::Bus => "bus",
            TransportKind::Car => "car",
            TransportKind::Ferry => "ferry",
            TransportKind::Other => "other",
        }
    }
}

impl std::str::FromStr for TransportKind {
    type Err = TripDirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(TransportKind::Flight),
            "train" => Ok(TransportKind::Train),
            "bus" => Ok(TransportKind::Bus),
            "car" => Ok(TransportKind::Car),
            "ferry" => Ok(TransportKind::Ferry),
            "other" => Ok(TransportKind::Other),
            _ => Err(TripDirError::Validation(format!(
                "Unknown transport kind '{s}'. Expected flight, train, bus, car, ferry or other"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transport {
    pub id: String,
    pub trip_id: String,
    pub kind: TransportKind,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

impl Transport {
    pub fn new(
        trip_id: impl Into<String>,
        kind: TransportKind,
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
    ) -> TripDirResult<Self> {
        let origin = origin.into();
        let destination = destination.into();
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(TripDirError::validation(
                "Transport origin and destination cannot be empty",
            ));
        }
        Ok(Transport {
            id: ids::new_id(),
            trip_id: trip_id.into(),
            kind,
            origin,
            destination,
            date,
        })
    }
}
