//! Core types and engines for the tripdir ecosystem.
//!
//! This crate provides everything shared by tripdir-cli and tripdir-server:
//! - `Trip`, `Room`, `Person`, `RoomAssignment` and `Transport` types
//! - the file-based trip store (`store`)
//! - the booking conflict engine (`booking`)
//! - the offline map tile subsystem (`geo`, `tiles`)
//! - share token generation and resolution (`share`)

pub mod assignment;
pub mod booking;
pub mod date_span;
pub mod error;
pub mod geo;
pub mod ids;
pub mod person;
pub mod room;
pub mod share;
pub mod store;
pub mod tiles;
pub mod transport;
pub mod trip;
pub mod tripdir;
pub mod tripdir_config;

pub use error::{TripDirError, TripDirResult};
