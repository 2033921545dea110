use anyhow::Result;
use owo_colors::OwoColorize;

use super::{find_person, find_room};
use crate::render::Render;
use tripdir_core::assignment::RoomAssignment;
use tripdir_core::booking::{BookingEngine, BookingRequest};
use tripdir_core::date_span::DateSpan;
use tripdir_core::tripdir::{TripDir, TripHandle};

/// Book a person into a room.
pub fn run(handle: TripHandle, person: &str, room: &str, from: &str, to: &str) -> Result<()> {
    let tripdir = TripDir::load()?;
    let store = handle.store();

    let person = find_person(&store, person)?;
    let room = find_room(&store, room)?;
    let span = DateSpan::parse(from, to)?;

    let engine = BookingEngine::new(&store, tripdir.config().capacity_policy);
    let booking = engine.create_assignment(BookingRequest {
        room_id: room.id,
        person_id: person.id,
        span,
    })?;

    println!(
        "Booked {} into {} from {} to {}",
        person.name.green(),
        room.name,
        span.start,
        span.end
    );
    report_notes(&handle, &booking.assignment, booking.capacity_warning.as_ref());

    Ok(())
}

/// Move or re-date an existing booking.
pub fn rerun(
    handle: TripHandle,
    assignment_id: &str,
    room: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let tripdir = TripDir::load()?;
    let store = handle.store();

    let current: RoomAssignment = store.get(assignment_id)?;
    let room = match room {
        Some(name) => find_room(&store, name)?,
        None => store.get(&current.room_id)?,
    };
    let span = DateSpan::new(
        from.map(tripdir_core::date_span::parse_date).transpose()?.unwrap_or(current.start_date),
        to.map(tripdir_core::date_span::parse_date).transpose()?.unwrap_or(current.end_date),
    )?;

    let engine = BookingEngine::new(&store, tripdir.config().capacity_policy);
    let booking = engine.update_assignment(
        assignment_id,
        BookingRequest {
            room_id: room.id,
            person_id: current.person_id,
            span,
        },
    )?;

    println!(
        "Moved booking to {} from {} to {}",
        room.name.green(),
        span.start,
        span.end
    );
    report_notes(&handle, &booking.assignment, booking.capacity_warning.as_ref());

    Ok(())
}

/// Remove a booking.
pub fn remove(handle: TripHandle, assignment_id: &str) -> Result<()> {
    let tripdir = TripDir::load()?;
    let store = handle.store();
    let engine = BookingEngine::new(&store, tripdir.config().capacity_policy);
    engine.remove_assignment(assignment_id)?;
    println!("Removed booking {}", assignment_id.red());
    Ok(())
}

fn report_notes(
    handle: &TripHandle,
    assignment: &RoomAssignment,
    warning: Option<&tripdir_core::booking::CapacityWarning>,
) {
    if let Some(warning) = warning {
        println!("   {}", warning.render());
    }
    // Booking outside the trip's own dates is allowed, just worth a note.
    if !handle.trip.covers(&assignment.span()) {
        println!(
            "   {}",
            format!(
                "Note: outside the trip dates ({} to {})",
                handle.trip.start_date, handle.trip.end_date
            )
            .dimmed()
        );
    }
}
