//! The booking conflict engine.
//!
//! Decides whether a person can be booked into a room for a range of nights
//! without double-booking them, and applies the configured capacity policy.
//! Assignments are read fresh from the store on every check, so a check is
//! consistent with the latest committed state at check time. There is no
//! lock against concurrent writers; the last write wins.

use serde::{Deserialize, Serialize};

use crate::assignment::{self, RoomAssignment};
use crate::date_span::DateSpan;
use crate::error::{TripDirError, TripDirResult};
use crate::ids;
use crate::person::Person;
use crate::room::Room;
use crate::store::TripStore;

/// How to treat bookings that push a room past its capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// Book anyway and attach a warning to the result.
    #[default]
    Warn,
    /// Refuse the booking.
    Block,
}

/// A requested booking.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: String,
    pub person_id: String,
    pub span: DateSpan,
}

/// A room booked past its capacity on at least one night.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityWarning {
    pub room_name: String,
    pub capacity: u32,
    pub peak: u32,
}

/// The outcome of a successful booking.
#[derive(Debug, Clone)]
pub struct Booking {
    pub assignment: RoomAssignment,
    pub capacity_warning: Option<CapacityWarning>,
}

pub struct BookingEngine<'a> {
    store: &'a TripStore,
    policy: CapacityPolicy,
}

impl<'a> BookingEngine<'a> {
    pub fn new(store: &'a TripStore, policy: CapacityPolicy) -> Self {
        BookingEngine { store, policy }
    }

    /// Whether booking `person_id` for `span` overlaps one of their
    /// existing assignments, ignoring `exclude`. Read-only.
    pub fn check_conflict(
        &self,
        person_id: &str,
        span: &DateSpan,
        exclude: Option<&str>,
    ) -> TripDirResult<bool> {
        let existing = self.store.assignments_for_person(person_id)?;
        Ok(assignment::check_conflict(
            &existing, person_id, span, exclude,
        ))
    }

    /// Book a person into a room. Fails with `Conflict` when the person is
    /// already somewhere else on one of the nights, and with `NotFound`
    /// when the room or person is not part of this trip.
    pub fn create_assignment(&self, request: BookingRequest) -> TripDirResult<Booking> {
        let trip = self.store.load_trip()?;
        let room: Room = self.store.get(&request.room_id)?;
        let person: Person = self.store.get(&request.person_id)?;

        self.ensure_no_conflict(&person, &request.span, None)?;
        let capacity_warning = self.apply_capacity_policy(&room, &request.span, None)?;

        let id = ids::generate_unique_id(
            |id| self.store.exists::<RoomAssignment>(id),
            ids::ID_ATTEMPTS,
        )?;
        let booked = RoomAssignment {
            id,
            trip_id: trip.id,
            room_id: room.id,
            person_id: person.id,
            start_date: request.span.start,
            end_date: request.span.end,
        };
        self.store.create(&booked)?;

        Ok(Booking {
            assignment: booked,
            capacity_warning,
        })
    }

    /// Re-book an existing assignment (new room and/or new dates). The
    /// assignment's own nights are excluded from the conflict check, so
    /// shifting a stay by a day never collides with itself.
    pub fn update_assignment(
        &self,
        assignment_id: &str,
        request: BookingRequest,
    ) -> TripDirResult<Booking> {
        let mut booked: RoomAssignment = self.store.get(assignment_id)?;
        let room: Room = self.store.get(&request.room_id)?;
        let person: Person = self.store.get(&request.person_id)?;

        self.ensure_no_conflict(&person, &request.span, Some(assignment_id))?;
        let capacity_warning =
            self.apply_capacity_policy(&room, &request.span, Some(assignment_id))?;

        booked.room_id = room.id;
        booked.person_id = person.id;
        booked.start_date = request.span.start;
        booked.end_date = request.span.end;
        self.store.update(&booked)?;

        Ok(Booking {
            assignment: booked,
            capacity_warning,
        })
    }

    /// Remove a booking.
    pub fn remove_assignment(&self, assignment_id: &str) -> TripDirResult<()> {
        self.store.delete::<RoomAssignment>(assignment_id)
    }

    fn ensure_no_conflict(
        &self,
        person: &Person,
        span: &DateSpan,
        exclude: Option<&str>,
    ) -> TripDirResult<()> {
        let existing = self.store.assignments_for_person(&person.id)?;
        if let Some(hit) = assignment::find_conflict(&existing, &person.id, span, exclude) {
            return Err(TripDirError::Conflict {
                person_name: person.name.clone(),
                start: hit.start_date,
                end: hit.end_date,
            });
        }
        Ok(())
    }

    fn apply_capacity_policy(
        &self,
        room: &Room,
        span: &DateSpan,
        exclude: Option<&str>,
    ) -> TripDirResult<Option<CapacityWarning>> {
        let mut others = self.store.list::<RoomAssignment>()?;
        if let Some(excluded) = exclude {
            others.retain(|a| a.id != excluded);
        }

        // The candidate occupies every night of its own span.
        let peak = assignment::peak_occupancy(&others, &room.id, span) + 1;
        if peak <= room.capacity {
            return Ok(None);
        }

        match self.policy {
            CapacityPolicy::Warn => Ok(Some(CapacityWarning {
                room_name: room.name.clone(),
                capacity: room.capacity,
                peak,
            })),
            CapacityPolicy::Block => Err(TripDirError::Validation(format!(
                "{} sleeps {} but would hold {} people",
                room.name, room.capacity, peak
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Trip;

    struct Fixture {
        _tmp: tempfile::TempDir,
        store: TripStore,
        room_a: Room,
        room_b: Room,
        ada: Person,
        ben: Person,
    }

    fn make_test_trip() -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let span = DateSpan::parse("2024-07-01", "2024-07-31").unwrap();
        let trip = Trip::new("Brittany", span).unwrap();
        let store = TripStore::init(tmp.path().join("brittany"), &trip).unwrap();

        let room_a = Room::new(&trip.id, "Attic", 2).unwrap();
        let room_b = Room::new(&trip.id, "Cellar", 1).unwrap();
        let ada = Person::new(&trip.id, "Ada").unwrap();
        let ben = Person::new(&trip.id, "Ben").unwrap();
        for room in [&room_a, &room_b] {
            store.create(room).unwrap();
        }
        for person in [&ada, &ben] {
            store.create(person).unwrap();
        }

        Fixture {
            _tmp: tmp,
            store,
            room_a,
            room_b,
            ada,
            ben,
        }
    }

    fn request(room: &Room, person: &Person, from: &str, to: &str) -> BookingRequest {
        BookingRequest {
            room_id: room.id.clone(),
            person_id: person.id.clone(),
            span: DateSpan::parse(from, to).unwrap(),
        }
    }

    #[test]
    fn test_create_then_overlap_conflicts() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);

        engine
            .create_assignment(request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20"))
            .unwrap();

        // Overlap on the 18th and 19th, even though it is a different room.
        let err = engine
            .create_assignment(request(&f.room_b, &f.ada, "2024-07-18", "2024-07-25"))
            .unwrap_err();
        assert!(matches!(err, TripDirError::Conflict { .. }));

        // Back-to-back is fine.
        engine
            .create_assignment(request(&f.room_b, &f.ada, "2024-07-20", "2024-07-25"))
            .unwrap();
    }

    #[test]
    fn test_check_conflict_matches_create_behavior() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);
        engine
            .create_assignment(request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20"))
            .unwrap();

        let overlap = DateSpan::parse("2024-07-18", "2024-07-25").unwrap();
        let boundary = DateSpan::parse("2024-07-20", "2024-07-25").unwrap();
        assert!(engine.check_conflict(&f.ada.id, &overlap, None).unwrap());
        assert!(!engine.check_conflict(&f.ada.id, &boundary, None).unwrap());
        assert!(!engine.check_conflict(&f.ben.id, &overlap, None).unwrap());
    }

    #[test]
    fn test_update_excludes_itself() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);
        let booking = engine
            .create_assignment(request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20"))
            .unwrap();

        // Shifting the same stay by a day must not collide with itself.
        let updated = engine
            .update_assignment(
                &booking.assignment.id,
                request(&f.room_a, &f.ada, "2024-07-16", "2024-07-21"),
            )
            .unwrap();
        assert_eq!(updated.assignment.id, booking.assignment.id);

        let stored = f
            .store
            .get::<RoomAssignment>(&booking.assignment.id)
            .unwrap();
        assert_eq!(stored.span(), DateSpan::parse("2024-07-16", "2024-07-21").unwrap());
    }

    #[test]
    fn test_update_missing_assignment_is_not_found() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);
        let err = engine
            .update_assignment(
                "gone",
                request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20"),
            )
            .unwrap_err();
        assert!(matches!(err, TripDirError::NotFound { .. }));
    }

    #[test]
    fn test_unknown_room_or_person_is_not_found() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);

        let mut bad_room = request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20");
        bad_room.room_id = "missing".to_string();
        assert!(matches!(
            engine.create_assignment(bad_room),
            Err(TripDirError::NotFound { .. })
        ));

        let mut bad_person = request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20");
        bad_person.person_id = "missing".to_string();
        assert!(matches!(
            engine.create_assignment(bad_person),
            Err(TripDirError::NotFound { .. })
        ));
    }

    #[test]
    fn test_capacity_warn_books_with_warning() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);

        // Cellar sleeps one; the second booking goes through with a warning.
        engine
            .create_assignment(request(&f.room_b, &f.ada, "2024-07-15", "2024-07-20"))
            .unwrap();
        let booking = engine
            .create_assignment(request(&f.room_b, &f.ben, "2024-07-18", "2024-07-22"))
            .unwrap();

        let warning = booking.capacity_warning.unwrap();
        assert_eq!(warning.capacity, 1);
        assert_eq!(warning.peak, 2);
    }

    #[test]
    fn test_capacity_block_refuses() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Block);

        engine
            .create_assignment(request(&f.room_b, &f.ada, "2024-07-15", "2024-07-20"))
            .unwrap();
        let err = engine
            .create_assignment(request(&f.room_b, &f.ben, "2024-07-18", "2024-07-22"))
            .unwrap_err();
        assert!(matches!(err, TripDirError::Validation(_)));

        // Nothing was written for the refused booking.
        assert_eq!(f.store.list::<RoomAssignment>().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_assignment() {
        let f = make_test_trip();
        let engine = BookingEngine::new(&f.store, CapacityPolicy::Warn);
        let booking = engine
            .create_assignment(request(&f.room_a, &f.ada, "2024-07-15", "2024-07-20"))
            .unwrap();
        engine.remove_assignment(&booking.assignment.id).unwrap();
        assert!(f.store.list::<RoomAssignment>().unwrap().is_empty());
    }
}
