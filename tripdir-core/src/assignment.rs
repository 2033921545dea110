//! Room assignments and the overlap predicates behind conflict checking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_span::DateSpan;

/// A booking of one person into one room for a half-open range of nights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAssignment {
    pub id: String,
    pub trip_id: String,
    pub room_id: String,
    pub person_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RoomAssignment {
    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Find the first assignment of `person_id` whose nights overlap `span`,
/// ignoring `exclude` (the assignment being edited, if any).
pub fn find_conflict<'a>(
    assignments: &'a [RoomAssignment],
    person_id: &str,
    span: &DateSpan,
    exclude: Option<&str>,
) -> Option<&'a RoomAssignment> {
    assignments.iter().find(|a| {
        a.person_id == person_id
            && exclude != Some(a.id.as_str())
            && a.span().overlaps(span)
    })
}

/// Whether booking `person_id` for `span` would double-book them.
pub fn check_conflict(
    assignments: &[RoomAssignment],
    person_id: &str,
    span: &DateSpan,
    exclude: Option<&str>,
) -> bool {
    find_conflict(assignments, person_id, span, exclude).is_some()
}

/// Peak number of the given assignments occupying `room_id` on any single
/// night of `span`. The candidate booking itself is not counted here.
pub fn peak_occupancy(assignments: &[RoomAssignment], room_id: &str, span: &DateSpan) -> u32 {
    span.nights_iter()
        .map(|night| {
            assignments
                .iter()
                .filter(|a| a.room_id == room_id && a.span().covers_night(night))
                .count() as u32
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(from: &str, to: &str) -> DateSpan {
        DateSpan::parse(from, to).unwrap()
    }

    fn assignment(id: &str, room: &str, person: &str, from: &str, to: &str) -> RoomAssignment {
        let s = span(from, to);
        RoomAssignment {
            id: id.to_string(),
            trip_id: "trip".to_string(),
            room_id: room.to_string(),
            person_id: person.to_string(),
            start_date: s.start,
            end_date: s.end,
        }
    }

    #[test]
    fn test_overlapping_booking_for_same_person_conflicts() {
        // P stays in room A from the 15th to the 20th. Booking P into room
        // B from the 18th would have them in two places on the 18th/19th.
        let existing = vec![assignment("a1", "room-a", "p", "2024-07-15", "2024-07-20")];
        assert!(check_conflict(
            &existing,
            "p",
            &span("2024-07-18", "2024-07-25"),
            None
        ));
    }

    #[test]
    fn test_checkout_day_checkin_does_not_conflict() {
        let existing = vec![assignment("a1", "room-a", "p", "2024-07-15", "2024-07-20")];
        assert!(!check_conflict(
            &existing,
            "p",
            &span("2024-07-20", "2024-07-25"),
            None
        ));
    }

    #[test]
    fn test_other_people_do_not_conflict() {
        let existing = vec![assignment("a1", "room-a", "p", "2024-07-15", "2024-07-20")];
        assert!(!check_conflict(
            &existing,
            "q",
            &span("2024-07-15", "2024-07-20"),
            None
        ));
    }

    #[test]
    fn test_excluded_assignment_never_conflicts_with_itself() {
        let existing = vec![assignment("a1", "room-a", "p", "2024-07-15", "2024-07-20")];
        // Editing a1's own dates must not report a conflict against a1.
        assert!(!check_conflict(
            &existing,
            "p",
            &span("2024-07-16", "2024-07-21"),
            Some("a1")
        ));
        // A second booking is still caught while a1 is excluded.
        let two = vec![
            assignment("a1", "room-a", "p", "2024-07-15", "2024-07-20"),
            assignment("a2", "room-b", "p", "2024-07-22", "2024-07-25"),
        ];
        assert!(check_conflict(
            &two,
            "p",
            &span("2024-07-19", "2024-07-23"),
            Some("a1")
        ));
    }

    #[test]
    fn test_find_conflict_returns_the_blocking_booking() {
        let existing = vec![
            assignment("a1", "room-a", "p", "2024-07-10", "2024-07-12"),
            assignment("a2", "room-a", "p", "2024-07-15", "2024-07-20"),
        ];
        let hit = find_conflict(&existing, "p", &span("2024-07-18", "2024-07-25"), None);
        assert_eq!(hit.map(|a| a.id.as_str()), Some("a2"));
    }

    #[test]
    fn test_peak_occupancy() {
        let assignments = vec![
            assignment("a1", "room-a", "p1", "2024-07-15", "2024-07-20"),
            assignment("a2", "room-a", "p2", "2024-07-18", "2024-07-22"),
            assignment("a3", "room-b", "p3", "2024-07-15", "2024-07-22"),
        ];
        // Nights 18 and 19 have both p1 and p2 in room A.
        assert_eq!(
            peak_occupancy(&assignments, "room-a", &span("2024-07-15", "2024-07-22")),
            2
        );
        // Before the 18th only p1 is there.
        assert_eq!(
            peak_occupancy(&assignments, "room-a", &span("2024-07-15", "2024-07-18")),
            1
        );
        assert_eq!(
            peak_occupancy(&assignments, "room-c", &span("2024-07-15", "2024-07-18")),
            0
        );
    }
}
