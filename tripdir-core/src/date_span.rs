//! Half-open calendar-day ranges.
//!
//! A `DateSpan` covers the nights from `start` (inclusive, the check-in
//! night) through `end` (exclusive, the check-out morning). Two spans that
//! meet exactly at a boundary do not overlap: checking out on the 20th and
//! checking in somewhere else on the 20th is fine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TripDirError, TripDirResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Build a span, rejecting empty or inverted ranges.
    pub fn new(start: NaiveDate, end: NaiveDate) -> TripDirResult<Self> {
        if start >= end {
            return Err(TripDirError::Validation(format!(
                "Date range must cover at least one night (got {start} to {end})"
            )));
        }
        Ok(DateSpan { start, end })
    }

    /// Parse YYYY-MM-DD bounds into a span.
    pub fn parse(from: &str, to: &str) -> TripDirResult<Self> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// Half-open interval overlap: two spans conflict iff each starts
    /// before the other ends.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Number of nights covered.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `day` is one of the covered nights.
    pub fn covers_night(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// The covered nights in order.
    pub fn nights_iter(&self) -> impl Iterator<Item = NaiveDate> {
        let mut current = self.start;
        let end = self.end;
        std::iter::from_fn(move || {
            if current < end {
                let night = current;
                current = current.succ_opt()?;
                Some(night)
            } else {
                None
            }
        })
    }
}

/// Parse a YYYY-MM-DD calendar day.
pub fn parse_date(s: &str) -> TripDirResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TripDirError::Validation(format!("Invalid date '{s}'. Expected YYYY-MM-DD"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn span(from: &str, to: &str) -> DateSpan {
        DateSpan::new(day(from), day(to)).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_inverted_ranges() {
        assert!(DateSpan::new(day("2024-07-15"), day("2024-07-15")).is_err());
        assert!(DateSpan::new(day("2024-07-20"), day("2024-07-15")).is_err());
    }

    #[test]
    fn test_overlap_on_shared_nights() {
        let a = span("2024-07-15", "2024-07-20");
        let b = span("2024-07-18", "2024-07-25");
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_no_overlap_at_exact_boundary() {
        // Checkout morning of the 20th is also a valid check-in night.
        let a = span("2024-07-15", "2024-07-20");
        let b = span("2024-07-20", "2024-07-25");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let spans = [
            span("2024-07-01", "2024-07-05"),
            span("2024-07-04", "2024-07-08"),
            span("2024-07-05", "2024-07-06"),
            span("2024-07-10", "2024-07-12"),
        ];
        for a in &spans {
            for b in &spans {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = span("2024-07-01", "2024-07-31");
        let inner = span("2024-07-10", "2024-07-12");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_nights() {
        assert_eq!(span("2024-07-15", "2024-07-20").nights(), 5);
        assert_eq!(span("2024-07-15", "2024-07-16").nights(), 1);
        let nights: Vec<_> = span("2024-07-15", "2024-07-18").nights_iter().collect();
        assert_eq!(
            nights,
            vec![day("2024-07-15"), day("2024-07-16"), day("2024-07-17")]
        );
    }

    #[test]
    fn test_parse_rejects_bad_dates() {
        assert!(DateSpan::parse("2024-07-15", "2024-07-20").is_ok());
        assert!(DateSpan::parse("15/07/2024", "2024-07-20").is_err());
        assert!(DateSpan::parse("2024-07-15", "not-a-date").is_err());
    }
}
