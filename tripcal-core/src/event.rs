//! Calendar event synthesis from extracted day segments.

use crate::error::{TripcalError, TripcalResult};
use crate::itinerary::DaySegment;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Summary used for the whole-trip fallback event.
const FALLBACK_SUMMARY: &str = "Travel Itinerary";

/// A single all-day itinerary event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEvent {
    pub summary: String,
    pub description: String,
    /// Calendar date of the event (all-day, no time component)
    pub start: NaiveDate,
    /// Same as `start`; itinerary events never span multiple days
    pub end: NaiveDate,
    /// Wall-clock time the event was synthesized (DTSTAMP)
    pub stamp: DateTime<Utc>,
}

/// Turn extracted segments into dated events, one per segment in the order
/// received.
///
/// Day N lands on `start_date + (N - 1)` days. When `segments` is empty the
/// result is a single fallback event carrying the verbatim `text` as its
/// description, dated at `start_date`. Duplicate day numbers produce
/// duplicate-dated events; that is pass-through behavior, not an error.
pub fn synthesize(
    text: &str,
    segments: &[DaySegment],
    start_date: NaiveDate,
) -> TripcalResult<Vec<ItineraryEvent>> {
    let stamp = Utc::now();

    if segments.is_empty() {
        return Ok(vec![ItineraryEvent {
            summary: FALLBACK_SUMMARY.to_string(),
            description: text.to_string(),
            start: start_date,
            end: start_date,
            stamp,
        }]);
    }

    segments
        .iter()
        .map(|segment| {
            let date = event_date(start_date, segment.day_index)?;
            Ok(ItineraryEvent {
                summary: format!("Day {} Itinerary", segment.day_index),
                description: segment.content.clone(),
                start: date,
                end: date,
                stamp,
            })
        })
        .collect()
}

/// Compute the calendar date for a 1-based day number.
///
/// Day 0 would land before the start date and days past the chrono range
/// cannot be represented; both are rejected, never clamped.
fn event_date(start_date: NaiveDate, day_index: u64) -> TripcalResult<NaiveDate> {
    day_index
        .checked_sub(1)
        .and_then(|offset| start_date.checked_add_days(Days::new(offset)))
        .ok_or(TripcalError::DateOutOfRange {
            day: day_index,
            start: start_date,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::extract_days;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_fallback_event_for_unstructured_text() {
        let text = "Just a description of the trip,\nno day markers at all.";
        let events = synthesize(text, &[], start()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Travel Itinerary");
        assert_eq!(events[0].description, text, "fallback keeps the text verbatim");
        assert_eq!(events[0].start, start());
        assert_eq!(events[0].end, start());
    }

    #[test]
    fn test_day_numbers_map_to_consecutive_dates() {
        let text = "Day 1: Visit museum\nDay 2: Beach day\nDay 3: Departure";
        let events = synthesize(text, &extract_days(text), start()).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(events[1].start, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(events[2].start, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(events[0].summary, "Day 1 Itinerary");
        assert_eq!(events[1].summary, "Day 2 Itinerary");
        assert_eq!(events[2].summary, "Day 3 Itinerary");
    }

    #[test]
    fn test_events_are_single_day() {
        let text = "Day 5: Long travel day";
        for event in synthesize(text, &extract_days(text), start()).unwrap() {
            assert_eq!(event.start, event.end);
        }
    }

    #[test]
    fn test_gap_in_day_numbers_respected() {
        let text = "Day 1: Arrive\nDay 7: Depart";
        let events = synthesize(text, &extract_days(text), start()).unwrap();

        assert_eq!(events[1].start, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
    }

    #[test]
    fn test_duplicate_days_share_a_date() {
        let text = "Day 1: Museum\nDay 1: Dinner";
        let events = synthesize(text, &extract_days(text), start()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start, events[1].start);
        assert_eq!(events[0].description, "Museum");
        assert_eq!(events[1].description, "Dinner");
    }

    #[test]
    fn test_day_zero_rejected() {
        let text = "Day 0: Packing";
        let err = synthesize(text, &extract_days(text), start()).unwrap_err();

        assert!(matches!(err, TripcalError::DateOutOfRange { day: 0, .. }));
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        let text = "Day 999999999: X";
        let err = synthesize(text, &extract_days(text), start()).unwrap_err();

        assert!(
            matches!(err, TripcalError::DateOutOfRange { day: 999999999, .. }),
            "expected DateOutOfRange, got {err:?}"
        );
    }

    #[test]
    fn test_stamp_shared_within_one_synthesis() {
        let text = "Day 1: A\nDay 2: B";
        let events = synthesize(text, &extract_days(text), start()).unwrap();

        assert_eq!(events[0].stamp, events[1].stamp);
    }
}
