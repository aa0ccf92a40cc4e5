//! Core itinerary-to-calendar conversion for the tripcal ecosystem.
//!
//! This crate turns free-form, day-labeled travel itinerary text into an
//! RFC 5545 calendar that external calendar applications can import:
//! - `itinerary` extracts day-labeled segments from the text
//! - `event` maps segments (or the whole text, as a fallback) to dated
//!   all-day events
//! - `ics` serializes the events into .ics bytes

pub mod error;
pub mod event;
pub mod ics;
pub mod itinerary;

pub use error::{TripcalError, TripcalResult};
pub use event::{ItineraryEvent, synthesize};
pub use itinerary::{DaySegment, extract_days};

use chrono::{NaiveDate, Utc};

/// Generate an .ics calendar from itinerary text.
///
/// Day N in the text lands on `start_date + (N - 1)` days; `start_date`
/// defaults to today (UTC) when not given. Text without any day labels
/// yields a calendar with a single whole-trip event, so the result always
/// contains at least one component.
pub fn generate_calendar(text: &str, start_date: Option<NaiveDate>) -> TripcalResult<Vec<u8>> {
    let start = start_date.unwrap_or_else(|| Utc::now().date_naive());

    let segments = itinerary::extract_days(text);
    let events = event::synthesize(text, &segments, start)?;
    let ics = ics::generate_ics(&events)?;

    Ok(ics.into_bytes())
}
