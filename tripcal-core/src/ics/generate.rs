//! ICS calendar generation.

use crate::error::{TripcalError, TripcalResult};
use crate::event::ItineraryEvent;
use chrono::{Datelike, NaiveDate};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

/// Product identifier emitted in generated calendars.
const PRODID: &str = "-//tripcal//itinerary-to-ics//";

/// Render events into a single VCALENDAR document.
///
/// Components appear in the same order as `events`. Each VEVENT carries
/// SUMMARY, DESCRIPTION, date-only DTSTART/DTEND, DTSTAMP, and a
/// deterministic UID.
pub fn generate_ics(events: &[ItineraryEvent]) -> TripcalResult<String> {
    let mut cal = Calendar::new();

    for (position, event) in events.iter().enumerate() {
        let start = format_ics_date(event.start)?;
        let end = format_ics_date(event.end)?;

        let mut ics_event = icalendar::Event::new();

        // Deterministic UID: repeated runs over the same input produce the
        // same identifiers, and duplicate day numbers still get distinct
        // components.
        ics_event.uid(&format!("{}-{}@tripcal", position, start));
        ics_event.summary(&event.summary);
        ics_event.description(&event.description);

        add_date_property(&mut ics_event, "DTSTART", &start);
        add_date_property(&mut ics_event, "DTEND", &end);

        // DTSTAMP - required by RFC 5545, wall-clock time of synthesis
        let dtstamp = event.stamp.format("%Y%m%dT%H%M%SZ").to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    Ok(rewrite_wrapper_properties(&cal.to_string()))
}

/// Clean up ICS output from the icalendar crate
/// - Replace its default PRODID with ours
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn rewrite_wrapper_properties(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
        } else if line == "CALSCALE:GREGORIAN" {
            continue;
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}

/// Add a date-only property (VALUE=DATE, no time-of-day component).
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, value: &str) {
    let mut prop = Property::new(name, value);
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Format a date in the RFC 5545 DATE grammar (YYYYMMDD).
///
/// Years outside 0000-9999 exist in chrono but have no representation in
/// that grammar.
fn format_ics_date(date: NaiveDate) -> TripcalResult<String> {
    if !(0..=9999).contains(&date.year()) {
        return Err(TripcalError::IcsGenerate(format!(
            "date {date} cannot be written as an RFC 5545 DATE"
        )));
    }

    Ok(date.format("%Y%m%d").to_string())
}
