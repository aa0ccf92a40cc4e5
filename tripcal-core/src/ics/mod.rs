//! ICS calendar generation.
//!
//! This module handles writing .ics calendars according to RFC 5545.

mod generate;

pub use generate::generate_ics;
