//! Day segment extraction from free-form itinerary text.
//!
//! Itinerary text produced by planners (human or otherwise) tends to be
//! loosely structured prose with day markers like "Day 1:" scattered
//! through it. This module finds those markers and slices the text into
//! per-day segments without interpreting the content itself.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A day-labeled slice of itinerary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// 1-based day number, as written in the label
    pub day_index: u64,
    /// Trimmed text between this label and the next
    pub content: String,
}

/// A full day label: the literal word "Day", a space, digits, then a run of
/// colons/whitespace separating the label from its content.
static DAY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Day (\d+)[:\s]+").expect("Invalid regex"));

/// Start of the next day marker, which terminates the previous segment's
/// content. The separator is not required here: "Day 3" at the very end of
/// the text still closes the segment before it.
static NEXT_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Day \d+").expect("Invalid regex"));

/// Scan `text` left to right for day labels and return one segment per
/// label, in document order.
///
/// Matching is case-sensitive and not anchored to line starts; labels in
/// the middle of a line work. Duplicate or out-of-order day numbers are
/// passed through untouched. An empty result means no labels matched and
/// the caller should fall back to a single whole-text event.
pub fn extract_days(text: &str) -> Vec<DaySegment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some(caps) = DAY_LABEL.captures_at(text, pos) {
        let label = caps.get(0).expect("match always has a full capture");

        // Digit runs too long for u64 saturate; the date-range check at
        // synthesis rejects anything of that magnitude.
        let day_index = caps[1].parse::<u64>().unwrap_or(u64::MAX);

        let content_start = label.end();
        let content_end = NEXT_DAY
            .find_at(text, content_start)
            .map(|m| m.start())
            .unwrap_or(text.len());

        segments.push(DaySegment {
            day_index,
            content: text[content_start..content_end].trim().to_string(),
        });

        pos = content_end;
    }

    segments
}
