//! Output filename helpers.

use std::path::Path;

/// Build the default output filename: `{slug}_itinerary.ics`.
///
/// The slug comes from the trip name when given, else the input file's
/// stem, else "travel" (stdin input has no usable name).
pub fn default_filename(name: Option<&str>, input: Option<&Path>) -> String {
    let base = name
        .map(str::to_string)
        .or_else(|| {
            input
                .filter(|p| p.as_os_str() != "-")
                .and_then(|p| p.file_stem())
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "travel".to_string());

    format!("{}_itinerary.ics", slugify(&base))
}

/// Convert a string to a filename-safe slug
fn slugify(s: &str) -> String {
    let slug: String = s
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50) // Limit slug length
        .collect();

    if slug.is_empty() {
        "travel".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_name_beats_input_stem() {
        let input = PathBuf::from("plan.txt");
        assert_eq!(
            default_filename(Some("Kyoto, Japan"), Some(&input)),
            "kyoto-japan_itinerary.ics"
        );
    }

    #[test]
    fn test_input_stem_used_without_name() {
        let input = PathBuf::from("notes/kyoto_plan.txt");
        assert_eq!(
            default_filename(None, Some(&input)),
            "kyoto-plan_itinerary.ics"
        );
    }

    #[test]
    fn test_stdin_falls_back_to_travel() {
        assert_eq!(default_filename(None, None), "travel_itinerary.ics");
        let dash = PathBuf::from("-");
        assert_eq!(default_filename(None, Some(&dash)), "travel_itinerary.ics");
    }

    #[test]
    fn test_punctuation_only_name_falls_back() {
        assert_eq!(default_filename(Some("!!!"), None), "travel_itinerary.ics");
    }
}
