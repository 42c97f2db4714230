use std::sync::LazyLock;

use regex::Regex;

use super::{ProfileView, Rule};

static CITY_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?: [A-Z][a-z]+)*,\s*[A-Z]").unwrap());

const LOCATION_WINDOW: usize = 20;
const MAX_UNMARKED_LEN: usize = 60;
const REGION_MARKERS: &[&str] = &[
    "Australia",
    "Canada",
    "USA",
    "United States",
    "UK",
    "India",
    "Area",
];

pub const RULES: &[Rule<String>] = &[Rule {
    name: "city_comma_region",
    apply: city_comma_region,
}];

fn city_comma_region(view: &ProfileView<'_>) -> Option<String> {
    view.head(LOCATION_WINDOW)
        .iter()
        .find(|line| is_location(line))
        .cloned()
}

/// "City, Region..." lines; the city may be several capitalized words. A known country or "Area" is enough; otherwise the line must be short.
pub fn is_location(line: &str) -> bool {
    if !CITY_COMMA_RE.is_match(line) || line.contains("Summary") {
        return false;
    }
    REGION_MARKERS.iter().any(|m| line.contains(m))
        || (line.contains(", ") && line.chars().count() < MAX_UNMARKED_LEN)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::fixture;

    fn location_of(lines: &[&str]) -> Option<String> {
        let (raw, lines, sections) = fixture(lines);
        let view = ProfileView { raw: &raw, lines: &lines, sections: &sections };
        city_comma_region(&view)
    }

    #[test]
    fn accepts_city_and_state() {
        assert!(is_location("San Francisco, California"));
        assert!(is_location("Toronto, Ontario, Canada"));
        assert!(is_location("Sydney,Australia"));
        assert!(is_location("New York, New York, United States"));
        assert!(is_location("Salt Lake City, Utah"));
    }

    #[test]
    fn multi_word_city_must_be_capitalized() {
        assert!(!is_location("San francisco, California"));
        assert!(!is_location("San  Francisco, California"));
        assert!(!is_location("Contact Jane A. Doe, Toronto"));
    }

    #[test]
    fn rejects_non_matching_shapes() {
        assert!(!is_location("john smith, ca"));
        assert!(!is_location("New York City"));
        assert!(!is_location("Summary, Overview"));
        assert!(!is_location("SAN FRANCISCO, CA"));
    }

    #[test]
    fn long_line_needs_a_marker() {
        let long = format!("Berlin, {}", "x".repeat(60));
        assert!(!is_location(&long));
        let long_marked = format!("Greater, Toronto Area {}", "x".repeat(60));
        assert!(is_location(&long_marked));
    }

    #[test]
    fn no_space_after_comma_needs_a_marker() {
        assert!(!is_location("Berlin,Germany"));
        assert!(is_location("Pune,India"));
    }

    #[test]
    fn first_qualifying_line_wins() {
        let loc = location_of(&["Jane Doe", "Engineer", "Austin, Texas", "Paris, France"]);
        assert_eq!(loc.as_deref(), Some("Austin, Texas"));
    }

    #[test]
    fn outside_window_is_ignored() {
        let mut lines = vec!["filler"; 20];
        lines.push("Austin, Texas");
        assert!(location_of(&lines).is_none());
    }
}
