use std::sync::LazyLock;

use regex::Regex;

use super::{ProfileView, Rule};

static PROFILE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/([a-zA-Z0-9\-]+)").unwrap());

pub const RULES: &[Rule<String>] = &[Rule {
    name: "profile_url",
    apply: profile_url,
}];

/// Searches the whole raw text, not just the leading lines.
fn profile_url(view: &ProfileView<'_>) -> Option<String> {
    let caps = PROFILE_URL_RE.captures(view.raw)?;
    Some(canonical_url(&caps[1]))
}

pub fn canonical_url(handle: &str) -> String {
    format!("https://www.linkedin.com/in/{}", handle)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::fixture;

    fn url_of(lines: &[&str]) -> Option<String> {
        let (raw, lines, sections) = fixture(lines);
        let view = ProfileView { raw: &raw, lines: &lines, sections: &sections };
        profile_url(&view)
    }

    #[test]
    fn normalizes_handle() {
        assert_eq!(
            url_of(&["Contact", "www.linkedin.com/in/jane-doe-42 (LinkedIn)"]).as_deref(),
            Some("https://www.linkedin.com/in/jane-doe-42")
        );
    }

    #[test]
    fn first_match_wins_anywhere_in_text() {
        let mut lines = vec!["filler"; 40];
        lines.push("linkedin.com/in/first");
        lines.push("https://linkedin.com/in/second");
        assert_eq!(
            url_of(&lines).as_deref(),
            Some("https://www.linkedin.com/in/first")
        );
    }

    #[test]
    fn absent_without_profile_path() {
        assert!(url_of(&["Jane Doe", "linkedin.com/company/acme", "LinkedIn"]).is_none());
    }

    #[test]
    fn handle_stops_at_other_characters() {
        assert_eq!(
            url_of(&["linkedin.com/in/jane_doe"]).as_deref(),
            Some("https://www.linkedin.com/in/jane")
        );
    }
}
