pub mod certifications;
pub mod education;
pub mod headline;
pub mod linkedin;
pub mod location;
pub mod name;
pub mod skills;
pub mod summary;

use tracing::trace;

use super::sections::SectionSpans;

/// Read-only view every rule works from.
#[derive(Debug, Clone, Copy)]
pub struct ProfileView<'a> {
    /// Text as extracted, before line normalization.
    pub raw: &'a str,
    pub lines: &'a [String],
    pub sections: &'a SectionSpans,
}

impl<'a> ProfileView<'a> {
    /// The first `n` lines (fewer if the document is shorter).
    pub fn head(&self, n: usize) -> &'a [String] {
        &self.lines[..n.min(self.lines.len())]
    }
}

/// A named heuristic. Returning `None` means the pattern was not there.
pub struct Rule<T> {
    pub name: &'static str,
    pub apply: fn(&ProfileView<'_>) -> Option<T>,
}

/// Run `rules` in order and keep the first hit.
pub fn first_match<T>(field: &str, rules: &[Rule<T>], view: &ProfileView<'_>) -> Option<T> {
    rules.iter().find_map(|rule| {
        let hit = (rule.apply)(view);
        if hit.is_some() {
            trace!(field, rule = rule.name, "rule matched");
        }
        hit
    })
}

/// Everything the rules produced for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: Option<name::PersonName>,
    pub linkedin_link: Option<String>,
    pub headline: Option<headline::Headline>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub education: education::Education,
    pub skills: Option<String>,
    pub certifications: Option<String>,
}

/// Which optional extractors run.
#[derive(Debug, Clone, Copy)]
pub struct FieldSelection {
    pub skills: bool,
    pub certifications: bool,
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            skills: true,
            certifications: true,
        }
    }
}

pub fn extract_all(view: &ProfileView<'_>, selection: FieldSelection) -> ExtractedFields {
    ExtractedFields {
        name: first_match("name", name::RULES, view),
        linkedin_link: first_match("linkedin_link", linkedin::RULES, view),
        headline: first_match("headline", headline::RULES, view),
        location: first_match("location", location::RULES, view),
        summary: first_match("summary", summary::RULES, view),
        education: first_match("education", education::RULES, view).unwrap_or_default(),
        skills: selection
            .skills
            .then(|| first_match("skills", skills::RULES, view))
            .flatten(),
        certifications: selection
            .certifications
            .then(|| first_match("certifications", certifications::RULES, view))
            .flatten(),
    }
}

/// Shared test helper: build owned lines and located sections from string slices.
#[cfg(test)]
pub(crate) fn fixture(lines: &[&str]) -> (String, Vec<String>, SectionSpans) {
    let raw = lines.join("\n");
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    let sections = super::sections::locate_sections(&lines);
    (raw, lines, sections)
}

// ── Tests ──
