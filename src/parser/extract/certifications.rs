use super::{ProfileView, Rule};
use crate::parser::sections::{section_body, Section};

const MAX_LINES: usize = 9;
const MAX_CERTS: usize = 5;
const MIN_LEN: usize = 3;
const STOPS: &[&str] = &["skills", "education", "experience", "languages"];

pub const RULES: &[Rule<String>] = &[Rule {
    name: "certification_section",
    apply: certification_section,
}];

/// The header is any line mentioning "certification", so a job description saying so can
/// start this section early.
fn certification_section(view: &ProfileView<'_>) -> Option<String> {
    let start = view.sections.start(Section::Certifications)?;
    let certs: Vec<&str> = section_body(view.lines, start, MAX_LINES, STOPS)
        .map(String::as_str)
        .filter(|l| l.chars().count() > MIN_LEN)
        .take(MAX_CERTS)
        .collect();
    Some(certs.join(" | "))
}

// ── Tests ──
