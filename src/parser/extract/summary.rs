use super::{ProfileView, Rule};
use crate::parser::sections::{section_body, Section};
use crate::truncate_chars;

const MAX_LINES: usize = 9;
const MAX_CHARS: usize = 500;
const STOPS: &[&str] = &["experience", "education", "skills"];

pub const RULES: &[Rule<String>] = &[Rule {
    name: "summary_section",
    apply: summary_section,
}];

fn summary_section(view: &ProfileView<'_>) -> Option<String> {
    let start = view.sections.start(Section::Summary)?;
    let body: Vec<&str> = section_body(view.lines, start, MAX_LINES, STOPS)
        .map(String::as_str)
        .collect();
    let text = body.join(" ");
    Some(truncate_chars(&text, MAX_CHARS).to_string())
}

// ── Tests ──
