use super::{ProfileView, Rule};
use crate::parser::sections::{section_body, Section};

const MAX_LINES: usize = 19;
const MAX_ENTRIES: usize = 3;
const STOPS: &[&str] = &["skills", "licenses", "certifications", "languages"];
const SCHOOL_KEYWORDS: &[&str] = &["University", "College", "Institute", "School", "Academy"];
const DEGREE_KEYWORDS: &[&str] = &[
    "Bachelor",
    "Master",
    "MBA",
    "PhD",
    "Degree",
    "B.S.",
    "B.A.",
    "M.S.",
    "Postgraduate",
    "BBA",
    "Diploma",
];
const DATE_SEPARATOR: char = '·';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Education {
    pub schools: String,
    pub degrees: String,
}

pub const RULES: &[Rule<Education>] = &[Rule {
    name: "education_section",
    apply: education_section,
}];

fn education_section(view: &ProfileView<'_>) -> Option<Education> {
    let start = view.sections.start(Section::Education)?;
    let mut schools = Vec::new();
    let mut degrees = Vec::new();

    for line in section_body(view.lines, start, MAX_LINES, STOPS) {
        if SCHOOL_KEYWORDS.iter().any(|k| line.contains(k)) {
            schools.push(line.as_str());
        } else if DEGREE_KEYWORDS.iter().any(|k| line.contains(k)) {
            degrees.push(strip_dates(line));
        }
    }

    Some(Education {
        schools: join_first(&schools, MAX_ENTRIES),
        degrees: join_first(&degrees, MAX_ENTRIES),
    })
}

/// "Bachelor of Science · (2010 - 2014)" → "Bachelor of Science". Exports decoded as Latin-1
/// leave a stray "Â" in front of the dot.
pub fn strip_dates(line: &str) -> &str {
    let head = line.split(DATE_SEPARATOR).next().unwrap_or_default();
    head.trim_end_matches(|c: char| c == 'Â' || c.is_whitespace())
        .trim()
}

fn join_first(items: &[&str], n: usize) -> String {
    items.iter().take(n).copied().collect::<Vec<_>>().join(" | ")
}

// ── Tests ──
