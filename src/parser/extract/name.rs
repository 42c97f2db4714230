use std::sync::LazyLock;

use regex::Regex;

use super::{ProfileView, Rule};

/// Credentials people tack onto their display name, plus a bare comma.
static CREDENTIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(?:MBA|CSC|LLQP|CPA|CFA|PhD|MD|JD|PMP|CFP|,)\s*").unwrap()
});

const NAME_WINDOW: usize = 5;
const CONTACT_PREFIX_LEN: usize = "contact".len();
const SKIP_PREFIXES: &[&str] = &["www.", "http", "(LinkedIn)"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub full: String,
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Split a cleaned name: first token is the first name, the rest the last name.
    pub fn from_clean(full: &str) -> Self {
        let mut tokens = full.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_string();
        let last = tokens.collect::<Vec<_>>().join(" ");
        Self {
            full: full.to_string(),
            first,
            last,
        }
    }
}

pub const RULES: &[Rule<PersonName>] = &[Rule {
    name: "leading_line",
    apply: leading_line,
}];

/// The name sits in the first few lines, sometimes glued onto the "Contact" sidebar header.
fn leading_line(view: &ProfileView<'_>) -> Option<PersonName> {
    let candidate = view.head(NAME_WINDOW).iter().find_map(|line| {
        if line.to_lowercase().starts_with("contact") {
            let rest = line.get(CONTACT_PREFIX_LEN..).unwrap_or_default().trim();
            return (!rest.is_empty()).then_some(rest);
        }
        if SKIP_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return None;
        }
        (line.chars().count() > 2).then_some(line.as_str())
    })?;

    let clean = clean_name(candidate);
    if clean.is_empty() {
        return None;
    }
    Some(PersonName::from_clean(&clean))
}

/// Drop everything from the first credential or comma onward.
pub fn clean_name(line: &str) -> String {
    let head = CREDENTIAL_RE.split(line).next().unwrap_or_default();
    head.trim().trim_end_matches(',').trim().to_string()
}

// ── Tests ──
