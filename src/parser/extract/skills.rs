use super::{ProfileView, Rule};
use crate::parser::sections::{section_body, Section};

const MAX_LINES: usize = 14;
const MAX_SKILLS: usize = 10;
const STOPS: &[&str] = &["experience", "education", "certifications", "languages", "summary"];

pub const RULES: &[Rule<String>] = &[Rule {
    name: "skills_section",
    apply: skills_section,
}];

fn skills_section(view: &ProfileView<'_>) -> Option<String> {
    let start = view.sections.start(Section::Skills)?;
    let skills: Vec<&str> = section_body(view.lines, start, MAX_LINES, STOPS)
        .map(String::as_str)
        .filter(|l| is_skill(l))
        .take(MAX_SKILLS)
        .collect();
    Some(skills.join(", "))
}

/// Between 3 and 49 characters.
pub fn is_skill(line: &str) -> bool {
    let len = line.chars().count();
    len > 2 && len < 50
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::fixture;

    fn skills_of(lines: &[&str]) -> Option<String> {
        let (raw, lines, sections) = fixture(lines);
        let view = ProfileView { raw: &raw, lines: &lines, sections: &sections };
        skills_section(&view)
    }

    #[test]
    fn length_filter_bounds() {
        assert!(!is_skill("C"));
        assert!(!is_skill("Go"));
        assert!(is_skill("SQL"));
        assert!(is_skill(&"x".repeat(49)));
        assert!(!is_skill(&"x".repeat(50)));
        assert!(!is_skill(&"x".repeat(60)));
    }

    #[test]
    fn filters_and_joins() {
        let long = "y".repeat(60);
        let s = skills_of(&["Jane", "Top Skills", "R", "Rust", &long, "Distributed Systems", "Languages", "English"])
            .unwrap();
        assert_eq!(s, "Rust, Distributed Systems");
    }

    #[test]
    fn keeps_first_ten() {
        let mut lines = vec!["Jane", "Skills"];
        let body: Vec<String> = (0..14).map(|i| format!("skill{}", i)).collect();
        lines.extend(body.iter().map(String::as_str));
        let s = skills_of(&lines).unwrap();
        assert_eq!(s.split(", ").count(), 10);
        assert!(s.starts_with("skill0, skill1"));
        assert!(s.ends_with("skill9"));
    }

    #[test]
    fn scans_at_most_fourteen_lines() {
        let mut lines = vec!["Jane", "Skills"];
        lines.extend(std::iter::repeat("x").take(14));
        lines.push("Late Skill");
        assert_eq!(skills_of(&lines).as_deref(), Some(""));
    }
}
