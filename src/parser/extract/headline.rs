use super::{ProfileView, Rule};

const HEADLINE_WINDOW: usize = 15;
const MIN_BARE_LEN: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headline {
    pub text: String,
    pub title: String,
    pub company: String,
}

pub const RULES: &[Rule<Headline>] = &[Rule {
    name: "title_at_company",
    apply: title_at_company,
}];

/// "Title at Company | extra". Short lines need the pipe to count, so stray phrases like
/// "look at this" don't qualify.
fn title_at_company(view: &ProfileView<'_>) -> Option<Headline> {
    view.head(HEADLINE_WINDOW)
        .iter()
        .find(|line| {
            line.contains(" at ") && (line.contains('|') || line.chars().count() > MIN_BARE_LEN)
        })
        .map(|line| split_headline(line))
}

pub fn split_headline(line: &str) -> Headline {
    let (title, rest) = line.split_once(" at ").unwrap_or((line, ""));
    let company = rest.split('|').next().unwrap_or_default();
    Headline {
        text: line.to_string(),
        title: title.trim().to_string(),
        company: company.trim().to_string(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::fixture;

    fn headline_of(lines: &[&str]) -> Option<Headline> {
        let (raw, lines, sections) = fixture(lines);
        let view = ProfileView { raw: &raw, lines: &lines, sections: &sections };
        title_at_company(&view)
    }

    #[test]
    fn splits_title_and_company() {
        let h = split_headline("Senior Engineer at Acme Corp | Remote");
        assert_eq!(h.title, "Senior Engineer");
        assert_eq!(h.company, "Acme Corp");
        assert_eq!(h.text, "Senior Engineer at Acme Corp | Remote");
    }

    #[test]
    fn company_without_pipe_is_whole_remainder() {
        let h = split_headline("Head of Platform Engineering at Initech");
        assert_eq!(h.title, "Head of Platform Engineering");
        assert_eq!(h.company, "Initech");
    }

    #[test]
    fn short_line_needs_pipe() {
        assert!(headline_of(&["Jane Doe", "CTO at Acme"]).is_none());
        let h = headline_of(&["Jane Doe", "CTO at Acme | AI"]).unwrap();
        assert_eq!(h.company, "Acme");
    }

    #[test]
    fn first_qualifying_line_wins() {
        let h = headline_of(&[
            "Jane Doe",
            "Product Designer at Foo Industries",
            "Engineer at Bar | Remote",
        ])
        .unwrap();
        assert_eq!(h.title, "Product Designer");
        assert_eq!(h.company, "Foo Industries");
    }

    #[test]
    fn outside_window_is_ignored() {
        let mut lines = vec!["filler"; 15];
        lines.push("Senior Engineer at Acme Corp | Remote");
        assert!(headline_of(&lines).is_none());
    }

    #[test]
    fn requires_spaced_at() {
        assert!(headline_of(&["Jane", "Data scientist@Acme | ML lead"]).is_none());
    }
}
