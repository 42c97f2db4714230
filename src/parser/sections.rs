use tracing::trace;

/// Document sections a profile export may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Certifications,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
        }
    }

    /// Whether `line` is a header for this section.
    ///
    /// Certifications match on substring, so any line mentioning "certification" qualifies.
    pub fn is_header(self, line: &str) -> bool {
        let lower = line.to_lowercase();
        match self {
            Section::Summary => lower == "summary",
            Section::Experience => lower == "experience",
            Section::Education => lower == "education",
            Section::Skills => lower == "skills" || lower == "top skills",
            Section::Certifications => lower.contains("certification"),
        }
    }
}

/// Start index of each located section. Ends are left to the consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSpans {
    starts: [Option<usize>; 5],
}

impl SectionSpans {
    /// Start of `section`, if its header was found past the first line.
    pub fn start(&self, section: Section) -> Option<usize> {
        self.starts[section as usize]
    }
}

/// Locate every section's first header line. Sections are independent of each other.
pub fn locate_sections(lines: &[String]) -> SectionSpans {
    let mut spans = SectionSpans::default();
    for section in Section::ALL {
        let start = first_header(lines, section);
        if let Some(line) = start {
            trace!(section = section.name(), line, "section header");
        }
        spans.starts[section as usize] = start;
    }
    spans
}

/// Only the first header counts. One sitting on line 0 is the name line, not a section.
fn first_header(lines: &[String], section: Section) -> Option<usize> {
    lines
        .iter()
        .position(|l| section.is_header(l))
        .filter(|&i| i > 0)
}

/// Lines following `start`, at most `max` of them, up to (not including) the first line whose
/// lowercase form is one of `stops`.
pub fn section_body<'a>(
    lines: &'a [String],
    start: usize,
    max: usize,
    stops: &[&str],
) -> impl Iterator<Item = &'a String> + 'a {
    let stops: Vec<String> = stops.iter().map(|s| s.to_string()).collect();
    lines
        .iter()
        .skip(start + 1)
        .take(max)
        .take_while(move |l| !stops.contains(&l.to_lowercase()))
}

// ── Tests ──
