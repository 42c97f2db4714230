use super::extract::{extract_all, FieldSelection, ProfileView};
use crate::record::CandidateRecord;
use crate::truncate_chars;

const MARKER_WINDOW: usize = 10;
const PROFILE_MARKER: &str = "linkedin";

/// Knobs that differ between the bulk runner and the watcher.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub headline_max_chars: Option<usize>,
    pub fields: FieldSelection,
    /// Refuse documents without "linkedin" in their first lines.
    pub require_profile_marker: bool,
}

impl ExtractOptions {
    pub fn bulk() -> Self {
        Self {
            headline_max_chars: None,
            fields: FieldSelection::default(),
            require_profile_marker: false,
        }
    }

    pub fn incremental() -> Self {
        Self {
            headline_max_chars: Some(200),
            fields: FieldSelection::default(),
            require_profile_marker: true,
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::bulk()
    }
}

/// Build a record from whatever the rules found. Never fails; misses stay empty.
pub fn assemble(view: &ProfileView<'_>, options: &ExtractOptions) -> CandidateRecord {
    let fields = extract_all(view, options.fields);
    let mut record = CandidateRecord::default();

    if let Some(name) = fields.name {
        record.full_name = name.full;
        record.first_name = name.first;
        record.last_name = name.last;
    }
    if let Some(h) = fields.headline {
        record.headline = match options.headline_max_chars {
            Some(max) => truncate_chars(&h.text, max).to_string(),
            None => h.text,
        };
        record.title = h.title;
        record.company = h.company;
    }
    record.linkedin_link = fields.linkedin_link.unwrap_or_default();
    record.location = fields.location.unwrap_or_default();
    record.summary = fields.summary.unwrap_or_default();
    record.school = fields.education.schools;
    record.degree = fields.education.degrees;
    record.skills = fields.skills.unwrap_or_default();
    record.certifications = fields.certifications.unwrap_or_default();
    record
}

/// Like [`assemble`], but when the options require a profile marker, empty documents and
/// documents without one yield nothing.
pub fn assemble_gated(view: &ProfileView<'_>, options: &ExtractOptions) -> Option<CandidateRecord> {
    if options.require_profile_marker
        && (view.lines.is_empty() || !has_profile_marker(view.lines))
    {
        return None;
    }
    Some(assemble(view, options))
}

pub fn has_profile_marker(lines: &[String]) -> bool {
    lines
        .iter()
        .take(MARKER_WINDOW)
        .any(|l| l.to_lowercase().contains(PROFILE_MARKER))
}

// ── Tests ──
