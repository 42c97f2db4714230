pub mod assemble;
pub mod extract;
pub mod lines;
pub mod sections;

use std::path::Path;

use tracing::warn;

use crate::error::ExtractError;
use crate::pdf::PageTextSource;
use crate::record::CandidateRecord;
use assemble::{assemble_gated, ExtractOptions};
use extract::ProfileView;

/// Result of one parse attempt.
#[derive(Debug)]
pub enum ParseOutcome {
    Record(CandidateRecord),
    /// Text came out but the profile gate refused it.
    NotAProfile,
    /// Text extraction failed; already logged.
    Failed(ExtractError),
}

impl ParseOutcome {
    /// The record, or an all-empty one for refusals and failures.
    pub fn into_record_or_empty(self) -> CandidateRecord {
        match self {
            ParseOutcome::Record(r) => r,
            ParseOutcome::NotAProfile | ParseOutcome::Failed(_) => CandidateRecord::default(),
        }
    }

    pub fn into_record(self) -> Option<CandidateRecord> {
        match self {
            ParseOutcome::Record(r) => Some(r),
            ParseOutcome::NotAProfile | ParseOutcome::Failed(_) => None,
        }
    }
}

/// Three-pass pipeline: text → lines → sections → record.
pub fn parse_text(raw: &str, options: &ExtractOptions) -> Option<CandidateRecord> {
    let lines = lines::normalize(raw);
    let sections = sections::locate_sections(&lines);
    let view = ProfileView {
        raw,
        lines: &lines,
        sections: &sections,
    };
    assemble_gated(&view, options)
}

/// Extract text from `path` and parse it. Extraction errors stop here: they are logged and
/// reported as [`ParseOutcome::Failed`], never propagated.
pub fn parse_file(
    source: &dyn PageTextSource,
    path: &Path,
    options: &ExtractOptions,
) -> ParseOutcome {
    let pages = match source.page_texts(path) {
        Ok(pages) => pages,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error parsing document");
            return ParseOutcome::Failed(e);
        }
    };
    let raw = lines::join_pages(&pages);
    match parse_text(&raw, options) {
        Some(record) => ParseOutcome::Record(record),
        None => ParseOutcome::NotAProfile,
    }
}

// ── Tests ──
