use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;

/// Anything that can turn a document into per-page plain text, in page order.
///
/// Pages without extractable text (scans, images) come back as empty strings.
pub trait PageTextSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

/// Pure-Rust extraction through `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfSource;

impl PageTextSource for LopdfSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Malformed fonts and content streams occasionally panic inside lopdf.
        let result = panic::catch_unwind(AssertUnwindSafe(|| extract_pages(&bytes)));
        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(source)) => Err(ExtractError::Pdf {
                path: path.to_path_buf(),
                source,
            }),
            Err(payload) => Err(ExtractError::Panicked {
                path: path.to_path_buf(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, lopdf::Error> {
    let doc = Document::load_mem(bytes)?;
    // BTreeMap keyed by page number, so iteration is page order.
    let pages = doc.get_pages();
    let texts = pages
        .keys()
        .map(|&page_no| match doc.extract_text(&[page_no]) {
            Ok(text) => text,
            Err(e) => {
                debug!(page_no, error = %e, "page has no extractable text");
                String::new()
            }
        })
        .collect();
    Ok(texts)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Fixed page texts keyed by path. Stands in for real PDFs in tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    docs: HashMap<PathBuf, Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, path: impl Into<PathBuf>, text: &str) -> Self {
        self.insert(path, vec![text.to_string()]);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, pages: Vec<String>) {
        self.docs.insert(path.into(), pages);
    }
}

impl PageTextSource for StaticSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        self.docs.get(path).cloned().ok_or_else(|| ExtractError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
        })
    }
}

// ── Tests ──
