use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreResult;

/// Filenames already ingested. Append-only: entries are never rewritten or deduplicated.
pub trait Ledger {
    fn contains(&self, file_name: &str) -> StoreResult<bool>;
    fn append(&mut self, file_name: &str) -> StoreResult<()>;
}

/// One filename per line in a plain text file. Every lookup re-reads the file, so entries
/// written by a previous run (or by hand) are honoured.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, duplicates included. A missing file is an empty ledger.
    pub fn entries(&self) -> StoreResult<Vec<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Ledger for FileLedger {
    fn contains(&self, file_name: &str) -> StoreResult<bool> {
        Ok(self.entries()?.iter().any(|e| e == file_name))
    }

    fn append(&mut self, file_name: &str) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", file_name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    pub entries: Vec<String>,
}

impl Ledger for MemoryLedger {
    fn contains(&self, file_name: &str) -> StoreResult<bool> {
        Ok(self.entries.iter().any(|e| e == file_name))
    }

    fn append(&mut self, file_name: &str) -> StoreResult<()> {
        self.entries.push(file_name.to_string());
        Ok(())
    }
}

// ── Tests ──
