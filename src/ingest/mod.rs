pub mod debounce;
pub mod ledger;
pub mod sink;
pub mod watch;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{has_pdf_extension, WatchConfig};
use crate::error::StoreResult;
use crate::parser::assemble::ExtractOptions;
use crate::parser::parse_file;
use crate::pdf::PageTextSource;
use crate::record::CandidateRecord;
use debounce::Debouncer;
use ledger::Ledger;
use sink::RecordSink;

const PARSED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What the directory watch reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    Created(PathBuf),
    Modified(PathBuf),
}

/// Where a scheduled path is in its settle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for writes to stop before the ledger check.
    Settling,
    /// Ledger check passed; waiting once more before extraction.
    Confirming,
}

/// Final state of one ingestion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Row appended and filename ledgered.
    Accepted(CandidateRecord),
    /// Parsed, but not a profile or no first name.
    Rejected,
    /// Already in the ledger.
    Skipped,
}

/// Drives parse → accept → persist for files showing up in one directory.
pub struct Ingestor<L, S> {
    config: WatchConfig,
    options: ExtractOptions,
    source: Box<dyn PageTextSource>,
    ledger: L,
    sink: S,
    pending: Debouncer<PathBuf, Stage>,
}

impl<L: Ledger, S: RecordSink> Ingestor<L, S> {
    pub fn new(config: WatchConfig, source: Box<dyn PageTextSource>, ledger: L, sink: S) -> Self {
        let options = config.extract_options();
        Self {
            config,
            options,
            source,
            ledger,
            sink,
            pending: Debouncer::new(),
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Schedule `event` if it concerns a file we care about. Returns whether it was scheduled.
    pub fn observe(&mut self, event: FileEvent, now: Instant) -> StoreResult<bool> {
        let (path, created) = match event {
            FileEvent::Created(p) => (p, true),
            FileEvent::Modified(p) => (p, false),
        };
        if path.is_dir() || !has_pdf_extension(&path) {
            return Ok(false);
        }
        let Some(name) = file_name(&path) else {
            return Ok(false);
        };

        if !created && (!self.config.is_profile_name(&name) || self.ledger.contains(&name)?) {
            debug!(file = %name, "ignoring modification");
            return Ok(false);
        }

        debug!(file = %name, created, "scheduled");
        self.pending
            .schedule(path, Stage::Settling, now + self.config.settle_delay());
        Ok(true)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.next_deadline()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Advance every path whose deadline has passed. Paths whose confirm stage is already due
    /// (zero delay) are ingested in the same call.
    pub fn run_due(&mut self, now: Instant) -> StoreResult<Vec<(PathBuf, Disposition)>> {
        let mut done = Vec::new();
        loop {
            let due = self.pending.take_due(now);
            if due.is_empty() {
                return Ok(done);
            }
            for (path, stage) in due {
                match stage {
                    Stage::Settling => {
                        if self.already_ingested(&path)? {
                            done.push((path, Disposition::Skipped));
                        } else {
                            let at = now + self.config.confirm_delay();
                            self.pending.schedule(path, Stage::Confirming, at);
                        }
                    }
                    Stage::Confirming => {
                        let disposition = self.ingest(&path)?;
                        done.push((path, disposition));
                    }
                }
            }
        }
    }

    /// Parse `path` now and persist it if accepted. Only storage errors propagate.
    pub fn ingest(&mut self, path: &Path) -> StoreResult<Disposition> {
        let Some(name) = file_name(path) else {
            return Ok(Disposition::Rejected);
        };
        if self.ledger.contains(&name)? {
            return Ok(Disposition::Skipped);
        }

        info!(file = %name, "New PDF detected");
        let parsed_at = chrono::Local::now().format(PARSED_AT_FORMAT).to_string();
        let record = parse_file(&*self.source, path, &self.options).into_record();

        match record {
            Some(mut record) if !record.first_name.is_empty() => {
                record.source_file = name.clone();
                record.parsed_at = Some(parsed_at);
                self.sink.append(&record)?;
                self.ledger.append(&name)?;
                info!(file = %name, name = %record.display_name(), "Accepted");
                Ok(Disposition::Accepted(record))
            }
            _ => {
                warn!(file = %name, "Not a profile PDF or parsing failed");
                Ok(Disposition::Rejected)
            }
        }
    }

    /// `<prefix>*.pdf` files in the watch directory not yet in the ledger, sorted by name.
    pub fn startup_backlog(&self) -> StoreResult<Vec<PathBuf>> {
        let mut backlog = Vec::new();
        for entry in std::fs::read_dir(&self.config.watch_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = file_name(&path) else {
                continue;
            };
            if self.config.is_startup_candidate(&name) && !self.ledger.contains(&name)? {
                backlog.push(path);
            }
        }
        backlog.sort();
        Ok(backlog)
    }

    fn already_ingested(&self, path: &Path) -> StoreResult<bool> {
        match file_name(path) {
            Some(name) => self.ledger.contains(&name),
            None => Ok(false),
        }
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

// ── Tests ──
