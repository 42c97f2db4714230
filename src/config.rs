use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::parser::assemble::ExtractOptions;

pub const ENV_PREFIX: &str = "PROFILE_WATCH";
pub const DEFAULT_BULK_OUTPUT: &str = "linkedin_profiles.csv";
const DEFAULT_OUTPUT_NAME: &str = "linkedin_candidates.csv";
const DEFAULT_LEDGER_NAME: &str = ".linkedin_processed.txt";

/// Settings for the watcher. Every field has a default; environment variables prefixed with
/// `PROFILE_WATCH_` override them (`PROFILE_WATCH_WATCH_DIR=/tmp/in`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Directory to watch. Defaults to `~/Downloads`.
    pub watch_dir: PathBuf,
    /// CSV sink. Defaults to `linkedin_candidates.csv` inside `watch_dir`.
    pub output_file: Option<PathBuf>,
    /// Processed-filename ledger. Defaults to `.linkedin_processed.txt` inside `watch_dir`.
    pub ledger_file: Option<PathBuf>,
    /// Wait after the last event for a path before looking at it.
    pub settle_delay_ms: u64,
    /// Second wait, after the ledger check and before extraction.
    pub confirm_delay_ms: u64,
    /// Filename prefix of exports picked up by the startup scan and modification events.
    pub profile_prefix: String,
    pub extract_skills: bool,
    pub extract_certifications: bool,
    /// Headline length cap in characters. `0` keeps the full headline.
    pub headline_max_chars: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            watch_dir: default_watch_dir(),
            output_file: None,
            ledger_file: None,
            settle_delay_ms: 2000,
            confirm_delay_ms: 1000,
            profile_prefix: "Profile".to_string(),
            extract_skills: true,
            extract_certifications: true,
            headline_max_chars: 200,
        }
    }
}

impl WatchConfig {
    /// Defaults overlaid with `PROFILE_WATCH_*` environment variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Config rooted at `dir` with no delays. Used by tests and one-off runs.
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            watch_dir: dir.into(),
            settle_delay_ms: 0,
            confirm_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| self.watch_dir.join(DEFAULT_OUTPUT_NAME))
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.ledger_file
            .clone()
            .unwrap_or_else(|| self.watch_dir.join(DEFAULT_LEDGER_NAME))
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::incremental();
        options.headline_max_chars =
            (self.headline_max_chars > 0).then_some(self.headline_max_chars);
        options.fields.skills = self.extract_skills;
        options.fields.certifications = self.extract_certifications;
        options
    }

    /// Exports picked up by the startup scan: `<prefix>*.pdf`.
    pub fn is_startup_candidate(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.profile_prefix) && file_name.ends_with(".pdf")
    }

    /// Modification events only count for names that look like profile exports.
    pub fn is_profile_name(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.profile_prefix) || file_name.to_lowercase().contains("linkedin")
    }
}

fn default_watch_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Downloads")
}

/// Case-insensitive `.pdf` extension check.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

// ── Tests ──
