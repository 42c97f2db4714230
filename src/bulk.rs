use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::StoreResult;
use crate::ingest::sink::write_csv;
use crate::parser::assemble::ExtractOptions;
use crate::parser::parse_file;
use crate::pdf::PageTextSource;
use crate::record::{CandidateRecord, BULK_COLUMNS};
use crate::truncate_chars;

const DISPLAY_WIDTH: usize = 100;

/// Parse one document. Failures come back as an all-empty record.
pub fn parse_one(source: &dyn PageTextSource, path: &Path) -> CandidateRecord {
    parse_file(source, path, &ExtractOptions::bulk()).into_record_or_empty()
}

/// Human-readable dump of the non-empty fields.
pub fn format_record(record: &CandidateRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(50)));
    out.push_str("EXTRACTED DATA\n");
    out.push_str(&format!("{}\n", "=".repeat(50)));
    for (name, value) in record.fields() {
        if value.is_empty() {
            continue;
        }
        let shown = truncate_chars(value, DISPLAY_WIDTH);
        let ellipsis = if shown.len() < value.len() { "..." } else { "" };
        out.push_str(&format!("{:20}: {}{}\n", name, shown, ellipsis));
    }
    out
}

/// `*.pdf` / `*.PDF` files directly inside `dir`, sorted by name.
pub fn list_pdfs(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    let mut pdfs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_bulk_pdf(&path) {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

/// Exactly `pdf` or `PDF`; mixed-case extensions are not picked up by folder runs.
fn is_bulk_pdf(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("pdf" | "PDF"))
}

/// Counts reported after a directory run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkStats {
    pub files: usize,
    pub named: usize,
}

/// Parse every PDF in `dir` into one CSV at `output`. Per-file failures become empty rows;
/// a failure writing the CSV aborts the run.
pub fn process_folder(
    source: &dyn PageTextSource,
    dir: &Path,
    output: &Path,
) -> StoreResult<Option<BulkStats>> {
    let pdfs = list_pdfs(dir)?;
    if pdfs.is_empty() {
        println!("No PDF files found in {}", dir.display());
        return Ok(None);
    }
    println!("Found {} PDF files", pdfs.len());

    let pb = ProgressBar::new(pdfs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut records = Vec::with_capacity(pdfs.len());
    for path in &pdfs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.println(format!("Parsing: {}", name));
        pb.set_message(name.clone());

        let mut record = parse_one(source, path);
        record.source_file = name;
        records.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    write_csv(output, BULK_COLUMNS, &records)?;
    let stats = BulkStats {
        files: records.len(),
        named: records.iter().filter(|r| !r.first_name.is_empty()).count(),
    };
    info!(files = stats.files, named = stats.named, output = %output.display(), "bulk run finished");
    println!("\nSaved {} records to {}", stats.files, output.display());
    Ok(Some(stats))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::StaticSource;

    #[test]
    fn format_skips_empty_and_truncates() {
        let record = CandidateRecord {
            first_name: "Jane".into(),
            summary: "s".repeat(150),
            ..Default::default()
        };
        let text = format_record(&record);
        assert!(text.contains("EXTRACTED DATA"));
        assert!(text.contains(&format!("{:20}: Jane\n", "first_name")));
        assert!(text.contains(&format!("{}...", "s".repeat(100))));
        assert!(!text.contains("last_name"));
    }

    #[test]
    fn folder_run_writes_one_row_per_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = StaticSource::new();
        for name in ["b.PDF", "a.pdf"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"").unwrap();
            source = source.with_text(path, "Jane Doe\nEngineer at Acme | Remote");
        }
        // Unreadable: still gets a row.
        std::fs::write(dir.path().join("c.pdf"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::write(dir.path().join("d.Pdf"), b"").unwrap();

        let output = dir.path().join("out.csv");
        let stats = process_folder(&source, dir.path(), &output).unwrap().unwrap();
        assert_eq!(stats, BulkStats { files: 3, named: 2 });

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        let sources: Vec<&str> = rows.iter().map(|r| &r[14]).collect();
        assert_eq!(sources, vec!["a.pdf", "b.PDF", "c.pdf"]);
        assert_eq!(&rows[0][6], "Acme");
        assert_eq!(&rows[2][0], "");
    }

    #[test]
    fn empty_folder_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let stats = process_folder(&StaticSource::new(), dir.path(), &output).unwrap();
        assert!(stats.is_none());
        assert!(!output.exists());
    }
}
