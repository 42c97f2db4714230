use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::StoreResult;
use crate::record::CandidateRecord;

/// Where accepted records go. Rows are only ever appended.
pub trait RecordSink {
    fn append(&mut self, record: &CandidateRecord) -> StoreResult<()>;
}

/// CSV file opened in append mode per record. The header is written only when the file is
/// created.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
    columns: &'static [&'static str],
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>, columns: &'static [&'static str]) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvFileSink {
    fn append(&mut self, record: &CandidateRecord) -> StoreResult<()> {
        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        if !exists {
            writer.write_record(self.columns)?;
        }
        writer.write_record(record.row(self.columns))?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub records: Vec<CandidateRecord>,
}

impl RecordSink for MemorySink {
    fn append(&mut self, record: &CandidateRecord) -> StoreResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Write `records` to a fresh CSV at `path`, replacing whatever was there.
pub fn write_csv(
    path: &Path,
    columns: &[&str],
    records: &[CandidateRecord],
) -> StoreResult<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    writer.write_record(columns)?;
    for record in records {
        writer.write_record(record.row(columns))?;
    }
    writer.flush()?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{BULK_COLUMNS, WATCH_COLUMNS};

    fn record(first: &str) -> CandidateRecord {
        CandidateRecord {
            first_name: first.to_string(),
            summary: "Builds things, ships \"them\".".to_string(),
            source_file: format!("{}.pdf", first),
            parsed_at: Some("2024-05-01 09:30:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = CsvFileSink::new(&path, WATCH_COLUMNS);
        sink.append(&record("Ada")).unwrap();
        sink.append(&record("Grace")).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], WATCH_COLUMNS.join(","));
        assert!(lines[1].starts_with("Ada,"));
        assert!(lines[2].ends_with("Grace.pdf,2024-05-01 09:30:00"));
    }

    #[test]
    fn quotes_embedded_commas_and_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = CsvFileSink::new(&path, WATCH_COLUMNS);
        sink.append(&record("Ada")).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[8], "Builds things, ships \"them\".");
    }

    #[test]
    fn existing_file_gets_no_second_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "first_name\n").unwrap();
        let mut sink = CsvFileSink::new(&path, WATCH_COLUMNS);
        sink.append(&record("Ada")).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("first_name").count(), 1);
    }

    #[test]
    fn bulk_write_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bulk.csv");
        std::fs::write(&path, "stale\n").unwrap();
        write_csv(&path, BULK_COLUMNS, &[record("Ada"), record("Grace")]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), BULK_COLUMNS.len());
        assert_eq!(&headers[14], "source_file");
        assert_eq!(reader.records().count(), 2);
    }
}
