use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

use notify::{EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::ledger::Ledger;
use super::sink::RecordSink;
use super::{Disposition, FileEvent, Ingestor};
use crate::error::WatchError;

/// Map a raw notify event onto the two kinds the ingestor understands.
pub fn file_events(event: notify::Event) -> Vec<FileEvent> {
    match event.kind {
        EventKind::Create(_) => event.paths.into_iter().map(FileEvent::Created).collect(),
        EventKind::Modify(_) => event.paths.into_iter().map(FileEvent::Modified).collect(),
        _ => Vec::new(),
    }
}

/// Ingest exports that landed while nobody was watching, in name order.
pub async fn catch_up<L: Ledger, S: RecordSink>(
    ingestor: &mut Ingestor<L, S>,
) -> Result<Vec<(PathBuf, Disposition)>, WatchError> {
    let backlog = ingestor.startup_backlog()?;
    info!(count = backlog.len(), "Checking for existing PDFs");

    let mut done = Vec::with_capacity(backlog.len());
    for path in backlog {
        tokio::time::sleep(ingestor.config().confirm_delay()).await;
        let disposition = ingestor.ingest(&path)?;
        report(&path, &disposition, &ingestor.config().output_path());
        done.push((path, disposition));
    }
    Ok(done)
}

/// Catch up, then watch the directory until `shutdown` resolves.
///
/// Runs on the current task: events are handled one at a time and a parse always finishes
/// before the next event is looked at. Storage errors end the loop.
pub async fn run<L, S, F>(ingestor: &mut Ingestor<L, S>, shutdown: F) -> Result<(), WatchError>
where
    L: Ledger,
    S: RecordSink,
    F: Future<Output = ()>,
{
    catch_up(ingestor).await?;

    let (tx, mut rx) = mpsc::unbounded_channel::<FileEvent>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) => {
                for ev in file_events(event) {
                    let _ = tx.send(ev);
                }
            }
            Err(e) => warn!(error = %e, "watch error"),
        }
    })?;
    let dir = ingestor.config().watch_dir.clone();
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!(dir = %dir.display(), "Watching");

    tokio::pin!(shutdown);
    loop {
        let deadline = ingestor.next_deadline();
        tokio::select! {
            _ = &mut shutdown => {
                debug!("shutdown requested");
                break;
            }
            event = rx.recv() => match event {
                Some(event) => {
                    ingestor.observe(event, Instant::now())?;
                }
                None => break,
            },
            _ = sleep_until(deadline) => {
                let output = ingestor.config().output_path();
                for (path, disposition) in ingestor.run_due(Instant::now())? {
                    report(&path, &disposition, &output);
                }
            }
        }
    }

    drop(watcher);
    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}

fn report(path: &Path, disposition: &Disposition, output: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match disposition {
        Disposition::Skipped => {}
        Disposition::Accepted(r) => {
            println!("\n{}", "=".repeat(50));
            println!("NEW PDF DETECTED: {}", name);
            println!("{}", "=".repeat(50));
            println!("✓ Parsed: {}", r.display_name());
            println!("  Title: {}", r.title);
            println!("  Company: {}", r.company);
            println!("  Location: {}", r.location);
            println!("  → Added to: {}", output.display());
        }
        Disposition::Rejected => {
            println!("\n{}", "=".repeat(50));
            println!("NEW PDF DETECTED: {}", name);
            println!("{}", "=".repeat(50));
            println!("✗ Not a LinkedIn profile PDF or parsing failed");
        }
    }
}

// ── Tests ──
