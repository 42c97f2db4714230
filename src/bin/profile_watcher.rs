use anyhow::Context;
use tracing::info;

use profile_parser::config::WatchConfig;
use profile_parser::ingest::ledger::FileLedger;
use profile_parser::ingest::sink::CsvFileSink;
use profile_parser::ingest::{watch, Ingestor};
use profile_parser::pdf::LopdfSource;
use profile_parser::record::WATCH_COLUMNS;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    profile_parser::init_tracing();
    let config = WatchConfig::load().context("Failed to load PROFILE_WATCH_* settings")?;
    info!(settings = ?config, "Starting profile watcher");

    let ledger = FileLedger::new(config.ledger_path());
    let sink = CsvFileSink::new(config.output_path(), WATCH_COLUMNS);
    info!(ledger = %ledger.path().display(), "Using ledger");

    println!("{}", "=".repeat(60));
    println!("  LINKEDIN PDF WATCHER");
    println!("{}", "=".repeat(60));
    println!("\n  Watching: {}", config.watch_dir.display());
    println!("  Output:   {}", sink.path().display());
    println!("\n  Download LinkedIn PDFs and they'll auto-parse!");
    println!("  Press Ctrl+C to stop\n");
    println!("{}", "=".repeat(60));

    let mut ingestor = Ingestor::new(config, Box::new(LopdfSource), ledger, sink);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "could not listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };
    watch::run(&mut ingestor, shutdown).await?;

    println!("\n\nStopped watching.");
    println!("Data saved to: {}", ingestor.sink().path().display());
    Ok(())
}
