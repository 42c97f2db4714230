use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use profile_parser::bulk;
use profile_parser::config::DEFAULT_BULK_OUTPUT;
use profile_parser::pdf::LopdfSource;

#[derive(Parser)]
#[command(
    name = "profile_parser",
    about = "Extract candidate data from exported LinkedIn profile PDFs"
)]
struct Cli {
    /// A single profile PDF, or a folder of them
    path: Option<PathBuf>,
    /// CSV to write when PATH is a folder
    output: Option<PathBuf>,
}

fn print_usage() {
    println!("Usage:");
    println!("  profile_parser <pdf_file>");
    println!("  profile_parser <folder> <output.csv>");
}

fn main() -> anyhow::Result<()> {
    profile_parser::init_tracing();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let Some(path) = cli.path else {
        print_usage();
        return Ok(());
    };

    let source = LopdfSource;
    if path.is_file() {
        let record = bulk::parse_one(&source, &path);
        print!("{}", bulk::format_record(&record));
    } else if path.is_dir() {
        let output = cli
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BULK_OUTPUT));
        bulk::process_folder(&source, &path, &output)?;
    } else {
        println!("Error: {} not found", path.display());
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
