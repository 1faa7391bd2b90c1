//! A binary to summarize the contents of an Arlequin file.
//!
//! ```shell
//! cargo run --release --bin=arlequin-summary --features=binaries data.arp
//! ```
//!
//! One tab-separated row is printed per record: the alignment number, the
//! haplotype identifier, the sample name, and the frequency.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The extension used for gzipped files.
const GZIP_EXTENSION: &str = "gz";

/// Summarizes the alignments within an Arlequin file.
#[derive(Parser)]
struct Args {
    /// The Arlequin file to summarize (optionally gzipped).
    file: PathBuf,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Opens a plain or gzipped Arlequin file as a buffered reader.
fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    match path.extension() {
        Some(extension) if extension == GZIP_EXTENSION => {
            Ok(Box::new(BufReader::new(GzDecoder::new(file))))
        }
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

fn summarize(args: &Args) -> Result<()> {
    let mut reader = arlequin::Reader::new(open(&args.file)?);

    for (i, result) in reader.alignments().enumerate() {
        let number = i + 1;
        let alignment = result.with_context(|| format!("reading alignment #{number}"))?;

        info!("alignment #{}: {} records", number, alignment.len());

        for record in alignment.records() {
            let sample = record.sample().unwrap_or("<unknown>");
            let frequency = record.frequency().unwrap_or_default();

            println!(
                "{}\t{}\t{}\t{}\t{}",
                number,
                record.id(),
                sample,
                frequency,
                record.sequence()
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    summarize(&args)
}
