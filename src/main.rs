//! # weathericons CLI
//!
//! Regenerates the firmware's weather icon headers.
//!
//! ## Usage
//!
//! ```bash
//! # assets/weather_icons/*.png -> include/weather_icons/*.h
//! weathericons
//!
//! # Fail instead of skipping when a PNG is missing
//! weathericons --strict
//!
//! # Also dump what the display will show
//! weathericons --preview-dir target/icon-previews
//!
//! # Show per-bitmap statistics
//! RUST_LOG=debug weathericons
//! ```

use clap::Parser;
use std::path::PathBuf;

use weathericons::{
    IconError,
    codegen::MissingPolicy,
    pipeline::{self, PipelineConfig},
};

/// weathericons - Weather icon PNG to C header generator
#[derive(Parser, Debug)]
#[command(name = "weathericons")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing <IconName>.png sources
    #[arg(long, default_value = PipelineConfig::DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Directory receiving the generated headers
    #[arg(long, default_value = PipelineConfig::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Fail the run if any source PNG is missing
    #[arg(long, conflicts_with = "keep_dangling_rows")]
    strict: bool,

    /// Emit table rows for icons that were not generated (legacy output)
    #[arg(long)]
    keep_dangling_rows: bool,

    /// Also write black/white PNG previews of each bitmap
    #[arg(long, value_name = "DIR")]
    preview_dir: Option<PathBuf>,
}

impl Cli {
    fn missing_policy(&self) -> MissingPolicy {
        if self.strict {
            MissingPolicy::Fail
        } else if self.keep_dangling_rows {
            MissingPolicy::KeepRows
        } else {
            MissingPolicy::OmitRows
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), IconError> {
    let cli = Cli::parse();

    let mut config =
        PipelineConfig::new(&cli.source_dir, &cli.output_dir).missing(cli.missing_policy());
    if let Some(dir) = &cli.preview_dir {
        config = config.preview_dir(dir);
    }

    let report = pipeline::run(&config)?;
    log::debug!(
        "{} icons generated, {} missing, {} table rows",
        report.bitmaps.len(),
        report.missing.len(),
        report.index.rows().len()
    );

    Ok(())
}
