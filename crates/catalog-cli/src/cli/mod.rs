//! CLI definitions for `fetch-favicons` and `transform-stations`.

mod commands;

use anyhow::Result;
use catalog_core::config;
use catalog_core::favicon::DEFAULT_REPORT_PATH;
use clap::Parser;
use std::path::PathBuf;

use commands::{run_fetch_favicons, run_transform_stations};

/// Download favicon URLs from a JSON array and save them as sequential PNG files.
#[derive(Debug, Parser)]
#[command(name = "fetch-favicons")]
#[command(
    about = "Download favicon URLs from JSON and save as sequential PNG files",
    long_about = None
)]
pub struct FetchFaviconsCli {
    /// Input JSON file (array of objects with a `favicon` field).
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Target image directory (created if absent).
    #[arg(long, value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Country code prefix for output filenames, e.g. HU.
    #[arg(long, value_name = "CODE")]
    pub country: String,

    /// Report file path.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,
}

impl FetchFaviconsCli {
    pub fn run_from_args() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run_fetch_favicons(&self.input, &self.output_dir, &self.country, &self.report, &cfg)
    }
}

/// Transform source station JSON into catalog format with sequential IDs.
#[derive(Debug, Parser)]
#[command(name = "transform-stations")]
#[command(
    about = "Transform source station JSON into stations format with sequential IDs",
    long_about = None
)]
pub struct TransformStationsCli {
    /// Input JSON path (array of raw station records).
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output JSON path for transformed stations.
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Output JSON path for the sorted list of unique tags.
    #[arg(long, value_name = "PATH")]
    pub tags_output: PathBuf,
}

impl TransformStationsCli {
    pub fn run_from_args() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        run_transform_stations(&self.input, &self.output, &self.tags_output)
    }
}

#[cfg(test)]
mod tests;
