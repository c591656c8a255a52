//! Favicon fetcher/converter.
//!
//! For each input record: GET the `favicon` URL, decode it as a raster image
//! or rasterize it as SVG, and save `<COUNTRY>_<NNN>.png` in the output
//! directory. Any per-record failure writes a placeholder instead and is
//! recorded in the text report; only setup failures abort the run.

mod convert;
mod fetch;
mod job;
mod placeholder;
mod report;

pub use convert::{convert_to_png, looks_like_svg, ConvertError, Converted, SvgError};
pub use fetch::{FetchError, FetchedAsset, HttpFetcher};
pub use job::{output_filename, FaviconJob, RecordError};
pub use placeholder::write_placeholder;
pub use report::{write_report, ReportCounts, ReportRow, Status, DEFAULT_REPORT_PATH};

use crate::config::CatalogConfig;
use crate::json_field::lenient_string;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One input record; only `favicon` is read, other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaviconSource {
    #[serde(default, deserialize_with = "lenient_string")]
    pub favicon: String,
}

/// Counts and report location after a fetch run.
#[derive(Debug, Clone)]
pub struct FetchSummary {
    pub counts: ReportCounts,
    pub report: PathBuf,
}

/// Reads a JSON array of objects carrying a `favicon` field.
pub fn load_sources(path: &Path) -> Result<Vec<FaviconSource>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let sources: Vec<FaviconSource> = serde_json::from_str(&data)
        .with_context(|| format!("parse favicon records from {}", path.display()))?;
    Ok(sources)
}

/// Full fetcher run: create the output dir, load `input`, process every record,
/// then write the report in one go.
pub fn run_fetch(
    input: &Path,
    out_dir: &Path,
    country: &str,
    report: &Path,
    cfg: &CatalogConfig,
) -> Result<FetchSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let sources = load_sources(input)?;
    let job = FaviconJob::new(country, out_dir, cfg);
    tracing::info!(
        "fetching {} favicons for {} into {}",
        sources.len(),
        job.country(),
        job.out_dir().display()
    );

    let rows = job.run(&sources)?;
    write_report(report, &rows)?;

    let counts = ReportCounts::tally(&rows);
    tracing::info!(
        "favicons done: total={} ok={} placeholder={}",
        counts.total,
        counts.ok,
        counts.placeholder
    );

    Ok(FetchSummary {
        counts,
        report: report.to_path_buf(),
    })
}
