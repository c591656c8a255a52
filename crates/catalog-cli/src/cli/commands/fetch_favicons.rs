//! `fetch-favicons` – download, convert and report.

use anyhow::Result;
use catalog_core::config::CatalogConfig;
use catalog_core::favicon;
use std::path::Path;

pub fn run_fetch_favicons(
    input: &Path,
    output_dir: &Path,
    country: &str,
    report: &Path,
    cfg: &CatalogConfig,
) -> Result<()> {
    let summary = favicon::run_fetch(input, output_dir, country, report, cfg)?;
    let c = summary.counts;
    println!("total={} ok={} placeholder={}", c.total, c.ok, c.placeholder);
    println!("report={}", summary.report.display());
    Ok(())
}
