//! One fetch run: every input record yields exactly one PNG and one report row.

use super::convert::{convert_to_png, ConvertError, Converted};
use super::fetch::{FetchError, HttpFetcher};
use super::placeholder::write_placeholder;
use super::report::{ReportRow, Status};
use super::FaviconSource;
use crate::config::{CatalogConfig, PlaceholderConfig};
use crate::stations::station_id;
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-record failure. Never fatal: it becomes a placeholder plus this message.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing favicon url")]
    MissingUrl,
    #[error("download failed: {0}")]
    Download(#[from] FetchError),
    #[error("{0}")]
    Convert(#[from] ConvertError),
}

/// Output filename for the `index`-th record (1-based).
pub fn output_filename(country: &str, index: usize) -> String {
    format!("{}.png", station_id(country, index))
}

/// Fetch settings for a single country's batch.
#[derive(Debug, Clone)]
pub struct FaviconJob {
    country: String,
    out_dir: PathBuf,
    fetcher: HttpFetcher,
    placeholder: PlaceholderConfig,
}

impl FaviconJob {
    /// `country` is uppercased and used as the filename prefix for every record.
    pub fn new(country: &str, out_dir: impl Into<PathBuf>, cfg: &CatalogConfig) -> Self {
        Self {
            country: country.trim().to_uppercase(),
            out_dir: out_dir.into(),
            fetcher: HttpFetcher::new(&cfg.fetch),
            placeholder: cfg.placeholder.clone(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Processes all records in order, one at a time.
    ///
    /// Errors only if a placeholder cannot be written (output dir unwritable).
    pub fn run(&self, sources: &[FaviconSource]) -> Result<Vec<ReportRow>> {
        sources
            .iter()
            .enumerate()
            .map(|(i, source)| self.process(i + 1, source))
            .collect()
    }

    /// Produces the PNG for one record and returns its report row.
    pub fn process(&self, index: usize, source: &FaviconSource) -> Result<ReportRow> {
        let filename = output_filename(&self.country, index);
        let out_path = self.out_dir.join(&filename);

        let (status, message) = match self.fetch_and_convert(&source.favicon, &out_path) {
            Ok(converted) => {
                tracing::debug!("{} {}", filename, converted);
                (Status::Ok, converted.to_string())
            }
            Err(err) => {
                tracing::warn!("{}: {} (url={:?})", filename, err, source.favicon.trim());
                write_placeholder(&out_path, &self.placeholder)?;
                (Status::Placeholder, err.to_string())
            }
        };

        Ok(ReportRow {
            index,
            filename,
            status,
            message,
        })
    }

    fn fetch_and_convert(&self, url: &str, out_path: &Path) -> Result<Converted, RecordError> {
        let url = url.trim();
        if url.is_empty() || url.eq_ignore_ascii_case("null") {
            return Err(RecordError::MissingUrl);
        }
        let asset = self.fetcher.fetch(url)?;
        Ok(convert_to_png(&asset.data, &asset.content_type, out_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn source(favicon: &str) -> FaviconSource {
        FaviconSource {
            favicon: favicon.to_string(),
        }
    }

    #[test]
    fn output_filename_format() {
        assert_eq!(output_filename("HU", 1), "HU_001.png");
        assert_eq!(output_filename("HU", 250), "HU_250.png");
    }

    #[test]
    fn country_is_uppercased() {
        let job = FaviconJob::new(" hu ", "/tmp", &CatalogConfig::default());
        assert_eq!(job.country(), "HU");
    }

    #[test]
    fn missing_urls_become_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let job = FaviconJob::new("hu", dir.path(), &CatalogConfig::default());
        let rows = job
            .run(&[source(""), source("   "), source("null"), source(" NULL "), source("Null")])
            .unwrap();

        assert_eq!(rows.len(), 5);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i + 1);
            assert_eq!(row.status, Status::Placeholder);
            assert_eq!(row.message, "missing favicon url");
            let img = image::open(dir.path().join(&row.filename)).unwrap();
            assert_eq!(img.dimensions(), (512, 512));
        }
        assert_eq!(rows[2].filename, "HU_003.png");
    }

    #[test]
    fn download_failure_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let job = FaviconJob::new("at", dir.path(), &CatalogConfig::default());
        let row = job
            .process(1, &source("notaproto://example.invalid/favicon.ico"))
            .unwrap();
        assert_eq!(row.status, Status::Placeholder);
        assert!(row.message.starts_with("download failed: "));
        assert!(dir.path().join("AT_001.png").exists());
    }

    #[test]
    fn unwritable_output_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let job = FaviconJob::new("hu", dir.path().join("missing"), &CatalogConfig::default());
        assert!(job.process(1, &source("")).is_err());
    }
}
