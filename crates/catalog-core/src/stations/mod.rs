//! Station transformer: raw source records → catalog records plus a global tag list.
//!
//! The transform itself is pure and total; only reading the input and writing
//! the two outputs can fail.

mod record;
mod tags;
mod transform;

pub use record::{image_path, station_id, SourceStation, Station};
pub use tags::{normalize_tag, split_tags};
pub use transform::{station_tags, transform, transform_station, TagVocabulary, Transformed};

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Counts and paths reported after a transform run.
#[derive(Debug, Clone)]
pub struct TransformSummary {
    pub input: PathBuf,
    pub total: usize,
    pub output: PathBuf,
    pub tags_output: PathBuf,
    pub unique_tags: usize,
}

/// Reads a JSON array of source records.
pub fn load_sources(path: &Path) -> Result<Vec<SourceStation>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let sources: Vec<SourceStation> = serde_json::from_str(&data)
        .with_context(|| format!("parse station records from {}", path.display()))?;
    Ok(sources)
}

/// Writes `value` as 2-space indented JSON, non-ASCII kept verbatim, creating parent dirs.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Full transformer run: load `input`, transform, write stations to `output`
/// and the sorted tag vocabulary to `tags_output`.
pub fn run_transform(input: &Path, output: &Path, tags_output: &Path) -> Result<TransformSummary> {
    let sources = load_sources(input)?;
    tracing::info!("transforming {} records from {}", sources.len(), input.display());

    let Transformed {
        stations,
        vocabulary,
    } = transform(&sources);

    write_pretty_json(output, &stations)?;
    write_pretty_json(tags_output, &vocabulary)?;
    tracing::info!(
        "wrote {} stations to {} and {} tags to {}",
        stations.len(),
        output.display(),
        vocabulary.len(),
        tags_output.display()
    );

    Ok(TransformSummary {
        input: input.to_path_buf(),
        total: sources.len(),
        output: output.to_path_buf(),
        tags_output: tags_output.to_path_buf(),
        unique_tags: vocabulary.len(),
    })
}
