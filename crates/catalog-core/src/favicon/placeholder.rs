//! Solid-color placeholder written whenever a real favicon is unavailable.

use crate::config::PlaceholderConfig;
use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Writes a `size`×`size` PNG filled with the configured color.
///
/// The pixels carry no marker; only the report distinguishes a placeholder
/// from a real favicon.
pub fn write_placeholder(path: &Path, cfg: &PlaceholderConfig) -> Result<()> {
    RgbaImage::from_pixel(cfg.size, cfg.size, Rgba(cfg.rgba))
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write placeholder {}", path.display()))
}
