//! Downloaded bytes → PNG file.
//!
//! Conversion is an ordered chain of attempts: raster decode first, then SVG
//! rasterization when the payload looks like SVG. Each attempt returns a
//! `Result`; the caller writes a placeholder when the chain ends in an error.

use image::{DynamicImage, ImageFormat};
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Number of leading body bytes inspected for an `<svg` marker.
const SVG_SNIFF_LEN: usize = 4096;

/// Largest SVG canvas side rendered; bigger declared sizes are rejected.
pub const MAX_SVG_SIDE: u32 = 4096;

/// Vector rasterization failure.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("{0}")]
    Parse(#[from] usvg::Error),
    #[error("cannot allocate {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("png encode: {0}")]
    Encode(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Why a downloaded payload could not be turned into a PNG.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("svg convert failed: {0}")]
    SvgConvert(#[from] SvgError),
    #[error("unsupported image format")]
    Unsupported,
}

/// Successful conversion path; Display is the report message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    /// Decoded as a raster image of the named source format (e.g. `PNG`, `ICO`).
    Raster(String),
    /// Rendered from SVG.
    Vector,
}

impl std::fmt::Display for Converted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Converted::Raster(format) => write!(f, "raster->{}", format),
            Converted::Vector => write!(f, "svg->png"),
        }
    }
}

/// Converts `data` to a PNG at `out_path`.
///
/// `content_type` is the (lowercased) response header and is only used to
/// recognize SVG payloads that the raster decoder rejects.
pub fn convert_to_png(
    data: &[u8],
    content_type: &str,
    out_path: &Path,
) -> Result<Converted, ConvertError> {
    match save_raster(data, out_path) {
        Ok(format) => return Ok(Converted::Raster(format)),
        Err(e) => tracing::debug!("raster decode failed: {}", e),
    }

    if looks_like_svg(data, content_type) {
        save_vector(data, out_path)?;
        return Ok(Converted::Vector);
    }

    Err(ConvertError::Unsupported)
}

/// True if the content type mentions SVG or the body starts with an `<svg` element
/// within the first 4096 bytes (ASCII case-insensitive).
pub fn looks_like_svg(data: &[u8], content_type: &str) -> bool {
    if content_type.to_ascii_lowercase().contains("svg") {
        return true;
    }
    let head = data[..data.len().min(SVG_SNIFF_LEN)].to_ascii_lowercase();
    head.windows(4).any(|w| w == b"<svg")
}

/// Upper-case format name as reported in the report (`PNG`, `JPEG`, `ICO`, `WEBP`, ...).
fn format_name(format: ImageFormat) -> String {
    format!("{:?}", format).to_uppercase()
}

/// Decode as raster, normalize to RGB8/RGBA8, and save as PNG. Returns the detected source format.
fn save_raster(data: &[u8], out_path: &Path) -> image::ImageResult<String> {
    let format = image::guess_format(data)?;
    let img = image::load_from_memory_with_format(data, format)?;
    let img = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    };
    img.save_with_format(out_path, ImageFormat::Png)?;
    Ok(format_name(format))
}

/// Render SVG at its intrinsic size and save as PNG.
fn save_vector(data: &[u8], out_path: &Path) -> Result<(), SvgError> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opts)?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width > MAX_SVG_SIDE || height > MAX_SVG_SIDE {
        return Err(SvgError::Canvas { width, height });
    }
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(SvgError::Canvas { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| SvgError::Encode(e.to_string()))?;
    fs::write(out_path, png)?;
    Ok(())
}
