use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Browser-like User-Agent; some favicon hosts reject requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/122.0 Safari/537.36";

/// HTTP parameters for favicon downloads (`[fetch]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total per-request timeout in seconds (connect + transfer).
    pub timeout_secs: u64,
    /// Optional separate connect timeout; libcurl default when unset.
    pub connect_timeout_secs: Option<u64>,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 25,
            connect_timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirections: 10,
        }
    }
}

/// Placeholder image written when no real favicon is available (`[placeholder]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Width and height in pixels.
    pub size: u32,
    /// Fill color as RGBA.
    pub rgba: [u8; 4],
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            size: 512,
            rgba: [18, 18, 18, 255],
        }
    }
}

/// Global configuration loaded from `~/.config/station-catalog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub fetch: FetchConfig,
    pub placeholder: PlaceholderConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("station-catalog")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// An unusable config location (no HOME, read-only, not a directory) only
/// logs a warning and yields defaults; an existing but invalid file is an error.
pub fn load_or_init() -> Result<CatalogConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("config location unavailable ({:#}); using defaults", e);
            Ok(CatalogConfig::default())
        }
    }
}

/// Like `load_or_init` for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<CatalogConfig> {
    if !path.exists() {
        let default_cfg = CatalogConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(e) => tracing::warn!(
                "cannot write default config {} ({:#}); using defaults",
                path.display(),
                e
            ),
        }
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: CatalogConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &CatalogConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
