//! Station record shapes: raw source input and normalized catalog output.

use crate::json_field::lenient_string;
use serde::{Deserialize, Serialize};

/// One raw station as scraped from the source directory. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceStation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub countrycode: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Free-text tags, comma- or whitespace-separated.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tags: String,
    /// Stream URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub favicon: String,
}

/// A station in catalog form. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// `<COUNTRY>_<NNN>`, unique within one output file.
    pub id: String,
    pub name: String,
    /// Uppercased country code.
    pub country: String,
    /// Normalized tags, deduplicated, in first-seen order.
    pub tags: Vec<String>,
    /// `pics/<COUNTRY>/<id>.png`
    pub image: String,
    pub stream: String,
    pub favicon: String,
}

/// Catalog id for the `index`-th record (1-based), zero-padded to three digits.
pub fn station_id(country: &str, index: usize) -> String {
    format!("{country}_{index:03}")
}

/// Image path convention shared with the favicon fetcher's output layout.
pub fn image_path(country: &str, id: &str) -> String {
    format!("pics/{country}/{id}.png")
}
