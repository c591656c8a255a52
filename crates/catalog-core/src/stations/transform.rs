//! Source → catalog transformation with global sequential ids.

use std::collections::{BTreeSet, HashSet};

use super::record::{image_path, station_id, SourceStation, Station};
use super::tags::{normalize_tag, split_tags};

/// Union of all normalized tags seen in one run; iterates in sorted order.
pub type TagVocabulary = BTreeSet<String>;

/// Output of one transform run.
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    pub stations: Vec<Station>,
    pub vocabulary: TagVocabulary,
}

/// Normalized, deduplicated tags for one raw tag string, in first-seen order.
pub fn station_tags(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for piece in split_tags(raw) {
        let tag = normalize_tag(&piece);
        if tag.is_empty() || !seen.insert(tag.clone()) {
            continue;
        }
        tags.push(tag);
    }
    tags
}

/// Transforms a single record. `index` is 1-based and global across the input.
pub fn transform_station(source: &SourceStation, index: usize) -> Station {
    let country = source.countrycode.trim().to_uppercase();
    let id = station_id(&country, index);
    let image = image_path(&country, &id);

    Station {
        name: source.name.clone(),
        tags: station_tags(&source.tags),
        image,
        stream: source.url.clone(),
        favicon: source.favicon.clone(),
        country,
        id,
    }
}

/// Transforms all records, numbering them from 1 in input order (not per country),
/// and collects the global tag vocabulary.
pub fn transform(sources: &[SourceStation]) -> Transformed {
    let mut out = Transformed {
        stations: Vec::with_capacity(sources.len()),
        vocabulary: TagVocabulary::new(),
    };

    for (i, source) in sources.iter().enumerate() {
        let station = transform_station(source, i + 1);
        out.vocabulary.extend(station.tags.iter().cloned());
        tracing::debug!(id = %station.id, tags = station.tags.len(), "transformed station");
        out.stations.push(station);
    }

    out
}
