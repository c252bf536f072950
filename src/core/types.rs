use std::path::PathBuf;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_SOURCE: &str = "Generated placeholder image";
pub const PLACEHOLDER_LICENSE: &str = "Created Placeholder";

/// One image the provisioner should produce, keyed by its output filename.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Output filename inside the images directory; its extension picks the encoding.
    pub id: String,
    pub description: String,
    pub license: String,
    #[serde(flatten)]
    pub source: EntrySource,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntrySource {
    /// Drawn locally: solid `#RRGGBB` card with a centered glyph and caption.
    Placeholder { color: String, glyph: String },
    /// Fetched verbatim from `url`; `source` is the attribution page.
    Download { url: String, source: String },
    /// A Wikimedia Commons `File:` page, fetched and normalized to the card box.
    Commons { page: String },
}

impl EntrySource {
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Placeholder { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Placeholder { .. } => "placeholder",
            Self::Download { .. } => "download",
            Self::Commons { .. } => "commons",
        }
    }
}

impl CatalogEntry {
    pub fn placeholder(id: &str, color: &str, glyph: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            license: PLACEHOLDER_LICENSE.to_string(),
            source: EntrySource::Placeholder {
                color: color.to_string(),
                glyph: glyph.to_string(),
            },
        }
    }

    pub fn download(id: &str, url: &str, source: &str, license: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            license: license.to_string(),
            source: EntrySource::Download {
                url: url.to_string(),
                source: source.to_string(),
            },
        }
    }

    pub fn commons(id: &str, page: &str, license: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            license: license.to_string(),
            source: EntrySource::Commons {
                page: page.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvenanceRecord {
    pub source: String,
    pub license: String,
    pub description: String,
    pub size_kb: f64,
}

/// Filename to record, in catalog order.
pub type ProvenanceMap = IndexMap<String, ProvenanceRecord>;

/// File size in KiB rounded to one decimal place.
pub fn size_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionSummary {
    pub attempted: usize,
    pub produced: usize,
    pub failed: Vec<String>,
    pub provenance_path: PathBuf,
    pub records: ProvenanceMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_rounded_to_one_decimal() {
        assert_eq!(size_kb(0), 0.0);
        assert_eq!(size_kb(1024), 1.0);
        assert_eq!(size_kb(1536), 1.5);
        assert_eq!(size_kb(10_291), 10.0);
        assert_eq!(size_kb(10_342), 10.1);
    }

    #[test]
    fn catalog_entry_reads_tagged_json() {
        let raw = serde_json::json!({
            "id": "physics.jpg",
            "kind": "commons",
            "page": "https://commons.wikimedia.org/wiki/File:Physics.svg",
            "license": "Public Domain",
            "description": "Physics symbols and equations"
        });
        let entry: CatalogEntry = serde_json::from_value(raw).expect("entry should parse");
        assert_eq!(entry.source.kind(), "commons");
        assert!(entry.source.is_remote());
        assert_eq!(entry.id, "physics.jpg");
    }

    #[test]
    fn provenance_record_has_exactly_four_fields() {
        let record = ProvenanceRecord {
            source: PLACEHOLDER_SOURCE.to_string(),
            license: PLACEHOLDER_LICENSE.to_string(),
            description: "Mathematics symbols and formulas".to_string(),
            size_kb: 12.3,
        };
        let value = serde_json::to_value(&record).expect("serialize");
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        for key in ["source", "license", "description", "size_kb"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
