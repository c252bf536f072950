//! Static catalogs of lesson-card images and the JSON catalog file format.

pub mod builtin;
pub mod schema;

use std::collections::HashSet;
use std::path::Path;

use crate::core::{
    config::PROVENANCE_FILE,
    errors::{AppError, AppResult},
    staging::STAGING_SUFFIX,
    types::CatalogEntry,
};

/// Reads a JSON array of entries and validates it.
pub fn load_catalog_file(path: &Path) -> AppResult<Vec<CatalogEntry>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| AppError::Io(format!("cannot read catalog {}: {err}", path.display())))?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)?;
    validate_catalog(&entries)?;
    Ok(entries)
}

/// Ids must be plain, unique filenames: they are joined onto the output
/// directory and used as provenance keys. Names the provisioner writes itself
/// (`sources.json`, `*.part`) are reserved.
pub fn validate_catalog(entries: &[CatalogEntry]) -> AppResult<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for entry in entries {
        let id = entry.id.as_str();
        if id.trim().is_empty() {
            return Err(AppError::InvalidInput("catalog entry with empty id".to_string()));
        }
        if id.trim() != id {
            return Err(AppError::InvalidInput(format!(
                "catalog id has surrounding whitespace: {id:?}"
            )));
        }
        let lower = id.to_ascii_lowercase();
        if lower == PROVENANCE_FILE || lower.ends_with(STAGING_SUFFIX) {
            return Err(AppError::InvalidInput(format!("catalog id is reserved: {id}")));
        }
        if id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(AppError::InvalidInput(format!(
                "catalog id must be a bare filename: {id}"
            )));
        }
        if !seen.insert(id) {
            return Err(AppError::InvalidInput(format!("duplicate catalog id: {id}")));
        }
    }
    Ok(())
}
